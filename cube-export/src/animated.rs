use std::collections::HashMap;

use cube_model::{
    AnimationTrack, MAX_FRAME_COUNT, ModelError, SourceObject, TextureAtlas, sample_track,
};
use tracing::{debug, warn};

use crate::static_model::convert_meshes;
use crate::{
    ClassExtras, ExportOptions, JavaWriter, NameScope, float_literal, java_identifier,
    write_model_class,
};

const RENDERER_INTERFACE: &str = "IAnimationRenderer";
const FRAMES_TABLE: &str = "ANIMATION_FRAMES";

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    pub name: String,
    pub index: usize,
    /// Longest frame count among the objects carrying this animation.
    pub max_frame: u32,
    /// Objects carrying this animation, in scene order.
    pub objects: Vec<String>,
}

/// Animation name → index and max frame, indexed in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationMap {
    entries: Vec<AnimationEntry>,
    by_name: HashMap<String, usize>,
}

impl AnimationMap {
    pub fn build(objects: &[SourceObject]) -> Self {
        let mut map = Self::default();
        for obj in objects.iter().filter(|o| o.is_mesh()) {
            if obj.tracks.is_empty() {
                warn!(object = %obj.name, "object has no animation tracks");
                continue;
            }
            for track in &obj.tracks {
                let frames = track.frame_count();
                if frames > MAX_FRAME_COUNT {
                    warn!(
                        object = %obj.name,
                        track = %track.name,
                        frames,
                        "track is longer than {MAX_FRAME_COUNT} frames, leaving it out"
                    );
                    continue;
                }
                match map.by_name.get(&track.name) {
                    Some(&index) => {
                        let entry = &mut map.entries[index];
                        entry.max_frame = entry.max_frame.max(frames);
                        if !entry.objects.contains(&obj.name) {
                            entry.objects.push(obj.name.clone());
                        }
                    }
                    None => {
                        let index = map.entries.len();
                        map.by_name.insert(track.name.clone(), index);
                        map.entries.push(AnimationEntry {
                            name: track.name.clone(),
                            index,
                            max_frame: frames,
                            objects: vec![obj.name.clone()],
                        });
                    }
                }
            }
        }
        map
    }

    pub fn get(&self, name: &str) -> Option<&AnimationEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn max_frame(&self, name: &str) -> Option<u32> {
        self.get(name).map(|e| e.max_frame)
    }

    pub fn entries(&self) -> &[AnimationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Samples every usable track of `obj` at its own frame range.
pub fn sample_object(obj: &SourceObject) -> Result<Vec<AnimationTrack>, ModelError> {
    if obj.tracks.is_empty() {
        return Err(ModelError::MissingAnimationData {
            name: obj.name.clone(),
        });
    }
    let mut out = Vec::with_capacity(obj.tracks.len());
    for track in &obj.tracks {
        match sample_track(track) {
            Ok(sampled) => out.push(sampled),
            Err(err) => warn!(object = %obj.name, "ignoring track: {err}"),
        }
    }
    if out.is_empty() {
        return Err(ModelError::MissingAnimationData {
            name: obj.name.clone(),
        });
    }
    Ok(out)
}

struct TrackTable {
    /// Java field holding the samples; resolved in `declare`.
    field: String,
    track: AnimationTrack,
}

struct ObjectTables {
    object: String,
    tables: Vec<TrackTable>,
}

struct AnimationTables {
    map: AnimationMap,
    objects: Vec<ObjectTables>,
    interface: String,
    frames_table: String,
    /// `ANIMATION_{NAME}` constant per map entry.
    constants: Vec<String>,
    /// Renderer class per map entry.
    renderers: Vec<String>,
}

fn constant_name(animation: &str) -> String {
    format!("ANIMATION_{}", java_identifier(animation).to_ascii_uppercase())
}

fn table_name(object: &str, animation: &str) -> String {
    format!("{}_{}", java_identifier(object), java_identifier(animation))
}

impl ClassExtras for AnimationTables {
    fn declare(&mut self, members: &mut NameScope, types: &mut NameScope) {
        self.interface = types.claim(RENDERER_INTERFACE);
        if !self.map.is_empty() {
            self.frames_table = members.claim(FRAMES_TABLE);
        }
        for entry in self.map.entries() {
            self.constants.push(members.claim(&constant_name(&entry.name)));
            let renderer = format!("{}AnimationRenderer", java_identifier(&entry.name));
            self.renderers.push(types.claim(&renderer));
        }
        for obj in &mut self.objects {
            for table in &mut obj.tables {
                table.field = members.claim(&table_name(&obj.object, &table.track.name));
            }
        }
    }

    fn members(&self, w: &mut JavaWriter) {
        w.blank();
        w.open(format!("private interface {}", self.interface));
        w.line(
            "public void render(Entity entity, float limbSwing, float limbSwingAmount, float ageInTicks, float netHeadYaw,",
        );
        w.line("        float headPitch, float scale);");
        w.close();

        if !self.map.is_empty() {
            w.blank();
            for (entry, constant) in self.map.entries().iter().zip(&self.constants) {
                w.line(format!("public static final int {constant} = {};", entry.index));
            }
            let frames: Vec<String> = self
                .map
                .entries()
                .iter()
                .map(|e| e.max_frame.to_string())
                .collect();
            w.line(format!(
                "public static final int[] {} = {{{}}};",
                self.frames_table,
                frames.join(", ")
            ));
        }

        for obj in &self.objects {
            for TrackTable { field, track } in &obj.tables {
                w.blank();
                w.line(format!(
                    "// {}: {}, {}, {} frames",
                    obj.object, track.name, track.kind, track.frame_count
                ));
                let header = format!("private static final float[][] {field} =");
                if track.channels.is_empty() {
                    w.line(format!("{header} {{}};"));
                    continue;
                }
                w.open(header);
                let rows = track.channels.len();
                for (i, channel) in track.channels.iter().enumerate() {
                    let values: Vec<String> = channel.iter().copied().map(float_literal).collect();
                    let sep = if i + 1 < rows { "," } else { "" };
                    w.line(format!("{{{}}}{sep}", values.join(", ")));
                }
                w.close_with(";");
            }
        }
    }

    fn inner_types(&self, w: &mut JavaWriter) {
        for renderer in &self.renderers {
            w.blank();
            w.open(format!("class {renderer} implements {}", self.interface));
            w.open_wrapped(
                "public void render(Entity entity, float limbSwing, float limbSwingAmount, float ageInTicks, float netHeadYaw,",
                "float headPitch, float scale)",
            );
            w.close();
            w.close();
        }
    }
}

/// Static pose plus per-object sampled animation tables.
///
/// Objects without usable animation data keep their renderer and lose only their tables.
/// Interpolation between frames is left to the consuming engine.
pub fn export_animated(
    objects: &[SourceObject],
    texture: TextureAtlas,
    options: &ExportOptions,
) -> String {
    let map = AnimationMap::build(objects);
    debug!(animations = map.len(), "built animation map");

    let cuboids = convert_meshes(objects, texture, options);
    let tables = objects
        .iter()
        .filter(|o| o.is_mesh())
        .filter_map(|obj| match sample_object(obj) {
            Ok(tracks) => Some(ObjectTables {
                object: obj.name.clone(),
                tables: tracks
                    .into_iter()
                    .map(|track| TrackTable {
                        field: String::new(),
                        track,
                    })
                    .collect(),
            }),
            Err(err) => {
                warn!("skipping animation: {err}");
                None
            }
        })
        .collect();

    let mut extras = AnimationTables {
        map,
        objects: tables,
        interface: String::new(),
        frames_table: String::new(),
        constants: Vec::new(),
        renderers: Vec::new(),
    };
    write_model_class(options, texture, &cuboids, &mut extras)
}
