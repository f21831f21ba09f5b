use serde::Deserialize;
use tracing::{debug, warn};

use crate::{ModelError, NlaTrack, ObjectKind, SourceObject, TextureAtlas, Vec3};

/// Raw mesh data as dumped by a host adapter.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MeshData {
    #[serde(default)]
    pub vertices: Vec<Vec3>,
    /// One UV per face loop of the active layer, if the mesh has one.
    #[serde(default)]
    pub uv_layer: Option<Vec<[f64; 2]>>,
}

/// One object of a scene snapshot. Precomputed fields win over values derived from `mesh`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    #[serde(default)]
    pub location: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub mesh: Option<MeshData>,
    #[serde(default)]
    pub dimensions: Option<Vec3>,
    #[serde(default)]
    pub min_vertex: Option<Vec3>,
    #[serde(default)]
    pub min_uv: Option<[f64; 2]>,
    #[serde(default)]
    pub tracks: Vec<NlaTrack>,
}

fn unit_scale() -> Vec3 {
    [1.0; 3]
}

/// Scene snapshot: ordered objects plus the active texture, if any.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub texture: Option<TextureAtlas>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn texture(&self) -> TextureAtlas {
        self.texture.unwrap_or(TextureAtlas::NONE)
    }

    /// Converts every object in order. Objects that can't be read are logged and dropped.
    pub fn source_objects(&self) -> Vec<SourceObject> {
        self.objects
            .iter()
            .filter_map(|obj| match SourceObject::from_scene(obj) {
                Ok(source) => Some(source),
                Err(err) => {
                    warn!("skipping object: {err}");
                    None
                }
            })
            .collect()
    }
}

/// Smallest X, smallest Y and *largest* Z over `vertices`.
///
/// Z is inverted because the target's Y axis points down from the top face.
pub fn min_vertex(vertices: &[Vec3]) -> Option<Vec3> {
    let (first, rest) = vertices.split_first()?;
    let mut out = *first;
    for v in rest {
        out[0] = out[0].min(v[0]);
        out[1] = out[1].min(v[1]);
        out[2] = out[2].max(v[2]);
    }
    Some(out)
}

/// `(u_min, 1 - v_max)` over a UV layer; `(0, 0)` without one.
///
/// The scan starts from `u = 1`, `v = 0`, so an empty layer yields `(1, 1)`.
pub fn min_uv(uv_layer: Option<&[[f64; 2]]>) -> [f64; 2] {
    let Some(layer) = uv_layer else {
        return [0.0, 0.0];
    };
    let mut u_min = 1.0_f64;
    let mut v_max = 0.0_f64;
    for uv in layer {
        if uv[0] < u_min {
            u_min = uv[0];
        }
        if uv[1] > v_max {
            v_max = uv[1];
        }
    }
    [u_min, 1.0 - v_max]
}

/// Axis-aligned extent of `vertices`, scaled. Matches the host's `dimensions` for unrotated data.
pub fn bounding_dimensions(vertices: &[Vec3], scale: Vec3) -> Vec3 {
    let Some((first, rest)) = vertices.split_first() else {
        return [0.0; 3];
    };
    let mut lo = *first;
    let mut hi = *first;
    for v in rest {
        for axis in 0..3 {
            lo[axis] = lo[axis].min(v[axis]);
            hi[axis] = hi[axis].max(v[axis]);
        }
    }
    std::array::from_fn(|axis| (hi[axis] - lo[axis]) * scale[axis].abs())
}

impl SourceObject {
    pub fn from_scene(obj: &SceneObject) -> Result<Self, ModelError> {
        let vertices = obj.mesh.as_ref().map(|m| m.vertices.as_slice()).unwrap_or(&[]);

        let min_vertex = match (obj.min_vertex, min_vertex(vertices)) {
            (Some(given), _) => given,
            (None, Some(derived)) => derived,
            (None, None) if obj.kind == ObjectKind::Mesh => {
                return Err(ModelError::EmptyMesh {
                    name: obj.name.clone(),
                });
            }
            (None, None) => [0.0; 3],
        };
        let dimensions = obj
            .dimensions
            .unwrap_or_else(|| bounding_dimensions(vertices, obj.scale));
        let min_uv = obj.min_uv.unwrap_or_else(|| {
            min_uv(obj.mesh.as_ref().and_then(|m| m.uv_layer.as_deref()))
        });
        debug!(
            object = %obj.name,
            ?min_vertex,
            ?dimensions,
            ?min_uv,
            "extracted object"
        );

        Ok(SourceObject {
            name: obj.name.clone(),
            kind: obj.kind,
            location: obj.location,
            rotation: obj.rotation,
            scale: obj.scale,
            dimensions,
            min_vertex,
            min_uv,
            tracks: obj.tracks.clone(),
        })
    }
}
