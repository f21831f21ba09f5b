use cube_model::{Cuboid, SourceObject, TextureAtlas};
use tracing::{debug, warn};

use crate::{ExportOptions, NoExtras, write_model_class};

/// Static pose: one `ModelRenderer` per mesh object, in the order given.
pub fn export_static(
    objects: &[SourceObject],
    texture: TextureAtlas,
    options: &ExportOptions,
) -> String {
    let cuboids = convert_meshes(objects, texture, options);
    write_model_class(options, texture, &cuboids, &mut NoExtras)
}

pub(crate) fn convert_meshes(
    objects: &[SourceObject],
    texture: TextureAtlas,
    options: &ExportOptions,
) -> Vec<Cuboid> {
    if texture.is_empty() {
        warn!("no active texture, exporting with texture size {texture}");
    }
    objects
        .iter()
        .filter(|obj| {
            if !obj.is_mesh() {
                debug!(object = %obj.name, kind = ?obj.kind, "skipping non-mesh object");
            }
            obj.is_mesh()
        })
        .map(|obj| {
            let cuboid = Cuboid::from_source(obj, texture, options.offset_z);
            debug!(
                object = %obj.name,
                size = ?cuboid.size,
                pivot = ?cuboid.pivot,
                "converted cuboid"
            );
            cuboid
        })
        .collect()
}
