use serde::{Deserialize, Serialize};

use crate::{Cuboid, SourceObject, TextureAtlas, round_half_up};

/// Vanilla models put the origin 24px above the feet; +Y points down.
pub const VERTICAL_ORIGIN_PX: f64 = 24.0;

/// Where the Z component of a cuboid's box offset comes from.
///
/// Two exporter revisions disagree here. `MinVertex` keeps all three offset
/// components mesh-local; `Location` reuses the object's world Y, which the
/// pivot already carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetZSource {
    #[default]
    MinVertex,
    Location,
}

impl Cuboid {
    /// Remap a Z-up authoring object into target (Y-down, pivot-relative) space.
    pub fn from_source(obj: &SourceObject, texture: TextureAtlas, offset_z: OffsetZSource) -> Self {
        let [lx, ly, lz] = obj.location;
        let [rx, ry, rz] = obj.rotation;
        let [sx, sy, sz] = obj.scale;
        let [dx, dy, dz] = obj.dimensions;
        let [vx, vy, vz] = obj.min_vertex;
        let [u_min, v_min] = obj.min_uv;

        let oz = match offset_z {
            OffsetZSource::MinVertex => vy * sy,
            OffsetZSource::Location => ly,
        };

        Cuboid {
            name: obj.name.clone(),
            texture_offset: [
                round_half_up(u_min * f64::from(texture.width)),
                round_half_up(v_min * f64::from(texture.height)),
            ],
            offset: [vx * sx, -vz * sz, oz],
            // Source Z is target height, source Y is target depth.
            size: [round_half_up(dx), round_half_up(dz), round_half_up(dy)],
            pivot: [lx, VERTICAL_ORIGIN_PX - lz, ly],
            rotation: [rx, -rz, ry],
        }
    }
}
