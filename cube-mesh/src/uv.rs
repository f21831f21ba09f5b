use cube_model::{ModelError, TextureAtlas, Vec3};
use serde::Serialize;

use crate::BoxMesh;

/// Box extents in authoring units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// From a Z-up object's `dimensions` (x, y, z).
    pub fn from_object_dimensions([x, y, z]: Vec3) -> Self {
        Self {
            width: x,
            height: z,
            depth: y,
        }
    }
}

/// UV rectangle of one face plus the UV given to each of its four loops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceUv {
    pub offset_u: f64,
    pub offset_v: f64,
    pub right: f64,
    pub down: f64,
    /// Indexed by loop position within the face, not by corner.
    pub loops: [[f64; 2]; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceUnwrap {
    pub vertices: [usize; 4],
    pub uvs: [[f64; 2]; 4],
}

#[derive(Clone, Copy)]
enum USpan {
    Width,
    Depth,
}

#[derive(Clone, Copy)]
enum VSpan {
    Depth,
    Height,
}

struct FaceRule {
    /// offset_u = u[0] * dy_u + u[1] * dx_u
    u: [f64; 2],
    /// Faces in the top band start at v = 1, the side band one depth lower.
    top_band: bool,
    right: USpan,
    down: VSpan,
    /// Loop that receives the top-left corner. The rest follow TL, BL, BR, TR.
    first_loop: usize,
}

// Keyed by position in `BOX_FACES`. The differing `first_loop` values follow
// the face winding and must stay as they are for texture compatibility.
#[rustfmt::skip]
const FACE_RULES: [FaceRule; 6] = [
    FaceRule { u: [1.0, 1.0], top_band: true, right: USpan::Width, down: VSpan::Depth, first_loop: 2 },
    FaceRule { u: [1.0, 0.0], top_band: true, right: USpan::Width, down: VSpan::Depth, first_loop: 1 },
    FaceRule { u: [1.0, 1.0], top_band: false, right: USpan::Depth, down: VSpan::Height, first_loop: 2 },
    FaceRule { u: [1.0, 0.0], top_band: false, right: USpan::Width, down: VSpan::Height, first_loop: 2 },
    FaceRule { u: [0.0, 0.0], top_band: false, right: USpan::Depth, down: VSpan::Height, first_loop: 2 },
    FaceRule { u: [2.0, 1.0], top_band: false, right: USpan::Width, down: VSpan::Height, first_loop: 0 },
];

/// Unfolded-cross UVs for the six faces of a `build_box` mesh, in face order.
///
/// Nothing is clamped or normalized. A texture with a zero axis is refused.
pub fn project_box_uv(
    dims: BoxDimensions,
    texture: TextureAtlas,
) -> Result<[FaceUv; 6], ModelError> {
    if texture.is_empty() {
        return Err(ModelError::EmptyTexture {
            width: texture.width,
            height: texture.height,
        });
    }
    let tex_w = f64::from(texture.width);
    let tex_h = f64::from(texture.height);
    let dx_u = dims.width / tex_w;
    let dy_u = dims.depth / tex_w;
    let dy_v = dims.depth / tex_h;
    let dz_v = dims.height / tex_h;

    Ok(FACE_RULES.map(|rule| {
        let offset_u = rule.u[0] * dy_u + rule.u[1] * dx_u;
        let offset_v = if rule.top_band { 1.0 } else { 1.0 - dy_v };
        let right = match rule.right {
            USpan::Width => dx_u,
            USpan::Depth => dy_u,
        };
        let down = match rule.down {
            VSpan::Depth => dy_v,
            VSpan::Height => dz_v,
        };
        let corners = [
            [offset_u, offset_v],
            [offset_u, offset_v - down],
            [offset_u + right, offset_v - down],
            [offset_u + right, offset_v],
        ];
        FaceUv {
            offset_u,
            offset_v,
            right,
            down,
            loops: std::array::from_fn(|n| corners[(n + 4 - rule.first_loop) % 4]),
        }
    }))
}

/// Per-loop UVs for `mesh`, paired with its face loops.
pub fn unwrap_box(
    mesh: &BoxMesh,
    dims: BoxDimensions,
    texture: TextureAtlas,
) -> Result<Vec<FaceUnwrap>, ModelError> {
    let faces = project_box_uv(dims, texture)?;
    Ok(mesh
        .faces
        .iter()
        .zip(faces)
        .map(|(loop_verts, face)| FaceUnwrap {
            vertices: *loop_verts,
            uvs: face.loops,
        })
        .collect())
}
