use cube_model::Vec3;
use serde::Serialize;

/// Corner signs in canonical order.
const CORNERS: [[f64; 3]; 8] = [
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Face loops in the order the UV rules expect. Do not reorder.
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 7, 6, 5],
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [2, 6, 7, 3],
    [4, 0, 3, 7],
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxMesh {
    pub vertices: [Vec3; 8],
    pub faces: [[usize; 4]; 6],
}

impl BoxMesh {
    pub fn face_vertices(&self, face: usize) -> [Vec3; 4] {
        self.faces[face].map(|i| self.vertices[i])
    }
}

/// Box centered on the local origin. Inputs are full extents and are halved here.
///
/// Authoring space is Z-up: `width` runs along X, `depth` along Y, `height` along Z.
/// Negative extents are not rejected and give a mirrored box.
pub fn build_box(width: f64, height: f64, depth: f64) -> BoxMesh {
    let half = [width * 0.5, depth * 0.5, height * 0.5];
    let p = |c: [f64; 3]| -> Vec3 { [c[0] * half[0], c[1] * half[1], c[2] * half[2]] };
    BoxMesh {
        vertices: CORNERS.map(p),
        faces: BOX_FACES,
    }
}
