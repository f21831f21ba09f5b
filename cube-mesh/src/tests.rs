use cube_model::{ModelError, TextureAtlas};

use crate::*;

#[test]
fn box_has_fixed_topology() {
    for (w, h, d) in [(1.0, 1.0, 1.0), (8.0, 12.0, 4.0), (0.5, 3.0, 7.25)] {
        let mesh = build_box(w, h, d);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 6);
        for v in mesh.vertices {
            assert_eq!(v[0].abs(), w / 2.0);
            assert_eq!(v[1].abs(), d / 2.0);
            assert_eq!(v[2].abs(), h / 2.0);
        }
    }
}

#[test]
fn box_vertex_and_face_order() {
    let mesh = build_box(2.0, 2.0, 2.0);
    assert_eq!(mesh.vertices[0], [1.0, 1.0, -1.0]);
    assert_eq!(mesh.vertices[2], [-1.0, -1.0, -1.0]);
    assert_eq!(mesh.vertices[6], [-1.0, -1.0, 1.0]);
    assert_eq!(mesh.faces[1], [4, 7, 6, 5]);
    assert_eq!(mesh.faces[5], [4, 0, 3, 7]);
    assert_eq!(
        mesh.face_vertices(0),
        [[1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]]
    );
}

#[test]
fn negative_extent_mirrors() {
    let mesh = build_box(-2.0, 2.0, 2.0);
    assert_eq!(mesh.vertices[0][0], -1.0);
}

#[test]
fn cube_face_one_offset() {
    let faces =
        project_box_uv(BoxDimensions::new(2.0, 2.0, 2.0), TextureAtlas::new(16, 16)).unwrap();
    assert_eq!(faces[1].offset_u, 2.0 / 16.0);
}

#[test]
fn face_offsets_follow_rules() {
    // dx_u = 0.125, dy_u = 0.0625, dy_v = 0.125, dz_v = 0.375
    let faces =
        project_box_uv(BoxDimensions::new(8.0, 12.0, 4.0), TextureAtlas::new(64, 32)).unwrap();
    let got: Vec<[f64; 4]> = faces
        .iter()
        .map(|f| [f.offset_u, f.offset_v, f.right, f.down])
        .collect();
    assert_eq!(
        got,
        vec![
            [0.1875, 1.0, 0.125, 0.125],
            [0.0625, 1.0, 0.125, 0.125],
            [0.1875, 0.875, 0.0625, 0.375],
            [0.0625, 0.875, 0.125, 0.375],
            [0.0, 0.875, 0.0625, 0.375],
            [0.25, 0.875, 0.125, 0.375],
        ]
    );
}

#[test]
fn corner_assignment_depends_on_face_index() {
    let faces =
        project_box_uv(BoxDimensions::new(8.0, 12.0, 4.0), TextureAtlas::new(64, 32)).unwrap();

    // Most faces start the top-left corner on loop 2.
    assert_eq!(
        faces[0].loops,
        [[0.3125, 0.875], [0.3125, 1.0], [0.1875, 1.0], [0.1875, 0.875]]
    );
    // Face 1 starts on loop 1.
    assert_eq!(
        faces[1].loops,
        [[0.1875, 1.0], [0.0625, 1.0], [0.0625, 0.875], [0.1875, 0.875]]
    );
    // Face 5 starts on loop 0.
    assert_eq!(
        faces[5].loops,
        [[0.25, 0.875], [0.25, 0.5], [0.375, 0.5], [0.375, 0.875]]
    );
}

#[test]
fn empty_texture_is_refused() {
    let dims = BoxDimensions::new(1.0, 1.0, 1.0);
    assert_eq!(
        project_box_uv(dims, TextureAtlas::NONE),
        Err(ModelError::EmptyTexture { width: 0, height: 0 })
    );
    assert!(project_box_uv(dims, TextureAtlas::new(16, 0)).is_err());
}

#[test]
fn unwrap_pairs_loops_with_uvs() {
    let mesh = build_box(8.0, 12.0, 4.0);
    let dims = BoxDimensions::from_object_dimensions([8.0, 4.0, 12.0]);
    assert_eq!(dims, BoxDimensions::new(8.0, 12.0, 4.0));

    let unwrap = unwrap_box(&mesh, dims, TextureAtlas::new(64, 32)).unwrap();
    assert_eq!(unwrap.len(), 6);
    assert_eq!(unwrap[4].vertices, [2, 6, 7, 3]);
    assert_eq!(unwrap[4].uvs[2], [0.0, 0.875]);
}
