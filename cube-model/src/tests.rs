use crate::*;

fn head() -> SourceObject {
    SourceObject {
        location: [0.0, 0.0, 8.0],
        dimensions: [8.0, 8.0, 8.0],
        min_vertex: [-4.0, -4.0, 4.0],
        ..SourceObject::mesh("head")
    }
}

#[test]
fn round_half_up_uses_literal_bias() {
    assert_eq!(round_half_up(2.0), 2);
    assert_eq!(round_half_up(2.4999), 2);
    assert_eq!(round_half_up(2.5), 2);
    assert_eq!(round_half_up(2.5006), 2);
    assert_eq!(round_half_up(2.6), 3);
    assert_eq!(round_half_up(7.9), 8);
    assert_eq!(round_half_up(0.0), 0);
    assert_eq!(round_half_up(-0.6), -1);
}

#[test]
fn identity_object_lands_on_vertical_origin() {
    let cuboid = Cuboid::from_source(
        &SourceObject::mesh("box"),
        TextureAtlas::new(64, 32),
        OffsetZSource::MinVertex,
    );
    assert_eq!(cuboid.pivot, [0.0, 24.0, 0.0]);
    assert!(cuboid.rotation.iter().all(|r| *r == 0.0));
}

#[test]
fn head_converts_into_target_space() {
    let cuboid = Cuboid::from_source(&head(), TextureAtlas::new(64, 32), OffsetZSource::MinVertex);
    assert_eq!(cuboid.name, "head");
    assert_eq!(cuboid.pivot, [0.0, 16.0, 0.0]);
    assert_eq!(cuboid.size, [8, 8, 8]);
    assert_eq!(cuboid.offset, [-4.0, -4.0, -4.0]);
    assert_eq!(cuboid.texture_offset, [0, 0]);
}

#[test]
fn axes_are_swapped_for_y_up() {
    let obj = SourceObject {
        location: [1.0, 2.0, 3.0],
        rotation: [0.1, 0.2, 0.3],
        scale: [2.0, 3.0, 4.0],
        dimensions: [4.0, 6.0, 12.0],
        min_vertex: [-1.0, -1.0, 1.5],
        ..SourceObject::mesh("arm")
    };
    let cuboid = Cuboid::from_source(&obj, TextureAtlas::NONE, OffsetZSource::MinVertex);
    assert_eq!(cuboid.pivot, [1.0, 21.0, 2.0]);
    assert_eq!(cuboid.rotation, [0.1, -0.3, 0.2]);
    assert_eq!(cuboid.size, [4, 12, 6]);
    assert_eq!(cuboid.offset, [-2.0, -6.0, -3.0]);

    let by_location = Cuboid::from_source(&obj, TextureAtlas::NONE, OffsetZSource::Location);
    assert_eq!(by_location.offset[2], 2.0);
}

#[test]
fn texture_offset_rounds_with_bias() {
    let obj = SourceObject {
        min_uv: [0.5, 0.25],
        ..SourceObject::mesh("body")
    };
    let cuboid = Cuboid::from_source(&obj, TextureAtlas::new(64, 32), OffsetZSource::MinVertex);
    assert_eq!(cuboid.texture_offset, [32, 8]);

    // 0.5px sits exactly on the bias boundary and rounds down.
    let obj = SourceObject {
        min_uv: [0.5 / 64.0, 0.0],
        ..SourceObject::mesh("body")
    };
    let cuboid = Cuboid::from_source(&obj, TextureAtlas::new(64, 32), OffsetZSource::MinVertex);
    assert_eq!(cuboid.texture_offset, [0, 0]);
}

#[test]
fn missing_texture_yields_zero_offsets() {
    let obj = SourceObject {
        min_uv: [0.5, 0.5],
        ..SourceObject::mesh("body")
    };
    let cuboid = Cuboid::from_source(&obj, TextureAtlas::NONE, OffsetZSource::MinVertex);
    assert_eq!(cuboid.texture_offset, [0, 0]);
}

#[test]
fn min_vertex_takes_largest_z() {
    let vertices = [
        [1.0, 2.0, -3.0],
        [-1.0, 5.0, 4.0],
        [0.5, -2.0, 0.0],
    ];
    assert_eq!(min_vertex(&vertices), Some([-1.0, -2.0, 4.0]));
    assert_eq!(min_vertex(&[]), None);
}

#[test]
fn min_uv_flips_v() {
    let layer = [[0.25, 0.75], [0.5, 0.5], [0.75, 1.0 - 0.125]];
    assert_eq!(min_uv(Some(layer.as_slice())), [0.25, 0.125]);
    assert_eq!(min_uv(None), [0.0, 0.0]);
    assert_eq!(min_uv(Some(&[])), [1.0, 1.0]);
}

#[test]
fn bounding_dimensions_apply_scale() {
    let vertices = [[-0.5, -1.0, -2.0], [0.5, 1.0, 2.0]];
    assert_eq!(bounding_dimensions(&vertices, [2.0, 1.0, -0.5]), [2.0, 2.0, 2.0]);
    assert_eq!(bounding_dimensions(&[], [1.0; 3]), [0.0; 3]);
}

#[test]
fn scene_object_extraction() {
    let json = r#"{
        "texture": { "width": 64, "height": 32 },
        "objects": [
            {
                "name": "head",
                "location": [0, 0, 8],
                "mesh": {
                    "vertices": [[4, 4, -4], [-4, -4, 4], [4, -4, 4]],
                    "uv_layer": [[0.0, 1.0], [0.5, 0.5]]
                }
            },
            { "name": "Camera", "kind": "CAMERA" },
            { "name": "broken" }
        ]
    }"#;
    let scene: Scene = serde_json::from_str(json).unwrap();
    assert_eq!(scene.texture(), TextureAtlas::new(64, 32));

    let objects = scene.source_objects();
    assert_eq!(objects.len(), 2);
    let head = &objects[0];
    assert_eq!(head.min_vertex, [-4.0, -4.0, 4.0]);
    assert_eq!(head.dimensions, [8.0, 8.0, 8.0]);
    assert_eq!(head.min_uv, [0.0, 0.0]);
    assert_eq!(head.scale, [1.0; 3]);
    assert_eq!(objects[1].kind, ObjectKind::Camera);
}

#[test]
fn mesh_without_vertices_is_rejected() {
    let obj: SceneObject = serde_json::from_str(r#"{ "name": "ghost" }"#).unwrap();
    assert_eq!(
        SourceObject::from_scene(&obj),
        Err(ModelError::EmptyMesh {
            name: "ghost".to_string()
        })
    );

    let given: SceneObject = serde_json::from_str(
        r#"{ "name": "ghost", "dimensions": [1, 2, 3], "min_vertex": [0, 0, 0] }"#,
    )
    .unwrap();
    let source = SourceObject::from_scene(&given).unwrap();
    assert_eq!(source.dimensions, [1.0, 2.0, 3.0]);
}

#[test]
fn curve_evaluation_holds_ends() {
    let curve = AnimationCurve::linear(&[(10.0, 4.0), (0.0, 0.0)]);
    assert_eq!(curve.keyframes()[0].frame, 0.0);
    assert_eq!(curve.evaluate(-3.0), 0.0);
    assert_eq!(curve.evaluate(5.0), 2.0);
    assert_eq!(curve.evaluate(10.0), 4.0);
    assert_eq!(curve.evaluate(25.0), 4.0);

    let stepped = AnimationCurve::new(
        vec![
            Keyframe { frame: 0.0, value: 1.0 },
            Keyframe { frame: 4.0, value: 3.0 },
        ],
        Interpolation::Constant,
    );
    assert_eq!(stepped.evaluate(3.9), 1.0);
    assert_eq!(stepped.evaluate(4.0), 3.0);
    assert_eq!(AnimationCurve::default().evaluate(2.0), 0.0);
}

#[test]
fn frame_count_falls_back_to_last_key() {
    let mut track = NlaTrack::new(
        "walk",
        12,
        vec![AnimationCurve::linear(&[(0.0, 0.0), (7.5, 1.0)])],
    );
    assert_eq!(track.frame_count(), 12);
    track.frame_end = None;
    assert_eq!(track.frame_count(), 8);
    track.curves.clear();
    assert_eq!(track.frame_count(), 0);
}

#[test]
fn sampling_follows_channel_count() {
    let curves: Vec<_> = (0..6)
        .map(|i| AnimationCurve::linear(&[(0.0, 0.0), (9.0, i as f64 * 9.0)]))
        .collect();
    let track = NlaTrack::new("idle", 10, curves);
    let sampled = sample_track(&track).unwrap();
    assert_eq!(sampled.kind, ChannelKind::LocRot);
    assert_eq!(sampled.kind.tag(), "loc+rot");
    assert_eq!(sampled.channels.len(), 6);
    assert!(sampled.channels.iter().all(|c| c.len() == 10));
    assert_eq!(sampled.channels[2][4], 8.0);

    let odd = NlaTrack::new("odd", 5, vec![AnimationCurve::constant(1.0); 4]);
    let sampled = sample_track(&odd).unwrap();
    assert_eq!(sampled.kind, ChannelKind::None);
    assert!(sampled.channels.is_empty());

    let short = NlaTrack::new("short", 5, vec![AnimationCurve::constant(1.0); 2]);
    assert_eq!(
        sample_track(&short),
        Err(ModelError::InsufficientCurveChannels {
            track: "short".to_string(),
            channels: 2
        })
    );
}

#[test]
fn oversized_tracks_are_refused() {
    let drift = NlaTrack {
        name: "drift".to_string(),
        frame_end: None,
        curves: vec![AnimationCurve::linear(&[(0.0, 0.0), (1e12, 1.0)]); 3],
    };
    assert_eq!(drift.frame_count(), u32::MAX);
    assert_eq!(
        sample_track(&drift),
        Err(ModelError::TooManyFrames {
            track: "drift".to_string(),
            frames: u32::MAX,
            max: MAX_FRAME_COUNT
        })
    );

    let long = NlaTrack::new("long", MAX_FRAME_COUNT + 1, vec![AnimationCurve::constant(0.0); 3]);
    assert!(matches!(
        sample_track(&long),
        Err(ModelError::TooManyFrames { .. })
    ));

    let edge = NlaTrack::new("edge", MAX_FRAME_COUNT, vec![AnimationCurve::constant(0.0); 3]);
    let sampled = sample_track(&edge).unwrap();
    assert_eq!(sampled.frame_count, MAX_FRAME_COUNT);
    assert_eq!(sampled.channels[0].len(), MAX_FRAME_COUNT as usize);
}

#[test]
fn texture_size_parses() {
    assert_eq!("64x32".parse::<TextureAtlas>(), Ok(TextureAtlas::new(64, 32)));
    assert_eq!("16X16".parse::<TextureAtlas>(), Ok(TextureAtlas::new(16, 16)));
    assert!("64".parse::<TextureAtlas>().is_err());
    assert!("ax2".parse::<TextureAtlas>().is_err());
    assert!(TextureAtlas::NONE.is_empty());
    assert_eq!(TextureAtlas::new(64, 32).to_string(), "64x32");
}
