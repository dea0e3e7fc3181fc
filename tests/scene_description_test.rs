//! Scene descriptions as JSON documents.

use cgmath::Vector2;
use tableau::geometry::MeshKind;
use tableau::scene::{SceneDescription, still_life};

#[test]
fn still_life_survives_a_json_round_trip() {
    let scene = still_life();
    let json = serde_json::to_string_pretty(&scene).unwrap();
    let parsed = SceneDescription::from_json_str(&json).unwrap();

    assert_eq!(parsed, scene);
}

#[test]
fn a_minimal_document_parses_with_defaults() {
    let json = r#"{
        "textures": [{ "path": "texture/wood.jpg", "tag": "wood" }],
        "materials": [],
        "lights": [],
        "placements": [{
            "label": "board",
            "mesh": "box",
            "scale": { "x": 4.0, "y": 0.2, "z": 3.0 },
            "rotation_degrees": { "x": 20.0, "y": 80.0, "z": 0.0 },
            "position": { "x": -4.65, "y": -1.65, "z": 5.0 },
            "texture": "wood"
        }]
    }"#;

    let scene = SceneDescription::from_json_str(json).unwrap();

    assert_eq!(scene.textures[0].tag, "wood");
    let board = &scene.placements[0];
    assert_eq!(board.mesh, MeshKind::Box);
    assert_eq!(board.uv_scale, Vector2::new(1.0, 1.0));
    assert_eq!(board.material, None);
    assert_eq!(board.color, None);
    assert_eq!(scene.mesh_kinds(), vec![MeshKind::Box]);
}

#[test]
fn from_json_file_reports_missing_files() {
    let result = SceneDescription::from_json_file("no-such-scene.json");
    assert!(result.is_err());
}
