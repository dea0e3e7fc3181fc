//! The built-in desk still life.
//!
//! A fixed arrangement: a desk plane, a clipboard with a note pad and ring
//! binding, two coffee mugs, a larger note pad, a keyboard, a laptop and
//! two pens. All values are literal scene data; the assembler gives them
//! meaning.
//!
//! Texture tags are matched exactly as the assets were named, including the
//! capitalized `Screen`, `Mug`, `Coffee` and `Pen` tags.

use cgmath::{Vector2, Vector3};

use crate::geometry::MeshKind;
use crate::lighting::LightSource;
use crate::registry::material::Material;
use crate::scene::description::{ObjectPlacement, SceneDescription, TextureSource};

fn textured(
    label: &str,
    mesh: MeshKind,
    scale: (f32, f32, f32),
    rotation: (f32, f32, f32),
    position: (f32, f32, f32),
    texture: &str,
    material: &str,
) -> ObjectPlacement {
    ObjectPlacement {
        label: label.to_string(),
        mesh,
        scale: scale.into(),
        rotation_degrees: rotation.into(),
        position: position.into(),
        texture: Some(texture.to_string()),
        material: Some(material.to_string()),
        color: None,
        uv_scale: Vector2::new(1.0, 1.0),
    }
}

fn colored(
    label: &str,
    mesh: MeshKind,
    scale: (f32, f32, f32),
    rotation: (f32, f32, f32),
    position: (f32, f32, f32),
    color: (f32, f32, f32, f32),
) -> ObjectPlacement {
    ObjectPlacement {
        label: label.to_string(),
        mesh,
        scale: scale.into(),
        rotation_degrees: rotation.into(),
        position: position.into(),
        texture: None,
        material: None,
        color: Some(color.into()),
        uv_scale: Vector2::new(1.0, 1.0),
    }
}

fn texture(path: &str, tag: &str) -> TextureSource {
    TextureSource {
        path: path.into(),
        tag: tag.to_string(),
    }
}

fn material(
    tag: &str,
    ambient_color: (f32, f32, f32),
    ambient_strength: f32,
    diffuse_color: (f32, f32, f32),
    specular_color: (f32, f32, f32),
    shininess: f32,
) -> Material {
    Material {
        tag: tag.to_string(),
        ambient_color: ambient_color.into(),
        ambient_strength,
        diffuse_color: diffuse_color.into(),
        specular_color: specular_color.into(),
        shininess,
    }
}

/// The complete still-life scene description.
pub fn still_life() -> SceneDescription {
    use MeshKind::{Box, Cylinder, Plane, Torus};

    let textures = vec![
        texture("texture/Blacktable.jpg", "black"),
        texture("texture/Metalclip.jpg", "metal"),
        texture("texture/wood.jpg", "wood"),
        texture("texture/keyboard.jpeg", "keyboard"),
        texture("texture/Screen.jpeg", "Screen"),
        texture("texture/MugBLACK.jpg", "Mug"),
        texture("texture/Coffee.jpeg", "Coffee"),
        texture("texture/PEN.jpg", "Pen"),
        texture("texture/Screen2.jpg", "Screen2"),
    ];

    let materials = vec![
        material(
            "metal",
            (0.2, 0.2, 0.2),
            0.3,
            (0.2, 0.2, 0.2),
            (0.5, 0.5, 0.5),
            22.0,
        ),
        material(
            "wood",
            (0.1, 0.1, 0.1),
            0.2,
            (0.3, 0.3, 0.3),
            (0.1, 0.1, 0.1),
            0.3,
        ),
        material(
            "glass",
            (0.4, 0.4, 0.4),
            0.3,
            (0.3, 0.3, 0.3),
            (0.6, 0.6, 0.6),
            85.0,
        ),
    ];

    let lights = vec![
        // Main overhead light above the table.
        LightSource {
            position: Vector3::new(42.0, 25.0, 3.0),
            ambient_color: Vector3::new(0.1, 0.1, 0.1),
            diffuse_color: Vector3::new(0.4, 0.4, 0.4),
            specular_color: Vector3::new(0.2, 0.2, 0.2),
            focal_strength: 64.0,
            specular_intensity: 0.4,
        },
        // Side fill light.
        LightSource {
            position: Vector3::new(-16.0, 6.0, -4.0),
            ambient_color: Vector3::new(0.05, 0.05, 0.05),
            diffuse_color: Vector3::new(0.3, 0.3, 0.3),
            specular_color: Vector3::new(0.15, 0.15, 0.15),
            focal_strength: 48.0,
            specular_intensity: 0.3,
        },
        // Front fill light for shadow reduction.
        LightSource {
            position: Vector3::new(16.0, 5.0, -10.0),
            ambient_color: Vector3::new(0.1, 0.1, 0.1),
            diffuse_color: Vector3::new(0.3, 0.3, 0.3),
            specular_color: Vector3::new(0.1, 0.1, 0.1),
            focal_strength: 32.0,
            specular_intensity: 0.2,
        },
    ];

    let placements = vec![
        textured(
            "desk",
            Plane,
            (10.0, 1.0, 10.0),
            (20.0, 0.0, 0.0),
            (-1.5, 0.0, 0.0),
            "black",
            "glass",
        ),
        textured(
            "clipboard",
            Box,
            (4.0, 0.2, 3.0),
            (20.0, 80.0, 0.0),
            (-4.65, -1.65, 5.0),
            "wood",
            "wood",
        ),
        colored(
            "note pad",
            Box,
            (3.5, 0.1, 2.75),
            (20.0, 80.0, 0.0),
            (-4.65, -1.5, 5.0),
            (1.0, 1.0, 1.0, 1.0),
        ),
        textured(
            "clipboard clip",
            Torus,
            (1.0, 1.0, 0.5),
            (0.0, 170.0, 0.0),
            (-4.35, -1.75, 3.35),
            "metal",
            "metal",
        ),
        textured(
            "note pad ring 1",
            Torus,
            (0.15, 0.1, 0.15),
            (180.0, 0.0, 0.0),
            (-5.65, -0.95, 3.5),
            "metal",
            "metal",
        ),
        textured(
            "note pad ring 2",
            Torus,
            (0.15, 0.1, 0.15),
            (180.0, 0.0, 0.0),
            (-5.8, -1.22, 4.25),
            "metal",
            "metal",
        ),
        textured(
            "note pad ring 3",
            Torus,
            (0.15, 0.1, 0.15),
            (180.0, 0.0, 0.0),
            (-5.96, -1.53, 5.1),
            "metal",
            "metal",
        ),
        textured(
            "note pad ring 4",
            Torus,
            (0.15, 0.1, 0.15),
            (180.0, 0.0, 0.0),
            (-6.11, -1.8, 5.8),
            "metal",
            "metal",
        ),
        textured(
            "note pad ring 5",
            Torus,
            (0.15, 0.1, 0.15),
            (180.0, 0.0, 0.0),
            (-6.19, -1.98, 6.3),
            "metal",
            "metal",
        ),
        textured(
            "tall mug",
            Torus,
            (0.45, 0.45, 7.0),
            (110.0, 0.0, 0.0),
            (-4.0, -0.52, 2.0),
            "Mug",
            "glass",
        ),
        textured(
            "tall mug handle",
            Torus,
            (0.45, 0.45, 0.3),
            (20.0, -30.0, 0.0),
            (-4.45, 0.15, 2.15),
            "Mug",
            "glass",
        ),
        textured(
            "tall mug liquid",
            Cylinder,
            (0.45, 1.0, 0.4),
            (20.0, 140.0, 0.0),
            (-4.0, -0.22, 2.15),
            "Coffee",
            "glass",
        ),
        textured(
            "small mug",
            Torus,
            (0.4, 0.4, 2.5),
            (110.0, 0.0, 0.0),
            (3.0, -0.52, 3.5),
            "Mug",
            "glass",
        ),
        textured(
            "small mug liquid",
            Cylinder,
            (0.3, 0.35, 0.45),
            (30.0, 0.0, 0.0),
            (3.0, -0.52, 3.5),
            "Coffee",
            "glass",
        ),
        colored(
            "big note pad",
            Box,
            (4.0, 0.2, 3.25),
            (20.0, 80.0, 0.0),
            (0.5, -2.0, 5.8),
            (1.0, 1.0, 1.0, 1.0),
        ),
        textured(
            "big note pad cardboard",
            Box,
            (4.01, 0.13, 3.4),
            (20.0, 80.0, 0.0),
            (0.5, -2.08, 5.8),
            "wood",
            "wood",
        ),
        textured(
            "big note pad ring 3",
            Torus,
            (0.12, 0.1, 0.15),
            (180.0, 100.0, 0.0),
            (0.8, -1.32, 4.0),
            "metal",
            "metal",
        ),
        textured(
            "big note pad ring 2",
            Torus,
            (0.12, 0.1, 0.15),
            (180.0, 100.0, 0.0),
            (0.15, -1.25, 3.9),
            "metal",
            "metal",
        ),
        textured(
            "big note pad ring 1",
            Torus,
            (0.12, 0.1, 0.15),
            (180.0, 94.0, 0.0),
            (-0.45, -1.23, 3.8),
            "metal",
            "metal",
        ),
        textured(
            "big note pad ring 4",
            Torus,
            (0.12, 0.1, 0.15),
            (180.0, 94.0, 0.0),
            (1.45, -1.33, 4.15),
            "metal",
            "metal",
        ),
        textured(
            "big note pad ring 5",
            Torus,
            (0.12, 0.1, 0.15),
            (180.0, 95.0, 0.0),
            (2.1, -1.33, 4.27),
            "metal",
            "metal",
        ),
        textured(
            "keyboard",
            Box,
            (4.01, 0.13, 2.1),
            (21.0, -9.0, 0.0),
            (-0.15, -0.65, 2.0),
            "keyboard",
            "glass",
        ),
        textured(
            "laptop",
            Box,
            (2.5, 0.13, 4.01),
            (-144.0, 97.5, 50.0),
            (0.1, 0.98, 1.2),
            "Screen2",
            "glass",
        ),
        colored(
            "laptop back",
            Box,
            (2.5, 0.13, 4.01),
            (-144.0, 97.5, 50.0),
            (0.1, 0.98, 1.15),
            (1.0, 1.0, 1.0, 1.0),
        ),
        textured(
            "pen 1",
            Cylinder,
            (1.5, 0.1, 0.1),
            (20.0, 120.0, 0.0),
            (0.6, -1.9, 5.7),
            "Pen",
            "glass",
        ),
        textured(
            "pen 2",
            Cylinder,
            (1.5, 0.1, 0.1),
            (20.0, 80.0, 0.0),
            (-2.6, -1.9, 5.7),
            "Pen",
            "glass",
        ),
    ];

    SceneDescription {
        textures,
        materials,
        lights,
        placements,
    }
}
