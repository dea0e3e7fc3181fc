//! Declarative scene descriptions.
//!
//! A [`SceneDescription`] is the data the assembler walks: texture sources,
//! material definitions, light sources and an ordered list of object
//! placements. Descriptions serialize to JSON, so a scene can live next to
//! its assets instead of being spelled out as imperative draw code.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use cgmath::{Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};

use crate::geometry::MeshKind;
use crate::lighting::LightSource;
use crate::registry::material::Material;

/// An image file to register in the texture registry under `tag`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureSource {
    pub path: PathBuf,
    pub tag: String,
}

/// One object in the scene: a primitive, its transform and surface inputs.
///
/// Placements are transient; the assembler recomputes the model matrix and
/// reissues the bind/draw calls from them every frame. The transform is
/// composed as `translate · rotateX · rotateY · rotateZ · scale`, rotations
/// in degrees about the world axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectPlacement {
    pub label: String,
    pub mesh: MeshKind,
    pub scale: Vector3<f32>,
    pub rotation_degrees: Vector3<f32>,
    pub position: Vector3<f32>,
    /// Tag into the texture registry. Misses degrade to untextured drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    /// Tag into the material table. Misses leave material uniforms untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Flat RGBA colour; when set, texturing is disabled for this object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vector4<f32>>,
    #[serde(default = "default_uv_scale")]
    pub uv_scale: Vector2<f32>,
}

fn default_uv_scale() -> Vector2<f32> {
    Vector2::new(1.0, 1.0)
}

/// Everything needed to prepare and render one static scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    pub placements: Vec<ObjectPlacement>,
}

impl SceneDescription {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_json_reader(reader: impl Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("could not open scene file {path:?}"))?;
        Self::from_json_reader(BufReader::new(file))
            .with_context(|| format!("could not parse scene file {path:?}"))
    }

    /// The distinct mesh kinds the placements use, in the enum's fixed order.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        MeshKind::ALL
            .into_iter()
            .filter(|kind| self.placements.iter().any(|p| p.mesh == *kind))
            .collect()
    }
}
