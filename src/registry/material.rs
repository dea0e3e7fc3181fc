//! Static material lookup table.
//!
//! Materials are defined once at scene setup and never mutated afterwards.
//! Duplicate tags are permitted and are not an error; lookup is a
//! first-match linear scan, so the first definition wins.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// Phong-style surface material pushed to the shading runtime per object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

/// Ordered tag -> material table.
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
        }
    }

    /// Append one immutable material definition.
    pub fn define(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// First material defined under `tag`, if any.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
