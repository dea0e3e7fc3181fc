//! Scene assembly: from a declarative description to bind/draw calls.
//!
//! [`SceneAssembler`] owns the texture registry and material table for its
//! lifetime and walks the placement list of a [`SceneDescription`] every
//! frame. The walk is fully deterministic: given the same description,
//! `render_frame` emits the identical sequence of uniform and draw
//! operations on every call.

use cgmath::{Deg, Matrix4};

use crate::error::SceneError;
use crate::geometry::MeshGeometry;
use crate::lighting;
use crate::registry::material::MaterialTable;
use crate::registry::texture::{TextureDevice, TextureRegistry};
use crate::shading::{ShadingRuntime, uniform};

pub mod description;
pub mod still_life;

pub use description::{ObjectPlacement, SceneDescription, TextureSource};
pub use still_life::still_life;

/// Model matrix of a placement: `T(position) · Rx · Ry · Rz · S(scale)`.
///
/// The rotation order is X, then Y, then Z, each about the corresponding
/// world axis. Swapping the order changes the rendered output, so this
/// composition is part of the scene contract.
pub fn model_matrix(placement: &ObjectPlacement) -> Matrix4<f32> {
    Matrix4::from_translation(placement.position)
        * Matrix4::from_angle_x(Deg(placement.rotation_degrees.x))
        * Matrix4::from_angle_y(Deg(placement.rotation_degrees.y))
        * Matrix4::from_angle_z(Deg(placement.rotation_degrees.z))
        * Matrix4::from_nonuniform_scale(
            placement.scale.x,
            placement.scale.y,
            placement.scale.z,
        )
}

/// Orchestrates scene setup and per-frame draw-call emission.
#[derive(Debug, Default)]
pub struct SceneAssembler {
    description: SceneDescription,
    textures: TextureRegistry,
    materials: MaterialTable,
}

impl SceneAssembler {
    pub fn new(description: SceneDescription) -> Self {
        Self {
            description,
            textures: TextureRegistry::new(),
            materials: MaterialTable::new(),
        }
    }

    /// Assembler for the built-in desk still life.
    pub fn still_life() -> Self {
        Self::new(still_life())
    }

    pub fn description(&self) -> &SceneDescription {
        &self.description
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// One-time scene setup.
    ///
    /// Loads and binds every texture source, defines the materials, pushes
    /// the light configuration and loads each mesh kind the placements use
    /// exactly once. A texture that fails to decode is logged and skipped;
    /// its tag stays unregistered and the affected placements render
    /// untextured. Capacity violations are hard errors.
    pub fn prepare(
        &mut self,
        device: &mut dyn TextureDevice,
        shader: &mut dyn ShadingRuntime,
        meshes: &mut dyn MeshGeometry,
    ) -> Result<(), SceneError> {
        for source in &self.description.textures {
            match self.textures.load(device, &source.path, &source.tag) {
                Ok(_) => {}
                Err(err @ SceneError::RegistryFull { .. }) => return Err(err),
                Err(err) => log::error!("skipping texture {:?}: {err}", source.tag),
            }
        }
        self.textures.bind_all(device);

        for material in &self.description.materials {
            self.materials.define(material.clone());
        }

        lighting::configure(shader, &self.description.lights)?;

        for kind in self.description.mesh_kinds() {
            meshes.load(kind);
        }

        Ok(())
    }

    /// Emit the full frame: per placement, push the model matrix, resolve
    /// texture and material tags and draw the primitive. Tag misses degrade
    /// the single object, never the frame.
    pub fn render_frame(&self, shader: &mut dyn ShadingRuntime, meshes: &mut dyn MeshGeometry) {
        for placement in &self.description.placements {
            shader.set_mat4(uniform::MODEL, model_matrix(placement));

            if let Some(color) = placement.color {
                shader.set_bool(uniform::USE_TEXTURE, false);
                shader.set_vec4(uniform::OBJECT_COLOR, color);
            } else if let Some(tag) = &placement.texture {
                match self.textures.find_slot(tag) {
                    Some(slot) => {
                        shader.set_bool(uniform::USE_TEXTURE, true);
                        shader.set_sampler(uniform::OBJECT_TEXTURE, slot);
                        shader.set_vec2(uniform::UV_SCALE, placement.uv_scale);
                    }
                    None => {
                        log::warn!(
                            "texture tag {tag:?} is not registered, drawing {:?} untextured",
                            placement.label
                        );
                        shader.set_bool(uniform::USE_TEXTURE, false);
                    }
                }
            } else {
                shader.set_bool(uniform::USE_TEXTURE, false);
            }

            if let Some(tag) = &placement.material {
                match self.materials.find(tag) {
                    Some(material) => {
                        shader.set_vec3(uniform::MATERIAL_AMBIENT_COLOR, material.ambient_color);
                        shader
                            .set_float(uniform::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
                        shader.set_vec3(uniform::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
                        shader.set_vec3(uniform::MATERIAL_SPECULAR_COLOR, material.specular_color);
                        shader.set_float(uniform::MATERIAL_SHININESS, material.shininess);
                    }
                    // Material uniforms keep their previous values on a miss.
                    None => log::warn!(
                        "material tag {tag:?} is not defined, keeping previous material for {:?}",
                        placement.label
                    ),
                }
            }

            meshes.draw(placement.mesh);
        }
    }

    /// Free all registered GPU textures and clear the registry.
    pub fn release(&mut self, device: &mut dyn TextureDevice) {
        self.textures.release_all(device);
    }
}
