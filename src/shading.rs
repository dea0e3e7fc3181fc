//! Write-only seam to the shading runtime.
//!
//! The shading runtime (shader compilation, program switching, the actual
//! uniform buffers) lives outside this crate. All the scene assembler needs
//! is to push named values: scalars, vectors, matrices and sampler slot
//! indices, addressed by the string names the shaders declare. Structure
//! members use dotted suffixes (`material.shininess`) and light sources use
//! array-index suffixes (`lightSources[0].position`).

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform names fixed by the shading pipeline.
pub mod uniform {
    /// Per-object model matrix.
    pub const MODEL: &str = "model";
    /// Flat RGBA colour used when texturing is disabled.
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler bound to the texture-unit slot of the current object.
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Whether the fragment stage samples `objectTexture` or uses `objectColor`.
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Global switch for the custom lighting model.
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// UV multiplier applied to mesh texture coordinates.
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";
}

/// Named-uniform setters exposed by the external shading runtime.
///
/// The scene core only ever writes; it never reads uniform state back.
/// Implementations decide how names map onto their own binding model.
pub trait ShadingRuntime {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    /// Point a sampler uniform at a texture-unit slot.
    fn set_sampler(&mut self, name: &str, slot: u32);
}
