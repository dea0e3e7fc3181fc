//! Light source descriptors and one-time configuration.
//!
//! Lights are pushed to the shading runtime exactly once at scene setup,
//! field by field, flattened by index into `lightSources[i].*` uniforms.
//! There are no dynamic updates afterwards.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::shading::{ShadingRuntime, uniform};

/// Number of light sources the shading runtime exposes.
pub const MAX_LIGHT_SOURCES: usize = 4;

/// One point light source in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

/// Push every light to the shading runtime and enable the lighting model.
///
/// Rejects configurations with more than [`MAX_LIGHT_SOURCES`] entries
/// instead of silently dropping the excess.
pub fn configure(
    shader: &mut dyn ShadingRuntime,
    lights: &[LightSource],
) -> Result<(), SceneError> {
    if lights.len() > MAX_LIGHT_SOURCES {
        return Err(SceneError::TooManyLights {
            given: lights.len(),
        });
    }

    shader.set_bool(uniform::USE_LIGHTING, true);

    for (index, light) in lights.iter().enumerate() {
        shader.set_vec3(&format!("lightSources[{index}].position"), light.position);
        shader.set_vec3(
            &format!("lightSources[{index}].ambientColor"),
            light.ambient_color,
        );
        shader.set_vec3(
            &format!("lightSources[{index}].diffuseColor"),
            light.diffuse_color,
        );
        shader.set_vec3(
            &format!("lightSources[{index}].specularColor"),
            light.specular_color,
        );
        shader.set_float(
            &format!("lightSources[{index}].focalStrength"),
            light.focal_strength,
        );
        shader.set_float(
            &format!("lightSources[{index}].specularIntensity"),
            light.specular_intensity,
        );
    }

    Ok(())
}
