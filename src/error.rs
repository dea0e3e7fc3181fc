//! Failure taxonomy for scene assembly.
//!
//! Nothing in this crate is fatal to the host process: decode and channel
//! failures leave the affected tag unregistered and rendering degrades to
//! untextured output, while the capacity errors are explicit so callers
//! never overflow a fixed-size slot table silently.

use std::path::PathBuf;

use crate::lighting::MAX_LIGHT_SOURCES;
use crate::registry::texture::MAX_TEXTURE_SLOTS;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The image file could not be read or decoded.
    #[error("could not decode image {path:?}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image is neither RGB (3 channels) nor RGBA (4 channels).
    /// Nothing is uploaded to the GPU on this path.
    #[error("image {path:?} has {channels} channels, only 3 (RGB) and 4 (RGBA) are supported")]
    UnsupportedChannelCount { path: PathBuf, channels: u8 },

    /// All texture-unit slots are taken; the load was rejected before decoding.
    #[error("texture registry is full ({capacity} slots)")]
    RegistryFull { capacity: usize },

    /// More light sources were supplied than the shading runtime exposes.
    #[error("{given} light sources given, the shading runtime supports at most {MAX_LIGHT_SOURCES}")]
    TooManyLights { given: usize },
}

impl SceneError {
    pub fn registry_full() -> Self {
        Self::RegistryFull {
            capacity: MAX_TEXTURE_SLOTS,
        }
    }
}
