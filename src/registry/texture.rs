//! Texture registry: image decoding, GPU upload and slot bookkeeping.
//!
//! Textures are registered under a human-readable tag. A texture's slot
//! index equals its registration order and doubles as the GPU texture unit
//! it is bound to by [`TextureRegistry::bind_all`]. Lookups are first-match
//! linear scans with exact, case-sensitive tag comparison.

use std::path::Path;

use image::GenericImageView;

use crate::error::SceneError;

/// Number of texture units the shading runtime exposes.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Opaque GPU texture identifier handed out by a [`TextureDevice`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Pixel layout of a decoded image, implied by its channel count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

/// A decoded, vertically flipped image ready for upload.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

/// GPU-side texture operations the registry drives.
///
/// `upload` allocates a texture with repeat wrapping on both axes and linear
/// min/mag filtering, uploads the pixel data and returns a handle. It must
/// leave no implicit "currently bound" texture behind. See [`crate::gpu`]
/// for the wgpu-backed implementation.
pub trait TextureDevice {
    fn upload(&mut self, label: &str, image: &DecodedImage) -> TextureHandle;
    /// Bind `handle` to the GPU texture unit `unit`.
    fn bind(&mut self, unit: u32, handle: TextureHandle);
    /// Free the GPU resources behind `handle`.
    fn delete(&mut self, handle: TextureHandle);
}

/// One registered texture. Its slot index is its position in the registry.
#[derive(Clone, Debug)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
}

/// Ordered tag -> texture table, capped at [`MAX_TEXTURE_SLOTS`] entries.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Decode the image at `path`, upload it and register it under `tag`.
    ///
    /// Returns the slot index assigned to the new entry. The capacity check
    /// runs before decoding and channel validation runs before upload, so a
    /// failed load never allocates GPU resources and leaves the registry
    /// untouched.
    pub fn load(
        &mut self,
        device: &mut dyn TextureDevice,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<u32, SceneError> {
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(SceneError::registry_full());
        }

        let image = decode(path.as_ref())?;
        log::info!(
            "loaded image {:?} ({}x{}, {:?}) as {:?}",
            path.as_ref(),
            image.width,
            image.height,
            image.format,
            tag
        );

        let handle = device.upload(tag, &image);
        let slot = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        Ok(slot)
    }

    /// Bind every registered texture to the unit equal to its slot index.
    ///
    /// Call once after all loads and before any draw that resolves a tag.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for (slot, entry) in self.entries.iter().enumerate() {
            device.bind(slot as u32, entry.handle);
        }
    }

    /// Slot index of the first entry registered under `tag`.
    pub fn find_slot(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// GPU handle of the first entry registered under `tag`.
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Delete every registered texture and clear the registry.
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        for entry in self.entries.drain(..) {
            device.delete(entry.handle);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }
}

/// Decode an image file into tightly packed 8-bit pixels.
///
/// Rows are flipped vertically so the first row of the returned buffer is
/// the bottom of the image, matching the UV origin the meshes use. Channel
/// counts other than 3 (RGB) and 4 (RGBA) are rejected.
pub fn decode(path: &Path) -> Result<DecodedImage, SceneError> {
    let img = image::open(path).map_err(|source| SceneError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let channels = img.color().channel_count();
    let (width, height) = img.dimensions();
    let img = img.flipv();

    match channels {
        3 => Ok(DecodedImage {
            pixels: img.to_rgb8().into_raw(),
            width,
            height,
            format: PixelFormat::Rgb8,
        }),
        4 => Ok(DecodedImage {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
            format: PixelFormat::Rgba8,
        }),
        channels => Err(SceneError::UnsupportedChannelCount {
            path: path.to_path_buf(),
            channels,
        }),
    }
}
