//! wgpu-backed texture device.
//!
//! Production implementation of [`TextureDevice`] over a borrowed-for-longer
//! `wgpu::Device`/`wgpu::Queue` pair (both are internally reference counted,
//! so cloning only clones the ref). Each uploaded texture gets repeat
//! wrapping on all axes and linear min/mag filtering; the texture-unit table
//! mirrors the slot assignment of the registry so a host renderer can build
//! its bind groups from [`WgpuTextures::bound`].

use crate::registry::texture::{
    DecodedImage, MAX_TEXTURE_SLOTS, PixelFormat, TextureDevice, TextureHandle,
};

/// A GPU texture with its view and sampler.
#[derive(Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &DecodedImage,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        // wgpu has no 3-channel 8-bit format, so RGB input is widened to
        // RGBA with an opaque alpha channel.
        let rgba;
        let pixels = match image.format {
            PixelFormat::Rgba8 => image.pixels.as_slice(),
            PixelFormat::Rgb8 => {
                rgba = image
                    .pixels
                    .chunks_exact(3)
                    .flat_map(|px| [px[0], px[1], px[2], 255])
                    .collect::<Vec<u8>>();
                rgba.as_slice()
            }
        };

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Texture-unit table backed by wgpu resources.
#[derive(Debug)]
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: Vec<Option<Texture>>,
    units: [Option<TextureHandle>; MAX_TEXTURE_SLOTS],
}

impl WgpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            textures: Vec::new(),
            units: [None; MAX_TEXTURE_SLOTS],
        }
    }

    /// The texture currently bound to `unit`, if any.
    pub fn bound(&self, unit: u32) -> Option<&Texture> {
        let handle = (*self.units.get(unit as usize)?)?;
        self.texture(handle)
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0 as usize)?.as_ref()
    }
}

impl TextureDevice for WgpuTextures {
    fn upload(&mut self, label: &str, image: &DecodedImage) -> TextureHandle {
        let texture = Texture::from_decoded(&self.device, &self.queue, label, image);
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(Some(texture));
        handle
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        match self.units.get_mut(unit as usize) {
            Some(slot) => *slot = Some(handle),
            None => log::warn!(
                "texture unit {} is out of range (max {})",
                unit,
                MAX_TEXTURE_SLOTS
            ),
        }
    }

    fn delete(&mut self, handle: TextureHandle) {
        // Dropping the wrapper releases the underlying wgpu resources.
        if let Some(slot) = self.textures.get_mut(handle.0 as usize) {
            *slot = None;
        }
        for unit in self.units.iter_mut() {
            if *unit == Some(handle) {
                *unit = None;
            }
        }
    }
}
