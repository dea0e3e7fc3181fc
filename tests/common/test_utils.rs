//! Recording doubles for the external scene services.
//!
//! All doubles append human-readable operation strings to a shared
//! [`OpLog`], so a test sees shader writes, mesh calls and texture-device
//! calls interleaved in emission order. Comparing two logs for equality is
//! the determinism check.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use tableau::geometry::{MeshGeometry, MeshKind};
use tableau::registry::texture::{DecodedImage, PixelFormat, TextureDevice, TextureHandle};
use tableau::shading::ShadingRuntime;

/// Route crate log output through the test harness capture.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared, ordered log of recorded operations.
#[derive(Clone, Debug, Default)]
pub struct OpLog(Rc<RefCell<Vec<String>>>);

impl OpLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, op: String) {
        self.0.borrow_mut().push(op);
    }

    /// Drain the log, leaving it empty for the next recording window.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub struct RecordingShader {
    log: OpLog,
}

impl RecordingShader {
    pub fn new(log: &OpLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ShadingRuntime for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.log.push(format!("bool {name}={value}"));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.log.push(format!("int {name}={value}"));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.log.push(format!("float {name}={value}"));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.log.push(format!("vec2 {name}={value:?}"));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.log.push(format!("vec3 {name}={value:?}"));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.log.push(format!("vec4 {name}={value:?}"));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        let raw: [[f32; 4]; 4] = value.into();
        self.log.push(format!("mat4 {name}={raw:?}"));
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        self.log.push(format!("sampler {name}=slot {slot}"));
    }
}

pub struct RecordingMeshes {
    log: OpLog,
}

impl RecordingMeshes {
    pub fn new(log: &OpLog) -> Self {
        Self { log: log.clone() }
    }
}

impl MeshGeometry for RecordingMeshes {
    fn load(&mut self, kind: MeshKind) {
        self.log.push(format!("load {kind:?}"));
    }

    fn draw(&mut self, kind: MeshKind) {
        self.log.push(format!("draw {kind:?}"));
    }
}

pub struct RecordingDevice {
    log: OpLog,
    pub uploads: Vec<(String, PixelFormat, u32, u32)>,
}

impl RecordingDevice {
    pub fn new(log: &OpLog) -> Self {
        Self {
            log: log.clone(),
            uploads: Vec::new(),
        }
    }
}

impl TextureDevice for RecordingDevice {
    fn upload(&mut self, label: &str, image: &DecodedImage) -> TextureHandle {
        let handle = TextureHandle(self.uploads.len() as u32);
        self.log.push(format!("upload {label} {:?}", image.format));
        self.uploads
            .push((label.to_string(), image.format, image.width, image.height));
        handle
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.log.push(format!("bind unit {unit} <- {handle:?}"));
    }

    fn delete(&mut self, handle: TextureHandle) {
        self.log.push(format!("delete {handle:?}"));
    }
}

/// Write small test images into a per-process temp directory.
pub mod images {
    use std::path::PathBuf;

    pub fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tableau-tests-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("could not create temp dir");
        dir
    }

    pub fn rgb_png(name: &str, color: [u8; 3]) -> PathBuf {
        let path = temp_dir().join(name);
        image::RgbImage::from_pixel(4, 4, image::Rgb(color))
            .save(&path)
            .expect("could not write RGB test image");
        path
    }

    pub fn rgba_png(name: &str, color: [u8; 4]) -> PathBuf {
        let path = temp_dir().join(name);
        image::RgbaImage::from_pixel(4, 4, image::Rgba(color))
            .save(&path)
            .expect("could not write RGBA test image");
        path
    }

    pub fn gray_png(name: &str) -> PathBuf {
        let path = temp_dir().join(name);
        image::GrayImage::from_pixel(4, 4, image::Luma([128]))
            .save(&path)
            .expect("could not write grayscale test image");
        path
    }
}
