//! Texture registry against real image files on disk.

use tableau::SceneError;
use tableau::registry::texture::{PixelFormat, TextureRegistry, decode};

use crate::common::test_utils::{OpLog, RecordingDevice, images, init_logging};

mod common;

#[test]
fn rgb_image_takes_the_rgb_upload_path() {
    init_logging();
    let path = images::rgb_png("load-rgb.png", [10, 20, 30]);
    let log = OpLog::new();
    let mut device = RecordingDevice::new(&log);
    let mut registry = TextureRegistry::new();

    let slot = registry.load(&mut device, &path, "wood").unwrap();

    assert_eq!(slot, 0);
    assert_eq!(device.uploads.len(), 1);
    let (label, format, width, height) = &device.uploads[0];
    assert_eq!(label, "wood");
    assert_eq!(*format, PixelFormat::Rgb8);
    assert_eq!((*width, *height), (4, 4));
}

#[test]
fn rgba_image_takes_the_rgba_upload_path() {
    let path = images::rgba_png("load-rgba.png", [10, 20, 30, 200]);
    let log = OpLog::new();
    let mut device = RecordingDevice::new(&log);
    let mut registry = TextureRegistry::new();

    registry.load(&mut device, &path, "decal").unwrap();

    assert_eq!(device.uploads[0].1, PixelFormat::Rgba8);
}

#[test]
fn unsupported_channel_count_registers_nothing() {
    let path = images::gray_png("load-gray.png");
    let log = OpLog::new();
    let mut device = RecordingDevice::new(&log);
    let mut registry = TextureRegistry::new();

    let result = registry.load(&mut device, &path, "gray");

    match result {
        Err(SceneError::UnsupportedChannelCount { channels, .. }) => assert_eq!(channels, 1),
        other => panic!("expected UnsupportedChannelCount, got {other:?}"),
    }
    // The failure happens before any GPU allocation.
    assert!(device.uploads.is_empty());
    assert_eq!(registry.find_slot("gray"), None);
    assert!(registry.is_empty());
}

#[test]
fn unreadable_file_reports_a_decode_failure() {
    let log = OpLog::new();
    let mut device = RecordingDevice::new(&log);
    let mut registry = TextureRegistry::new();

    let result = registry.load(&mut device, "no-such-file.jpg", "ghost");

    assert!(matches!(result, Err(SceneError::ImageDecode { .. })));
    assert!(device.uploads.is_empty());
    assert!(registry.is_empty());
}

#[test]
fn registration_order_assigns_slots() {
    let wood = images::rgb_png("order-wood.png", [120, 80, 40]);
    let metal = images::rgb_png("order-metal.png", [160, 160, 170]);
    let log = OpLog::new();
    let mut device = RecordingDevice::new(&log);
    let mut registry = TextureRegistry::new();

    registry.load(&mut device, &wood, "wood").unwrap();
    registry.load(&mut device, &metal, "metal").unwrap();

    assert_eq!(registry.find_slot("wood"), Some(0));
    assert_eq!(registry.find_slot("metal"), Some(1));
    assert_eq!(registry.find_slot("nonexistent"), None);
}

#[test]
fn decode_flips_rows_vertically() {
    // Top row red, bottom row blue.
    let path = images::temp_dir().join("flip.png");
    let mut img = image::RgbImage::new(2, 2);
    for x in 0..2 {
        img.put_pixel(x, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(x, 1, image::Rgb([0, 0, 255]));
    }
    img.save(&path).unwrap();

    let decoded = decode(&path).unwrap();

    assert_eq!(decoded.format, PixelFormat::Rgb8);
    // The first decoded row is the bottom of the image.
    assert_eq!(&decoded.pixels[0..3], &[0, 0, 255]);
    assert_eq!(&decoded.pixels[6..9], &[255, 0, 0]);
}
