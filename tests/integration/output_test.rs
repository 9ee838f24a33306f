//! Output encoding and file writing.

use super::support::*;
use image::{Rgba, RgbaImage};
use ogimage::{Compositor, Config, OgImageError, TextSpec};
use tempfile::tempdir;

#[test]
fn test_png_keeps_partial_alpha() {
    let template = png_bytes(RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 0])));
    let logo = png_bytes(RgbaImage::from_pixel(5, 5, Rgba([0, 0, 255, 128])));
    let compositor = Compositor::new(&template, &logo).unwrap();

    let out = decode_rgba(&compositor.generate(&Config::default()).unwrap());
    assert_eq!(out.get_pixel(0, 0).0[3], 128);
    assert_eq!(out.get_pixel(10, 10).0[3], 0);
}

#[test]
fn test_generate_to_file_writes_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.png");

    let compositor = Compositor::new(&template_600x315(), &red_logo(100, 100)).unwrap();
    compositor
        .generate_default_to_file(TextSpec::new("title"), TextSpec::new("sub"), 20, &path)
        .unwrap();

    let data = std::fs::read(&path).unwrap();
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(decode_rgba(&data).get_pixel(480, 195).0, RED);
}

#[test]
fn test_failed_render_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.png");

    let compositor = Compositor::new(&template_600x315(), &red_logo(100, 100)).unwrap();
    let config = Config {
        texts: vec![TextSpec::new("title").with_font_bytes(Vec::new())],
        ..Config::default()
    };

    let err = compositor.generate_to_file(&config, &path).unwrap_err();
    assert!(matches!(err, OgImageError::Font { .. }));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("card.png");

    let compositor = Compositor::new(&template_600x315(), &red_logo(10, 10)).unwrap();
    let err = compositor.generate_to_file(&Config::default(), &path).unwrap_err();
    assert!(matches!(err, OgImageError::Io { .. }));
}

#[test]
fn test_from_files() {
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("template.jpg");
    let logo_path = dir.path().join("logo.png");
    std::fs::write(&template_path, gray_jpeg_template(100, 60)).unwrap();
    std::fs::write(&logo_path, red_logo(10, 10)).unwrap();

    let compositor = Compositor::from_files(&template_path, &logo_path).unwrap();
    assert_eq!(compositor.template_dimensions().width, 100);
    assert_eq!(compositor.template_dimensions().height, 60);

    let err = Compositor::from_files(dir.path().join("nope.png"), &logo_path).unwrap_err();
    assert!(err.to_string().contains("nope.png"));
}
