//! Layout files rendered end to end.

use super::support::*;
use ogimage::{LayoutFile, OgImageError};
use tempfile::tempdir;

fn write_inputs(dir: &std::path::Path) {
    std::fs::write(dir.join("template.png"), template_600x315()).unwrap();
    std::fs::write(dir.join("logo.png"), red_logo(100, 100)).unwrap();
}

#[test]
fn test_layout_renders_relative_to_file() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());

    let layout_path = dir.path().join("card.yaml");
    std::fs::write(
        &layout_path,
        r##"
template: template.png
logo: logo.png
output: card.png
position: bottom-right
padding: 20
texts:
  - content: "1,232,232.12345678 BTC BURNED"
    size: 16
    color: "#00FF00"
    x: 20
    y: 150
"##,
    )
    .unwrap();

    let layout = LayoutFile::from_file(&layout_path).unwrap();
    layout.render().unwrap();

    let out = decode_rgba(&std::fs::read(dir.path().join("card.png")).unwrap());
    assert_eq!(out.get_pixel(480, 195).0, RED);
    assert!(out.pixels().any(|p| p.0 == [0, 255, 0, 255]));
}

#[test]
fn test_layout_with_font_file() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    std::fs::create_dir(dir.path().join("fonts")).unwrap();
    std::fs::write(dir.path().join("fonts/mono.ttf"), MONO_FONT).unwrap();

    let layout_path = dir.path().join("card.yaml");
    std::fs::write(
        &layout_path,
        r#"
template: template.png
logo: logo.png
output: card.png
position: bottom-right
texts:
  - content: HH
    font: fonts/mono.ttf
    size: 64
    x: 20
    y: 100
"#,
    )
    .unwrap();

    LayoutFile::from_file(&layout_path).unwrap().render().unwrap();

    let out = decode_rgba(&std::fs::read(dir.path().join("card.png")).unwrap());
    let (min_x, min_y, _, max_y) = dark_bounds(&out).unwrap();
    assert!(min_x >= 20);
    assert!((45..=48).contains(&(max_y - min_y + 1)));
}

#[test]
fn test_layout_jpeg_output() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());

    let layout_path = dir.path().join("card.yaml");
    std::fs::write(
        &layout_path,
        "template: template.png\nlogo: logo.png\noutput: card.jpg\nquality: 60\n",
    )
    .unwrap();

    LayoutFile::from_file(&layout_path).unwrap().render().unwrap();

    let data = std::fs::read(dir.path().join("card.jpg")).unwrap();
    assert_eq!(&data[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_layout_missing_font_file() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());

    let layout_path = dir.path().join("card.yaml");
    std::fs::write(
        &layout_path,
        r#"
template: template.png
logo: logo.png
output: card.png
texts:
  - content: title
    font: missing.ttf
"#,
    )
    .unwrap();

    let err = LayoutFile::from_file(&layout_path).unwrap().render().unwrap_err();
    assert!(matches!(err, OgImageError::Io { .. }));
    assert!(err.to_string().contains("text entry 0"));
    assert!(!dir.path().join("card.png").exists());
}

#[test]
fn test_layout_env_substitution() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    std::env::set_var("OGIMAGE_LAYOUT_TEST_OUTPUT", "from-env.png");

    let layout_path = dir.path().join("card.yaml");
    std::fs::write(
        &layout_path,
        "template: template.png\nlogo: logo.png\noutput: ${OGIMAGE_LAYOUT_TEST_OUTPUT}\n",
    )
    .unwrap();

    LayoutFile::from_file(&layout_path).unwrap().render().unwrap();
    assert!(dir.path().join("from-env.png").exists());
}
