#![cfg(feature = "vector")]

//! Property tests for the conversion pipeline over the browserless backend.

use std::fs;
use std::path::PathBuf;

use svgsnap::vector::VectorRenderer;
use svgsnap::{convert_with, Error, RenderConfig, Renderer, ViewBox};

const RECT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600"><rect x="10" y="10" width="100" height="100" fill="black"/></svg>"#;

fn temp_output(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("svgsnap-test-{}-{}", std::process::id(), name));
    p
}

fn render_to(svg: &str, out: &PathBuf) {
    let view_box = ViewBox::extract(svg).expect("fixture has a viewBox");
    let renderer = VectorRenderer::new(RenderConfig::default()).expect("create renderer");
    convert_with(renderer, svg, &view_box, out).expect("conversion failed");
}

#[test]
fn output_matches_viewbox_dimensions() {
    let out = temp_output("dims.png");
    render_to(RECT_SVG, &out);

    let png = fs::read(&out).expect("read output");
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");

    let pixmap = tiny_skia::Pixmap::decode_png(&png).expect("decode output");
    assert_eq!(pixmap.width(), 800);
    assert_eq!(pixmap.height(), 600);

    fs::remove_file(&out).ok();
}

#[test]
fn fractional_viewbox_rounds_dimensions_up() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 801.4 600.2"><rect width="10" height="10" fill="black"/></svg>"#;
    let out = temp_output("fractional.png");
    render_to(svg, &out);

    let png = fs::read(&out).expect("read output");
    let pixmap = tiny_skia::Pixmap::decode_png(&png).expect("decode output");
    assert_eq!(pixmap.width(), 802);
    assert_eq!(pixmap.height(), 601);

    fs::remove_file(&out).ok();
}

#[test]
fn unpainted_area_is_opaque_white() {
    let out = temp_output("background.png");
    render_to(RECT_SVG, &out);

    let png = fs::read(&out).expect("read output");
    let pixmap = tiny_skia::Pixmap::decode_png(&png).expect("decode output");

    // The rect covers the top-left corner only; the far corner is untouched
    // by the drawing and must come out opaque white.
    let far = pixmap.pixel(799, 599).expect("pixel in bounds");
    assert_eq!(far.alpha(), 255);
    assert_eq!(far.red(), 255);
    assert_eq!(far.green(), 255);
    assert_eq!(far.blue(), 255);

    let painted = pixmap.pixel(50, 50).expect("pixel in bounds");
    assert_eq!(painted.red(), 0);
    assert_eq!(painted.alpha(), 255);

    fs::remove_file(&out).ok();
}

#[test]
fn missing_viewbox_fails_without_output() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="10" height="10"/></svg>"#;
    let out = temp_output("no-viewbox.png");
    fs::remove_file(&out).ok();

    let err = svgsnap::convert(svg, &out, RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::FormatError(_)));
    assert!(!out.exists());
}

#[test]
fn missing_input_fails_without_output() {
    let input = temp_output("does-not-exist.svg");
    let out = temp_output("no-input.png");
    fs::remove_file(&out).ok();

    let err = svgsnap::convert_file(&input, &out, RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::FileAccessError(_)));
    assert!(!out.exists());
}

#[test]
fn rerun_overwrites_output_deterministically() {
    let out = temp_output("overwrite.png");

    render_to(RECT_SVG, &out);
    let first = fs::read(&out).expect("read first output");

    render_to(RECT_SVG, &out);
    let second = fs::read(&out).expect("read second output");

    assert_eq!(first, second);
    fs::remove_file(&out).ok();
}
