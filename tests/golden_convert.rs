#![cfg(feature = "vector")]

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use svgsnap::vector::VectorRenderer;
use svgsnap::{RenderConfig, RenderDocument, Renderer, ViewBox};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_png_digest_matches_fixture() {
    let svg = fs::read_to_string("tests/fixtures/process.svg").expect("read fixture");
    let view_box = ViewBox::extract(&svg).expect("fixture has a viewBox");

    let mut renderer = VectorRenderer::new(RenderConfig::default()).expect("create renderer");
    renderer.set_viewport(view_box.viewport()).expect("set viewport");
    renderer
        .load_document(&RenderDocument::new(&svg))
        .expect("load fixture");
    let png = renderer.capture_png().expect("capture png");

    let digest = hex::encode(Sha256::digest(&png));

    let expected_path = golden_path("process.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}
