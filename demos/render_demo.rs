//! Step-by-step walkthrough of the conversion pipeline

use std::path::PathBuf;

use svgsnap::{convert_with, new_renderer, read_source, RenderConfig, ViewBox};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("svgsnap - Render Demo\n");

    let input = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "tests/fixtures/process.svg".to_string()),
    );
    let output = PathBuf::from(
        std::env::args()
            .nth(2)
            .unwrap_or_else(|| "demo.png".to_string()),
    );

    println!("Reading SVG: {}", input.display());
    let svg = read_source(&input)?;
    println!("Source is {} bytes\n", svg.len());

    let view_box = ViewBox::extract(&svg)?;
    println!(
        "viewBox: min=({}, {}) size={}x{}",
        view_box.min_x, view_box.min_y, view_box.width, view_box.height
    );
    let viewport = view_box.viewport();
    println!("Viewport: {}x{}\n", viewport.width, viewport.height);

    println!("Rendering...");
    let renderer = new_renderer(RenderConfig::default())?;
    let report = convert_with(renderer, &svg, &view_box, &output)?;
    println!("Captured {} bytes", report.png_bytes);
    println!("PNG saved to: {}", report.output.display());

    Ok(())
}
