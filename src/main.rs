//! Converts `process.svg` in the working directory into `process.png`.
//!
//! Paths are fixed; no command-line arguments are consumed. On success the
//! parsed dimensions and the output location are printed to stdout; any
//! failure prints to stderr and exits with status 1.

use std::path::PathBuf;
use std::process;

use svgsnap::{convert_with, new_renderer, read_source, RenderConfig, ViewBox};

fn run() -> svgsnap::Result<()> {
    let input = PathBuf::from("process.svg");
    let output = PathBuf::from("process.png");

    let svg = read_source(&input)?;
    let view_box = ViewBox::extract(&svg)?;
    println!("SVG dimensions: {}x{}", view_box.width, view_box.height);

    let renderer = new_renderer(RenderConfig::default())?;
    convert_with(renderer, &svg, &view_box, &output)?;
    println!("PNG saved to {}", output.display());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
