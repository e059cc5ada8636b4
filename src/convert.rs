//! The conversion pipeline: source text to a PNG file on disk.
//!
//! Execution is a single forward pass: extract the viewBox, derive the
//! viewport, compose the render document, render, capture, persist. There is
//! no retry and no partial-output cleanup; any error aborts the pass and the
//! renderer's drop releases whatever it acquired.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{Error, RenderDocument, Renderer, Result, ViewBox, Viewport};

#[cfg(any(feature = "cdp", feature = "vector"))]
use crate::RenderConfig;

/// Summary of a completed conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The viewBox extracted from the source document
    pub view_box: ViewBox,
    /// The viewport the document was rendered at
    pub viewport: Viewport,
    /// Size of the written PNG in bytes
    pub png_bytes: usize,
    /// Where the PNG was written
    pub output: PathBuf,
}

/// Run the render half of the pipeline on a caller-supplied backend: size the
/// viewport from the viewBox, load the composed document, capture, and write
/// the PNG to `output`.
///
/// The renderer is consumed; it is closed after a successful capture, and
/// dropped (releasing its resources) if any step fails.
pub fn convert_with<R: Renderer>(
    mut renderer: R,
    svg: &str,
    view_box: &ViewBox,
    output: &Path,
) -> Result<Conversion> {
    let viewport = view_box.viewport();
    let document = RenderDocument::new(svg);

    renderer.set_viewport(viewport)?;
    renderer.load_document(&document)?;
    let png = renderer.capture_png()?;

    fs::write(output, &png)
        .map_err(|e| Error::IoError(format!("{}: {}", output.display(), e)))?;
    renderer.close()?;

    debug!("wrote {} bytes to {}", png.len(), output.display());
    Ok(Conversion {
        view_box: *view_box,
        viewport,
        png_bytes: png.len(),
        output: output.to_path_buf(),
    })
}

/// Convert SVG text to a PNG file using the default backend.
///
/// The viewBox is extracted before any backend is acquired, so a malformed
/// document never launches a browser.
#[cfg(any(feature = "cdp", feature = "vector"))]
pub fn convert(svg: &str, output: &Path, config: RenderConfig) -> Result<Conversion> {
    let view_box = ViewBox::extract(svg)?;
    info!("SVG dimensions: {}x{}", view_box.width, view_box.height);

    let renderer = crate::new_renderer(config)?;
    convert_with(renderer, svg, &view_box, output)
}

/// Convert an SVG file on disk to a PNG file using the default backend.
#[cfg(any(feature = "cdp", feature = "vector"))]
pub fn convert_file(input: &Path, output: &Path, config: RenderConfig) -> Result<Conversion> {
    let svg = crate::svg::read_source(input)?;
    convert(&svg, output, config)
}
