//! svgsnap
//!
//! Renders SVG documents to PNG by loading them in a headless browser and
//! taking a screenshot. The render viewport is derived from the SVG's own
//! `viewBox` attribute, so the output raster matches the drawing's declared
//! size.
//!
//! # Features
//!
//! - **CDP Backend** (default): screenshots via headless Chrome
//! - **Vector Backend**: browserless rasterization via `resvg`, used as the
//!   fallback and by the deterministic test suite
//! - **Modular Design**: adapter-based architecture for swappable backends
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use svgsnap::RenderConfig;
//!
//! # fn main() -> svgsnap::Result<()> {
//! let report = svgsnap::convert_file(
//!     Path::new("process.svg"),
//!     Path::new("process.png"),
//!     RenderConfig::default(),
//! )?;
//! println!("rendered {}x{}", report.viewport.width, report.viewport.height);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod svg;
pub use svg::{read_source, RenderDocument, ViewBox};

pub mod convert;
#[cfg(any(feature = "cdp", feature = "vector"))]
pub use convert::{convert, convert_file};
pub use convert::{convert_with, Conversion};

#[cfg(feature = "cdp")]
pub mod cdp;
#[cfg(feature = "cdp")]
pub use cdp::CdpRenderer;

// Browserless raster backend (no Chrome required)
#[cfg(feature = "vector")]
pub mod vector;
#[cfg(feature = "vector")]
pub use vector::VectorRenderer;

/// Configuration for a rendering backend
///
/// The defaults are conservative: a common desktop viewport (replaced by the
/// SVG's own dimensions during conversion), a 30 second load deadline, and a
/// short settle wait after navigation so subresources referenced by the SVG
/// finish loading before capture.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial viewport dimensions; conversion overrides this with the
    /// viewport derived from the SVG's viewBox
    pub viewport: Viewport,
    /// Deadline for a document load in milliseconds
    pub timeout_ms: u64,
    /// Post-load stabilization wait in milliseconds
    pub settle_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            timeout_ms: 30000,
            settle_ms: 500,
        }
    }
}

/// Viewport dimensions in pixels, at a fixed 1x device scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Core trait for rendering backends
///
/// A backend provides the capability set the converter needs from a browser:
/// configure a viewport, load a composed document and wait until it is ready,
/// and capture the result as PNG bytes. Backends release their resources when
/// dropped, so an error anywhere in the pipeline cannot leak a browser
/// process; `close` remains for explicit teardown on the success path.
pub trait Renderer {
    /// Create a new backend instance with the given configuration
    fn new(config: RenderConfig) -> Result<Self>
    where
        Self: Sized;

    /// Set the viewport for subsequent document loads
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Load a composed document and wait until it is ready for capture
    fn load_document(&mut self, document: &RenderDocument) -> Result<()>;

    /// Capture the loaded document as PNG bytes, background composited
    fn capture_png(&self) -> Result<Vec<u8>>;

    /// Release the backend and its resources
    fn close(self) -> Result<()>;
}

/// Create a renderer with the default backend
///
/// This prefers the CDP backend when the `cdp` feature is enabled (default):
/// the headless browser is the reference rendering path. With `cdp` disabled,
/// the browserless vector backend is used instead.
#[cfg(feature = "cdp")]
pub fn new_renderer(config: RenderConfig) -> Result<impl Renderer> {
    cdp::CdpRenderer::new(config)
}

#[cfg(all(not(feature = "cdp"), feature = "vector"))]
pub fn new_renderer(config: RenderConfig) -> Result<impl Renderer> {
    vector::VectorRenderer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.settle_ms, 500);
    }

    #[test]
    fn test_viewport() {
        let viewport = Viewport {
            width: 802,
            height: 601,
        };
        assert_eq!(viewport.width, 802);
        assert_eq!(viewport.height, 601);
    }
}
