//! Browserless rasterization backend (uses the `resvg` family of crates)
//!
//! This backend skips the HTML shell entirely and rasterizes the SVG markup
//! with `usvg`/`resvg` into a white-filled pixmap of exactly the viewport
//! size. It exists so the conversion pipeline can run, and be tested,
//! deterministically on machines without a browser.

use crate::{Error, RenderConfig, RenderDocument, Renderer, Result, Viewport};
use log::debug;

pub struct VectorRenderer {
    viewport: Viewport,
    tree: Option<usvg::Tree>,
}

impl Renderer for VectorRenderer {
    fn new(config: RenderConfig) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self {
            viewport: config.viewport,
            tree: None,
        })
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(Error::RenderError(format!(
                "viewport must be non-empty, got {}x{}",
                viewport.width, viewport.height
            )));
        }
        self.viewport = viewport;
        Ok(())
    }

    fn load_document(&mut self, document: &RenderDocument) -> Result<()> {
        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(document.svg(), &opt)
            .map_err(|e| Error::LoadError(format!("Failed to parse SVG: {}", e)))?;

        debug!(
            "parsed SVG tree with intrinsic size {}x{}",
            tree.size().width(),
            tree.size().height()
        );
        self.tree = Some(tree);
        Ok(())
    }

    fn capture_png(&self) -> Result<Vec<u8>> {
        let tree = self
            .tree
            .as_ref()
            .ok_or_else(|| Error::RenderError("No document loaded".into()))?;

        let mut pixmap = tiny_skia::Pixmap::new(self.viewport.width, self.viewport.height)
            .ok_or_else(|| Error::RenderError("Failed to allocate pixmap".into()))?;

        // Opaque white canvas, matching the HTML shell's background
        pixmap.fill(tiny_skia::Color::from_rgba8(255, 255, 255, 255));

        // Map the tree's intrinsic size onto the integral viewport. For a
        // fractional viewBox the viewport is the ceiling of the intrinsic
        // size, so the scale stays within one pixel of identity.
        let size = tree.size();
        let sx = if size.width() > 0.0 {
            self.viewport.width as f32 / size.width()
        } else {
            1.0
        };
        let sy = if size.height() > 0.0 {
            self.viewport.height as f32 / size.height()
        } else {
            1.0
        };

        resvg::render(
            tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| Error::RenderError(format!("Failed to encode PNG: {}", e)))
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
