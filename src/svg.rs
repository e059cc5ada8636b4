//! SVG source handling: loading, viewBox extraction, and document composition.
//!
//! The viewBox is the single piece of the SVG this crate actually interprets:
//! its width and height decide the render viewport. Everything else in the
//! markup is passed through to the rendering backend untouched.

use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::{Error, Result, Viewport};

/// Read an SVG document from disk as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::FileAccessError(format!("{}: {}", path.display(), e)))
}

/// The parsed `viewBox` attribute of an SVG document.
///
/// The origin offsets are parsed along with the size but are not used when
/// deriving the viewport; the drawing's own coordinate transform handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Extract the first `viewBox="minX minY width height"` attribute from the
    /// document text.
    ///
    /// The attribute must hold exactly four numeric tokens, and width/height
    /// must be positive finite numbers. Anything else is a `FormatError`, so
    /// a malformed document is rejected before any backend is acquired.
    pub fn extract(svg: &str) -> Result<Self> {
        let re = Regex::new(r#"viewBox="([^"]+)""#).unwrap();
        let caps = re
            .captures(svg)
            .ok_or_else(|| Error::FormatError("could not find viewBox in SVG".into()))?;
        let raw = &caps[1];

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(Error::FormatError(format!(
                "viewBox has {} tokens, expected 4: \"{}\"",
                tokens.len(),
                raw
            )));
        }

        let mut values = [0.0f64; 4];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token.parse::<f64>().map_err(|_| {
                Error::FormatError(format!("non-numeric viewBox token \"{}\"", token))
            })?;
            if !slot.is_finite() {
                return Err(Error::FormatError(format!(
                    "non-finite viewBox token \"{}\"",
                    token
                )));
            }
        }

        let view_box = ViewBox {
            min_x: values[0],
            min_y: values[1],
            width: values[2],
            height: values[3],
        };

        if view_box.width <= 0.0 || view_box.height <= 0.0 {
            return Err(Error::FormatError(format!(
                "viewBox size must be positive, got {}x{}",
                view_box.width, view_box.height
            )));
        }

        debug!(
            "parsed viewBox: min=({}, {}) size={}x{}",
            view_box.min_x, view_box.min_y, view_box.width, view_box.height
        );
        Ok(view_box)
    }

    /// The pixel viewport for this viewBox: ceiling of width and height, so a
    /// fractional drawing never loses its last partial pixel row or column.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width.ceil() as u32,
            height: self.height.ceil() as u32,
        }
    }
}

/// A render-ready document: the raw SVG markup plus the HTML shell it is
/// served to browser backends in.
///
/// The shell zeroes the body margin and forces a white background, and makes
/// the `<svg>` element block-level, so the capture has no implicit margin and
/// no transparent-canvas artifacts.
#[derive(Debug, Clone)]
pub struct RenderDocument {
    svg: String,
    html: String,
}

impl RenderDocument {
    pub fn new(svg: &str) -> Self {
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ margin: 0; background: white; }}
    svg {{ display: block; }}
  </style>
</head>
<body>
{}
</body>
</html>"#,
            svg
        );

        Self {
            svg: svg.to_string(),
            html,
        }
    }

    /// The raw SVG markup, for backends that rasterize it directly.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// The composed HTML page, for browser backends.
    pub fn html(&self) -> &str {
        &self.html
    }
}
