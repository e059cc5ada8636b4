//! Error types for the converter

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting an SVG document to PNG
#[derive(Error, Debug)]
pub enum Error {
    /// The SVG source file could not be read
    #[error("Failed to read SVG source: {0}")]
    FileAccessError(String),

    /// The SVG document is missing a usable viewBox attribute
    #[error("Invalid SVG document: {0}")]
    FormatError(String),

    /// Failed to initialize a rendering backend
    #[error("Renderer initialization failed: {0}")]
    InitializationError(String),

    /// Failed to load the composed document into the backend
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Failed to render or capture the page
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to persist the output image
    #[error("Failed to write output: {0}")]
    IoError(String),

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// CDP-specific error
    #[cfg(feature = "cdp")]
    #[error("CDP error: {0}")]
    CdpError(String),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CdpError(err.to_string())
    }
}
