//! Error types for the trellis table extraction library.

use thiserror::Error;

/// Primary error type for table detection and extraction operations.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("page {0} out of range")]
    PageOutOfRange(usize),

    #[error("render failed: {0}")]
    Render(String),

    #[error("region extraction failed: {0}")]
    Extraction(String),

    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("diagnostics enabled without an output directory")]
    DiagnosticsDir,

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for TableError.
pub type Result<T> = std::result::Result<T, TableError>;
