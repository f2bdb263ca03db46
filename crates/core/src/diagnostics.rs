//! Diagnostic image sinks.
//!
//! The detector emits every intermediate mask and rectangle overlay to an
//! injected sink so the pipeline itself never touches the filesystem. Sinks
//! are purely observational; they never affect detection output.

use std::path::PathBuf;

use image::GrayImage;

use crate::error::{Result, TableError};

/// Receives named diagnostic images from the detection pipeline.
pub trait DiagnosticSink {
    /// Called once per pipeline stage with a stable stage name, e.g.
    /// `binary_inverted_threshold` or `box_004`.
    fn emit(&mut self, name: &str, image: &GrayImage) -> Result<()>;
}

/// Writes diagnostic images as `{prefix}_{name}.png` under a directory.
///
/// The directory is optional at construction time; a sink without one fails
/// with [`TableError::DiagnosticsDir`] at the first attempted write, not at
/// configuration time.
#[derive(Debug, Clone)]
pub struct PngDiagnosticSink {
    dir: Option<PathBuf>,
    prefix: String,
}

impl PngDiagnosticSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: Some(dir.into()),
            prefix: prefix.into(),
        }
    }

    /// A sink with no output directory; every write fails.
    pub fn unconfigured(prefix: impl Into<String>) -> Self {
        Self {
            dir: None,
            prefix: prefix.into(),
        }
    }
}

impl DiagnosticSink for PngDiagnosticSink {
    fn emit(&mut self, name: &str, image: &GrayImage) -> Result<()> {
        let dir = self.dir.as_ref().ok_or(TableError::DiagnosticsDir)?;
        let path = dir.join(format!("{}_{}.png", self.prefix, name));
        image.save(&path)?;
        Ok(())
    }
}
