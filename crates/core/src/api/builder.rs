//! Builder pattern for table parsing.
//!
//! Provides a fluent API over [`DetectionSettings`] and [`ParseOptions`].
//!
//! # Example
//! ```ignore
//! use trellis_core::api::TableReaderBuilder;
//!
//! let pages = TableReaderBuilder::new()
//!     .rendering_dpi(150)
//!     .bit_threshold(120)
//!     .threads(4)
//!     .parse_pages(&mut renderer, |_| Ok(extractor()), 1..=5)?;
//! ```

use std::ops::RangeInclusive;

use crate::detect::CellRect;
use crate::error::Result;
use crate::page::ParsedTablePage;
use crate::settings::DetectionSettings;

use super::high_level::{
    PageRenderer, ParseOptions, RegionTextExtractor, parse_page, parse_pages,
};

/// A builder for configuring table detection and extraction.
#[derive(Debug, Clone, Default)]
pub struct TableReaderBuilder {
    settings: DetectionSettings,
    options: ParseOptions,
}

impl TableReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full settings value.
    pub fn settings(mut self, settings: DetectionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the page rendering resolution in dots per inch.
    pub fn rendering_dpi(mut self, dpi: u32) -> Self {
        self.settings.rendering_dpi = dpi;
        self
    }

    /// Sets the binary-inverted threshold cutoff.
    pub fn bit_threshold(mut self, threshold: u8) -> Self {
        self.settings.bit_threshold = threshold;
        self
    }

    /// Enables Canny edge filtering before contour tracing.
    pub fn canny_enabled(mut self, enabled: bool) -> Self {
        self.settings.canny_enabled = enabled;
        self
    }

    /// Sets the polygon approximation epsilon scale factor.
    pub fn approx_epsilon_scale(mut self, scale: f64) -> Self {
        self.settings.approx_epsilon_scale = scale;
        self
    }

    /// Sets the worker thread count for multi-page parsing.
    pub fn threads(mut self, threads: usize) -> Self {
        self.options.threads = Some(threads);
        self
    }

    /// Returns the configured settings.
    pub fn build_settings(&self) -> DetectionSettings {
        self.settings.clone()
    }

    /// Detects and extracts one page.
    pub fn parse_page<R, E>(
        &self,
        renderer: &mut R,
        extractor: &mut E,
        page_number: usize,
    ) -> Result<ParsedTablePage>
    where
        R: PageRenderer + ?Sized,
        E: RegionTextExtractor + ?Sized,
    {
        parse_page(renderer, extractor, page_number, &self.settings)
    }

    /// Parses a 1-based inclusive page range, sorted by page number.
    pub fn parse_pages<R, E, F>(
        &self,
        renderer: &mut R,
        extractor_factory: F,
        pages: RangeInclusive<usize>,
    ) -> Result<Vec<ParsedTablePage>>
    where
        R: PageRenderer + Send,
        E: RegionTextExtractor,
        F: Fn(usize) -> Result<E> + Sync,
    {
        parse_pages(
            renderer,
            extractor_factory,
            pages,
            &self.settings,
            &self.options,
        )
    }

    /// Runs grid detection on an already-rendered raster image.
    pub fn detect(&self, image: &image::GrayImage) -> Result<Vec<CellRect>> {
        crate::detect::detect_cell_rects(image, &self.settings, None)
    }
}
