//! High-level table parsing API.
//!
//! Provides the main public entry points:
//! - `parse_page()` - detect and extract one page
//! - `parse_pages()` - a 1-based inclusive page range, optionally in parallel
//! - `parse_page_with_rects()` - extraction for already-detected rectangles
//! - `save_page_images()` / `save_debug_images()` - batch raster dumps
//!
//! Rendering and text extraction are collaborator contracts; the library
//! never decodes documents itself.

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Mutex;

use image::GrayImage;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::detect::{CellRect, detect_cell_rects, group_rows};
use crate::diagnostics::PngDiagnosticSink;
use crate::error::{Result, TableError};
use crate::page::{ParsedTablePage, ParsedTableRow, sort_pages};
use crate::region::{DocRect, map_rows, region_id};
use crate::settings::DetectionSettings;

/// Renders document pages to grayscale raster images.
///
/// The renderer is bound to a single document handle. `parse_pages` guards
/// every call with one critical section per invocation; other callers must
/// not issue concurrent render calls against the same handle.
pub trait PageRenderer {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Renders 1-based page `page_number` at `dpi`.
    ///
    /// An out-of-range page number is reported by the renderer (typically as
    /// [`TableError::PageOutOfRange`]); the caller performs no bounds
    /// checking of its own.
    fn render_page(&mut self, page_number: usize, dpi: u32) -> Result<GrayImage>;
}

/// Extracts text for named rectangular regions of one document page.
///
/// The contract is register-then-extract: every region is added first, then
/// exactly one bulk [`extract_regions`](RegionTextExtractor::extract_regions)
/// call runs, then text is read back per region name. Registration and
/// extraction are never interleaved.
pub trait RegionTextExtractor {
    /// Registers a named document-space region.
    fn add_region(&mut self, id: &str, rect: DocRect) -> Result<()>;

    /// Performs the single bulk extraction for 1-based `page_number`.
    fn extract_regions(&mut self, page_number: usize) -> Result<()>;

    /// Text of a previously extracted region: the concatenation, in reading
    /// order, of all glyphs whose bounding boxes fall inside the region.
    fn text_for_region(&self, id: &str) -> Result<String>;
}

/// Options for multi-page parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Worker thread count for the per-page fan-out. None uses the global
    /// rayon pool.
    pub threads: Option<usize>,
}

/// Extracts cell text for already-detected rectangles and assembles the page.
///
/// Groups the rectangles into rows, maps them to document space, registers
/// every region, issues the single bulk extraction and joins text back by
/// `(row, col)` index.
pub fn parse_page_with_rects<E>(
    extractor: &mut E,
    page_number: usize,
    rects: &[CellRect],
    settings: &DetectionSettings,
) -> Result<ParsedTablePage>
where
    E: RegionTextExtractor + ?Sized,
{
    let rows = group_rows(rects);
    let regions = map_rows(&rows, settings.dpi_ratio());

    for region in &regions {
        extractor.add_region(&region.id(), region.rect)?;
    }
    extractor.extract_regions(page_number)?;

    let mut parsed_rows = Vec::with_capacity(rows.len());
    for (row, cols) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(cols.len());
        for col in 0..cols.len() {
            cells.push(extractor.text_for_region(&region_id(row, col))?);
        }
        parsed_rows.push(ParsedTableRow::new(cells));
    }

    debug!(
        page = page_number,
        rows = parsed_rows.len(),
        cells = rects.len(),
        "page assembled"
    );
    Ok(ParsedTablePage::new(page_number, parsed_rows))
}

/// Detects the table grid of one page and extracts its cell text.
///
/// A page without a detectable table yields an empty [`ParsedTablePage`],
/// not an error.
pub fn parse_page<R, E>(
    renderer: &mut R,
    extractor: &mut E,
    page_number: usize,
    settings: &DetectionSettings,
) -> Result<ParsedTablePage>
where
    R: PageRenderer + ?Sized,
    E: RegionTextExtractor + ?Sized,
{
    let image = renderer.render_page(page_number, settings.rendering_dpi)?;
    let rects = detect_cell_rects(&image, settings, None)?;
    parse_page_with_rects(extractor, page_number, &rects, settings)
}

/// Parses a 1-based inclusive page range into per-page tables.
///
/// Render calls are serialized through a single critical section; detection,
/// grouping and extraction fan out across worker threads. `extractor_factory`
/// is invoked once per page from the worker processing it. Results are sorted
/// ascending by page number regardless of completion order.
pub fn parse_pages<R, E, F>(
    renderer: &mut R,
    extractor_factory: F,
    pages: RangeInclusive<usize>,
    settings: &DetectionSettings,
    options: &ParseOptions,
) -> Result<Vec<ParsedTablePage>>
where
    R: PageRenderer + Send,
    E: RegionTextExtractor,
    F: Fn(usize) -> Result<E> + Sync,
{
    let page_numbers: Vec<usize> = pages.collect();
    let render_lock = Mutex::new(renderer);

    let run = || -> Result<Vec<ParsedTablePage>> {
        let mut parsed: Vec<ParsedTablePage> = page_numbers
            .par_iter()
            .map(|&page_number| {
                let image = {
                    let mut guard = render_lock
                        .lock()
                        .map_err(|_| TableError::Render("render mutex poisoned".into()))?;
                    guard.render_page(page_number, settings.rendering_dpi)?
                };
                let rects = detect_cell_rects(&image, settings, None)?;
                let mut extractor = extractor_factory(page_number)?;
                parse_page_with_rects(&mut extractor, page_number, &rects, settings)
            })
            .collect::<Result<_>>()?;
        sort_pages(&mut parsed);
        Ok(parsed)
    };

    match options.threads {
        Some(threads) => ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| TableError::ThreadPool(e.to_string()))?
            .install(run),
        None => run(),
    }
}

/// Renders each page of the range and writes it as `page_{n}.png` under
/// `output_dir`.
pub fn save_page_images<R>(
    renderer: &mut R,
    pages: RangeInclusive<usize>,
    settings: &DetectionSettings,
    output_dir: &Path,
) -> Result<()>
where
    R: PageRenderer + ?Sized,
{
    for page_number in pages {
        let image = renderer.render_page(page_number, settings.rendering_dpi)?;
        image.save(output_dir.join(format!("page_{page_number}.png")))?;
    }
    Ok(())
}

/// Runs detection on each page of the range with a PNG diagnostic sink,
/// dumping every intermediate stage as `page_{n}_{stage}.png` under
/// `output_dir`.
pub fn save_debug_images<R>(
    renderer: &mut R,
    pages: RangeInclusive<usize>,
    settings: &DetectionSettings,
    output_dir: &Path,
) -> Result<()>
where
    R: PageRenderer + ?Sized,
{
    for page_number in pages {
        let image = renderer.render_page(page_number, settings.rendering_dpi)?;
        let mut sink = PngDiagnosticSink::new(output_dir, format!("page_{page_number}"));
        detect_cell_rects(&image, settings, Some(&mut sink))?;
    }
    Ok(())
}
