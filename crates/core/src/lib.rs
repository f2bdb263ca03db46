//! trellis - table grid detection and cell text extraction for rasterized
//! document pages.
//!
//! The pipeline: a grayscale page raster goes through a two-pass
//! threshold/contour detection ([`detect`]) yielding pixel-space cell
//! rectangles, which are grouped into rows, rescaled to document space
//! ([`region`]) and handed to a text extraction collaborator; per-page
//! results are assembled into [`page::ParsedTablePage`] values.

pub mod api;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod page;
pub mod region;
pub mod settings;

pub use api::{
    PageRenderer, ParseOptions, RegionTextExtractor, TableReaderBuilder, parse_page,
    parse_page_with_rects, parse_pages, save_debug_images, save_page_images,
};
pub use detect::{CellRect, detect_cell_rects, group_rows, sort_reading_order};
pub use diagnostics::{DiagnosticSink, PngDiagnosticSink};
pub use error::{Result, TableError};
pub use page::{ParsedTablePage, ParsedTableRow, sort_pages};
pub use region::{DocRect, DocRegion, map_rect, map_rows, region_id};
pub use settings::{DetectionSettings, DetectionSettingsBuilder, NATIVE_DPI};
