//! Public API: collaborator traits, high-level parsing and the builder.

pub mod builder;
pub mod high_level;

pub use builder::TableReaderBuilder;
pub use high_level::{
    PageRenderer, ParseOptions, RegionTextExtractor, parse_page, parse_page_with_rects,
    parse_pages, save_debug_images, save_page_images,
};
