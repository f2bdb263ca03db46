//! Shared fixtures: synthetic grid images and fake collaborators.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{GrayImage, Luma};
use trellis_core::{DocRect, PageRenderer, RegionTextExtractor, Result, TableError};

/// Draws a `rows` x `cols` table of bordered cells onto a white canvas.
/// Ruling lines are 3 pixels thick and fully connected.
pub fn draw_grid(width: u32, height: u32, rows: u32, cols: u32) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
    let left = 10u32;
    let top = 10u32;
    let right = width - 10;
    let bottom = height - 10;
    let cell_w = (right - left) / cols;
    let cell_h = (bottom - top) / rows;

    for i in 0..=cols {
        let x0 = if i == cols { right - 3 } else { left + i * cell_w };
        for x in x0..x0 + 3 {
            for y in top..bottom {
                img.put_pixel(x, y, Luma([0]));
            }
        }
    }
    for j in 0..=rows {
        let y0 = if j == rows { bottom - 3 } else { top + j * cell_h };
        for y in y0..y0 + 3 {
            for x in left..right {
                img.put_pixel(x, y, Luma([0]));
            }
        }
    }
    img
}

/// An all-white page with no table.
pub fn blank_page(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([255u8]))
}

/// In-memory renderer over pre-built page images (1-based pages).
pub struct FakeRenderer {
    pages: Vec<GrayImage>,
    in_flight: Arc<AtomicUsize>,
    pub render_calls: Arc<AtomicUsize>,
}

impl FakeRenderer {
    pub fn new(pages: Vec<GrayImage>) -> Self {
        Self {
            pages,
            in_flight: Arc::new(AtomicUsize::new(0)),
            render_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl PageRenderer for FakeRenderer {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&mut self, page_number: usize, _dpi: u32) -> Result<GrayImage> {
        // Renders against one document handle must never overlap.
        let previous = self.in_flight.fetch_add(1, Ordering::SeqCst);
        assert_eq!(previous, 0, "concurrent render call detected");
        std::thread::sleep(std::time::Duration::from_millis(2));

        let result = self
            .pages
            .get(page_number.wrapping_sub(1))
            .cloned()
            .ok_or(TableError::PageOutOfRange(page_number));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

/// Records registered regions and answers `"p{page}:{id}"` per region after
/// the single bulk extraction. Enforces the register-then-extract contract.
pub struct FakeExtractor {
    regions: Vec<(String, DocRect)>,
    texts: HashMap<String, String>,
    extracted: bool,
    pub extract_calls: Arc<AtomicUsize>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            texts: HashMap::new(),
            extracted: false,
            extract_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_counter(counter: Arc<AtomicUsize>) -> Self {
        Self {
            extract_calls: counter,
            ..Self::new()
        }
    }

    pub fn regions(&self) -> &[(String, DocRect)] {
        &self.regions
    }
}

impl Default for FakeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionTextExtractor for FakeExtractor {
    fn add_region(&mut self, id: &str, rect: DocRect) -> Result<()> {
        if self.extracted {
            return Err(TableError::Extraction(
                "region registered after extraction".into(),
            ));
        }
        self.regions.push((id.to_string(), rect));
        Ok(())
    }

    fn extract_regions(&mut self, page_number: usize) -> Result<()> {
        if self.extracted {
            return Err(TableError::Extraction("duplicate bulk extraction".into()));
        }
        self.extracted = true;
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        for (id, _) in &self.regions {
            self.texts.insert(id.clone(), format!("p{page_number}:{id}"));
        }
        Ok(())
    }

    fn text_for_region(&self, id: &str) -> Result<String> {
        if !self.extracted {
            return Err(TableError::Extraction(
                "text requested before extraction".into(),
            ));
        }
        self.texts
            .get(id)
            .cloned()
            .ok_or_else(|| TableError::RegionNotFound(id.to_string()))
    }
}
