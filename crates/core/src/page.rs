//! Parsed page models.

use serde::Serialize;

/// One row of extracted cell text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedTableRow {
    cells: Vec<String>,
}

impl ParsedTableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// The extracted table of one page: ordered rows of cell strings plus the
/// 1-based page number. Immutable once assembled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedTablePage {
    page_number: usize,
    rows: Vec<ParsedTableRow>,
}

impl ParsedTablePage {
    pub fn new(page_number: usize, rows: Vec<ParsedTableRow>) -> Self {
        Self { page_number, rows }
    }

    /// 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn rows(&self) -> &[ParsedTableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ParsedTableRow> {
        self.rows.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sorts pages ascending by page number, independent of completion order.
pub fn sort_pages(pages: &mut [ParsedTablePage]) {
    pages.sort_by_key(ParsedTablePage::page_number);
}
