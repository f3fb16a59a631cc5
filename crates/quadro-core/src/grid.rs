//! Rectangular grid bounds and the dense read view
//!
//! The engine walks sheets through [`GridView`], a borrowed window that
//! materializes dense rows and blocks from the sparse store. Coordinates
//! outside the view's bounds read as empty.

use crate::cell::CellValue;
use crate::sheet::Sheet;

/// Inclusive, 0-indexed rectangular bounds within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRange {
    /// First populated row
    pub start_row: u32,
    /// Last populated row
    pub end_row: u32,
    /// First populated column
    pub start_col: u16,
    /// Last populated column
    pub end_col: u16,
}

impl GridRange {
    /// Create a new range from inclusive bounds
    pub fn new(start_row: u32, end_row: u32, start_col: u16, end_col: u16) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// Number of rows covered
    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row) + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> u16 {
        self.end_col.saturating_sub(self.start_col) + 1
    }

    /// Check whether a coordinate falls inside the range
    pub fn contains(&self, row: u32, col: u16) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }
}

/// A dense, read-only view over a rectangular window of a sheet
///
/// This is the reader the inference engine is built on: it never fails on
/// out-of-bounds coordinates, it just reads them as empty.
pub struct GridView<'a> {
    sheet: &'a Sheet,
    range: GridRange,
}

impl<'a> GridView<'a> {
    /// Create a new view over a sheet window
    pub fn new(sheet: &'a Sheet, range: GridRange) -> Self {
        Self { sheet, range }
    }

    /// Get the view's bounds
    pub fn range(&self) -> &GridRange {
        &self.range
    }

    /// Read a single cell by absolute sheet coordinates
    ///
    /// Coordinates outside the view's bounds read as [`CellValue::Empty`].
    pub fn value(&self, row: u32, col: u16) -> CellValue {
        if !self.range.contains(row, col) {
            return CellValue::Empty;
        }
        self.sheet.value_at(row, col)
    }

    /// Read one dense row, spanning the view's full column extent
    pub fn row(&self, row: u32) -> Vec<CellValue> {
        (self.range.start_col..=self.range.end_col)
            .map(|col| self.value(row, col))
            .collect()
    }

    /// Read a dense block of rows (inclusive), each spanning the full
    /// column extent
    pub fn block(&self, start_row: u32, end_row: u32) -> Vec<Vec<CellValue>> {
        (start_row..=end_row).map(|row| self.row(row)).collect()
    }
}
