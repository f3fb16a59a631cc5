//! # quadro-core
//!
//! Core data structures for the quadro table-inference engine.
//!
//! This crate provides the grid abstraction the engine operates on:
//! - [`CellValue`] - Represents cell values (text, numbers, calendar dates)
//! - [`Sheet`] - A sparse, coordinate-addressed cell store with declared bounds
//! - [`Book`] - A named, ordered collection of sheets
//! - [`GridRange`] and [`GridView`] - Rectangular bounds and a dense read view
//!
//! How the cells got here (file parsing, network fetch) is a collaborator's
//! job; this crate only models the populated grid.
//!
//! ## Example
//!
//! ```rust
//! use quadro_core::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::new("Treinamentos");
//! sheet.set_value(0, 0, "Nome Completo");
//! sheet.set_value(1, 0, "Maria Souza");
//! sheet.set_value(1, 1, 45306.0);
//!
//! let range = sheet.populated_range().unwrap();
//! assert_eq!(range.end_row, 1);
//! assert_eq!(range.end_col, 1);
//! ```

pub mod book;
pub mod cell;
pub mod error;
pub mod grid;
pub mod sheet;

// Re-exports for convenience
pub use book::Book;
pub use cell::CellValue;
pub use error::{Error, Result};
pub use grid::{GridRange, GridView};
pub use sheet::Sheet;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
