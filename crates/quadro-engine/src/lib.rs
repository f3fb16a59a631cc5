//! # quadro-engine
//!
//! The spreadsheet-to-table inference engine.
//!
//! Given a sparse [`Sheet`](quadro_core::Sheet) whose layout is not under the
//! consumer's control - noisy leading rows, one- or two-row headers,
//! mixed-type columns, dates encoded as day serials, native values, or
//! locale text - this crate derives a typed [`Table`]:
//!
//! 1. Locate the most header-like row among the leading rows ([`header`])
//! 2. Merge one or two physical header rows into stable column names
//! 3. Infer the anchor columns that mark real data rows ([`keys`])
//! 4. Extract the contiguous data region, tolerating blank gaps ([`extract`])
//! 5. Classify each column as date / validity-date / numeric ([`classify`]),
//!    coercing cells of unknown representation into calendar dates
//!    ([`coerce`])
//!
//! Heuristic vocabulary lives in a [`MarkerLexicon`]; per-sheet behavior is
//! selected through a [`ParseProfile`] rather than hidden sheet-name checks.
//!
//! ## Example
//!
//! ```rust
//! use quadro_core::Sheet;
//! use quadro_engine::{parse_sheet, ParseProfile};
//!
//! let mut sheet = Sheet::new("Treinamentos");
//! sheet.set_value(0, 0, "Relatório gerado em 2024");
//! sheet.set_value(2, 0, "Nome Completo");
//! sheet.set_value(2, 1, "Validade");
//! sheet.set_value(3, 0, "Maria Souza");
//! sheet.set_value(3, 1, "15/01/2024");
//!
//! let table = parse_sheet(&sheet, &ParseProfile::generic()).unwrap();
//! assert_eq!(table.columns[0].name, "Nome Completo");
//! assert_eq!(table.rows.len(), 1);
//! ```

pub mod classify;
pub mod coerce;
pub mod error;
pub mod extract;
pub mod header;
pub mod keys;
pub mod markers;
pub mod profile;
pub mod table;

// Re-exports for convenience
pub use classify::classify_columns;
pub use coerce::{coerce_to_date, CoercionRules};
pub use error::{ParseError, Result};
pub use extract::extract_rows;
pub use header::{build_column_names, detect_header_depth, detect_header_row};
pub use keys::infer_key_columns;
pub use markers::{normalize_for_match, normalize_header, Marker, MarkerLexicon};
pub use profile::ParseProfile;
pub use table::{parse_sheet, Column, ColumnMeta, Table};
