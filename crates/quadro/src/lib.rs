//! # quadro
//!
//! A Rust library that turns loosely-structured spreadsheet data into
//! typed, filterable tables.
//!
//! Quadro ingests a grid-of-cells abstraction (variable header placement,
//! merged or two-row headers, mixed-type columns, heterogeneous date
//! encodings) and derives a stable table: named columns, dense rows, and
//! per-column type metadata, plus a three-state validity status for
//! deadline dates.
//!
//! ## Features
//!
//! - Header-row detection among noisy leading rows
//! - Two-row header merging with deduplicated column names
//! - Anchor-column inference and gap-tolerant row extraction
//! - Ratio-based column typing (date / validity-date / numeric)
//! - Day-serial, native, and day-first text date coercion
//! - Compound filtering (text, date range, month, year) and validity counts
//!
//! ## Example
//!
//! ```rust
//! use quadro::prelude::*;
//!
//! let mut book = Book::new();
//! let idx = book.add_sheet("Controle de Validade").unwrap();
//! let sheet = book.sheet_mut(idx).unwrap();
//! sheet.set_value(0, 0, "Nome Completo");
//! sheet.set_value(0, 1, "Validade NR-10");
//! sheet.set_value(1, 0, "Maria Souza");
//! sheet.set_value(1, 1, "15/01/2024");
//!
//! let sheet = quadro::preferred_sheet(&book).unwrap();
//! let profile = quadro::recommended_profile(sheet.name());
//! let table = parse_sheet(sheet, &profile).unwrap();
//!
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.meta.validity_date_columns, vec![1]);
//! ```

pub mod prelude;

// Re-export core types
pub use quadro_core::{Book, CellValue, Error, GridRange, GridView, Result, Sheet};

// Re-export engine types
pub use quadro_engine::{
    build_column_names,
    classify_columns,
    coerce_to_date,
    detect_header_depth,
    detect_header_row,
    extract_rows,
    infer_key_columns,
    normalize_for_match,
    normalize_header,
    parse_sheet,
    CoercionRules,
    Column,
    ColumnMeta,
    Marker,
    MarkerLexicon,
    ParseError,
    ParseProfile,
    Table,
};

// Re-export filter types
pub use quadro_filter::{
    count_statuses, distinct_years, today, RowFilter, ValidityCounts, ValidityStatus,
    EXPIRE_WARNING_DAYS,
};

/// Name of the authoritative validity-control sheet in the source workbooks
pub const VALIDITY_CONTROL_SHEET: &str = "Controle de Validade";

/// Pick the parse profile appropriate for a sheet name
///
/// The authoritative validity-control sheet gets the strict profile
/// (two-row headers, anchor columns, all dates as deadlines); every other
/// sheet parses leniently. This is the only place that knows the sheet
/// name; the engine itself is profile-driven.
pub fn recommended_profile(sheet_name: &str) -> ParseProfile {
    if sheet_name == VALIDITY_CONTROL_SHEET {
        ParseProfile::validity_control()
    } else {
        ParseProfile::generic()
    }
}

/// Pick the sheet a consumer should open first: the validity-control sheet
/// when the book has one, else the first sheet
pub fn preferred_sheet(book: &Book) -> Option<&Sheet> {
    book.sheet_by_name(VALIDITY_CONTROL_SHEET)
        .or_else(|| book.sheet(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_profile() {
        assert!(recommended_profile(VALIDITY_CONTROL_SHEET).two_row_headers);
        assert!(!recommended_profile("Resumo").two_row_headers);
    }

    #[test]
    fn test_preferred_sheet() {
        let mut book = Book::new();
        book.add_sheet("Resumo").unwrap();
        book.add_sheet(VALIDITY_CONTROL_SHEET).unwrap();

        assert_eq!(preferred_sheet(&book).unwrap().name(), VALIDITY_CONTROL_SHEET);

        let mut other = Book::new();
        other.add_sheet("Dados").unwrap();
        assert_eq!(preferred_sheet(&other).unwrap().name(), "Dados");

        assert!(preferred_sheet(&Book::new()).is_none());
    }
}
