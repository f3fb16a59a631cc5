//! Prelude module - common imports for quadro users
//!
//! ```rust
//! use quadro::prelude::*;
//! ```

pub use crate::{
    // Coercion
    coerce_to_date,
    count_statuses,
    distinct_years,
    // Pipeline entry point
    parse_sheet,
    // Main types
    Book,
    // Cell types
    CellValue,
    CoercionRules,
    Column,
    ColumnMeta,
    // Error types
    Error,
    GridRange,
    GridView,
    MarkerLexicon,
    ParseError,
    ParseProfile,
    Result,
    // Filtering
    RowFilter,
    Sheet,
    Table,
    ValidityCounts,
    ValidityStatus,
};
