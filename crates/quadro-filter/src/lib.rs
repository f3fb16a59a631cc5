//! # quadro-filter
//!
//! Downstream engine over a parsed [`Table`](quadro_engine::Table):
//! derives a three-state validity status per date value and applies
//! compound filters (text, date range, month, year) without ever mutating
//! the base table.
//!
//! Status is a pure function of a date and "today" - it is recomputed on
//! demand, never stored. Filtering is a cheap linear scan, re-run in full on
//! every filter change; applying the same filter twice yields the same rows.

pub mod filter;
pub mod validity;

// Re-exports for convenience
pub use filter::{distinct_years, RowFilter};
pub use validity::{count_statuses, today, ValidityCounts, ValidityStatus, EXPIRE_WARNING_DAYS};
