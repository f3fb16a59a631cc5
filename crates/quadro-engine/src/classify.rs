//! Column classification
//!
//! Samples extracted rows to assign each column a type tag. Real columns
//! carry occasional stray text or blanks, so classification is ratio-based:
//! a column is typed by its dominant content, not by unanimity.

use log::debug;

use quadro_core::CellValue;

use crate::coerce::coerce_to_date;
use crate::markers::{normalize_for_match, Marker};
use crate::profile::ParseProfile;
use crate::table::{Column, ColumnMeta};

/// Date-hit ratio that types a column as date-like on its own
pub const DATE_RATIO_STRONG: f64 = 0.65;

/// Minimum date hits for the sparse-column allowance
pub const DATE_SPARSE_MIN_HITS: usize = 2;

/// Date-hit ratio accepted together with the sparse-column allowance
pub const DATE_RATIO_SPARSE: f64 = 0.4;

/// Numeric-hit ratio that types a column as numeric
pub const NUMERIC_RATIO: f64 = 0.85;

/// Classify each column by sampling up to `profile.sample_rows` rows
///
/// Per column: count non-blank cells, date-coercible cells, and finite
/// numbers. Columns with no non-blank sample stay untyped, and a column
/// joins at most one type family (date wins over numeric, since day-serial
/// date columns are all numbers). Date-like columns additionally become
/// validity dates when their name carries a validity marker, or - under a
/// profile that treats all dates as validity deadlines - whenever the name
/// lacks a "performed" marker. Tax-id columns look numeric but never type
/// as numeric.
pub fn classify_columns(
    columns: &[Column],
    rows: &[Vec<CellValue>],
    profile: &ParseProfile,
) -> ColumnMeta {
    let mut meta = ColumnMeta::default();
    let sample = rows.len().min(profile.sample_rows);

    for column in columns {
        let col = column.index as usize;
        let mut non_blank = 0usize;
        let mut date_hits = 0usize;
        let mut numeric_hits = 0usize;

        for row in rows.iter().take(sample) {
            let Some(cell) = row.get(col) else { continue };
            if cell.is_blank() {
                continue;
            }
            non_blank += 1;
            if cell.as_number().is_some() {
                numeric_hits += 1;
            }
            if coerce_to_date(cell, &profile.coercion).is_some() {
                date_hits += 1;
            }
        }

        if non_blank == 0 {
            continue;
        }

        let date_ratio = date_hits as f64 / non_blank as f64;
        let numeric_ratio = numeric_hits as f64 / non_blank as f64;
        let folded = normalize_for_match(&column.name);

        let date_like = date_ratio >= DATE_RATIO_STRONG
            || (date_hits >= DATE_SPARSE_MIN_HITS && date_ratio >= DATE_RATIO_SPARSE);
        let numeric_like = numeric_ratio >= NUMERIC_RATIO
            && !profile.lexicon.text_contains(Marker::TaxId, &folded);

        // One type family per column: a serial-date column is all numbers,
        // but it is a date column, not a numeric one
        if !date_like {
            if numeric_like {
                meta.numeric_columns.push(column.index);
            }
            continue;
        }

        meta.date_columns.push(column.index);

        let names_performed = profile.lexicon.text_contains(Marker::Performed, &folded);
        let names_validity = profile.lexicon.text_contains(Marker::Validity, &folded);
        if names_validity || (profile.treat_all_dates_as_validity && !names_performed) {
            meta.validity_date_columns.push(column.index);
        }
    }

    debug!(
        "classified {} date, {} validity, {} numeric columns from {} sampled rows",
        meta.date_columns.len(),
        meta.validity_date_columns.len(),
        meta.numeric_columns.len(),
        sample
    );

    meta
}
