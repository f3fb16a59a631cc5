//! Row extraction
//!
//! Walks the grid forward from the data start row and decides where the
//! data region ends. Real sheets pad their data with decorative blank rows;
//! a consecutive-blank streak limit tolerates sparse gaps without scanning
//! the whole sheet unboundedly.

use log::{debug, trace};

use quadro_core::{CellValue, GridView};

use crate::profile::ParseProfile;

/// Extract the contiguous data region as dense rows
///
/// A row is a candidate when one of its key columns is non-blank, or - with
/// no key columns inferred - when any cell at all is non-blank. Candidates
/// are appended verbatim (blank cells included) and reset the streak
/// counter; each non-candidate row increments it, and extraction halts once
/// the streak reaches the profile's limit or the scan cap is exhausted.
///
/// `key_columns` index into the view's column extent (0-based positions,
/// matching the produced rows).
pub fn extract_rows(
    view: &GridView<'_>,
    data_start_row: u32,
    key_columns: &[u16],
    profile: &ParseProfile,
) -> Vec<Vec<CellValue>> {
    let range = view.range();
    let mut rows = Vec::new();

    if data_start_row > range.end_row {
        return rows;
    }

    let scan_end = range
        .end_row
        .min(data_start_row.saturating_add(profile.max_data_rows));
    let mut blank_streak = 0u32;

    for row_index in data_start_row..=scan_end {
        let row = view.row(row_index);

        let is_candidate = if key_columns.is_empty() {
            row.iter().any(|cell| !cell.is_blank())
        } else {
            key_columns
                .iter()
                .any(|&key| row.get(key as usize).is_some_and(|cell| !cell.is_blank()))
        };

        if !is_candidate {
            blank_streak += 1;
            trace!("row {} is not a candidate (streak {})", row_index, blank_streak);
            if blank_streak >= profile.blank_streak_limit {
                debug!(
                    "extraction halted at row {} after {} consecutive blank rows",
                    row_index, blank_streak
                );
                break;
            }
            continue;
        }

        blank_streak = 0;
        rows.push(row);
    }

    rows
}
