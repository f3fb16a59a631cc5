//! Header detection and merging
//!
//! A header row is distinguished by having many text cells and by carrying
//! known domain column titles. Scoring rewards both; ties go to the earliest
//! row so a plausible header is never skipped in favor of data that happens
//! to be text-heavy.

use std::collections::{HashMap, HashSet};

use quadro_core::CellValue;

use crate::markers::{normalize_for_match, normalize_header, Marker, MarkerLexicon};

/// Score bonus for a company-name header cell
pub const BONUS_COMPANY: i32 = 60;

/// Score bonus for a full-name or name header cell
pub const BONUS_NAME: i32 = 60;

/// Score bonus for a tax-id header cell
pub const BONUS_TAX_ID: i32 = 20;

/// Score bonus for a role/function header cell
pub const BONUS_ROLE: i32 = 10;

/// Pick the most header-like row in the scan window
///
/// Scores at most `score_rows` leading rows of `matrix`. Each row scores the
/// count of its non-blank text cells plus marker bonuses; the strictly
/// highest score wins, earliest row on ties.
pub fn detect_header_row(
    matrix: &[Vec<CellValue>],
    lexicon: &MarkerLexicon,
    score_rows: usize,
) -> usize {
    let limit = matrix.len().min(score_rows);
    let mut best_index = 0;
    let mut best_score = i32::MIN;

    for (index, row) in matrix.iter().take(limit).enumerate() {
        let folded: HashSet<String> = row
            .iter()
            .filter_map(|cell| cell.as_text())
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_for_match(s))
            .collect();

        let text_count = row
            .iter()
            .filter(|cell| matches!(cell, CellValue::Text(s) if !s.trim().is_empty()))
            .count() as i32;

        let mut bonus = 0;
        if lexicon.any_token_in(Marker::Company, &folded) {
            bonus += BONUS_COMPANY;
        }
        if lexicon.any_token_in(Marker::FullName, &folded)
            || lexicon.any_token_in(Marker::Name, &folded)
        {
            bonus += BONUS_NAME;
        }
        if lexicon.any_token_in(Marker::TaxId, &folded) {
            bonus += BONUS_TAX_ID;
        }
        if lexicon.any_token_in(Marker::Role, &folded) {
            bonus += BONUS_ROLE;
        }

        let score = text_count + bonus;
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    best_index
}

/// Decide whether the detected header spans one or two physical rows
///
/// The row immediately below a two-row header is a run of date-ish
/// sub-labels ("Data", "Validade", "Realização", ...). If at least
/// `token_threshold` of its non-blank text cells carry a date/validity/
/// performed token, the header is two rows deep.
pub fn detect_header_depth(
    matrix: &[Vec<CellValue>],
    header_row: usize,
    lexicon: &MarkerLexicon,
    token_threshold: usize,
) -> usize {
    let Some(next) = matrix.get(header_row + 1) else {
        return 1;
    };

    let date_tokens = next
        .iter()
        .filter_map(|cell| cell.as_text())
        .filter(|s| !s.trim().is_empty())
        .map(normalize_for_match)
        .filter(|folded| lexicon.text_contains(Marker::DateToken, folded))
        .count();

    if date_tokens >= token_threshold {
        2
    } else {
        1
    }
}

/// Merge one or two header rows into deduplicated column names
///
/// Per column: distinct non-empty texts from both rows join as
/// `"top - bottom"`; otherwise whichever is non-empty wins; a fully blank
/// position falls back to `"Coluna <n>"` (1-based). Repeats get a
/// `" (k)"` suffix, left to right.
pub fn build_column_names(
    matrix: &[Vec<CellValue>],
    header_row: usize,
    depth: usize,
) -> Vec<String> {
    let empty: Vec<CellValue> = Vec::new();
    let top = matrix.get(header_row).unwrap_or(&empty);
    let bottom = if depth == 2 {
        matrix.get(header_row + 1).unwrap_or(&empty)
    } else {
        &empty
    };

    let width = top.len().max(bottom.len());
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(width);

    for col in 0..width {
        let h1 = header_text(top.get(col));
        let h2 = header_text(bottom.get(col));

        let mut name = if !h1.is_empty() && !h2.is_empty() && h1 != h2 {
            format!("{} - {}", h1, h2)
        } else if !h1.is_empty() {
            h1
        } else if !h2.is_empty() {
            h2
        } else {
            format!("Coluna {}", col + 1)
        };

        let count = seen.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            name = format!("{} ({})", name, count);
        }

        names.push(name);
    }

    names
}

/// Display text of a header cell: blank reads as empty, anything else is
/// rendered and whitespace-normalized
fn header_text(cell: Option<&CellValue>) -> String {
    match cell {
        Some(v) if !v.is_blank() => normalize_header(&v.to_string()),
        _ => String::new(),
    }
}
