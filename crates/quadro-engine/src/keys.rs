//! Key-column inference
//!
//! Anchor columns decide whether a grid row is real data or decoration. The
//! most reliable identity signal in this domain is a person's name, tax id,
//! or employer; when none of those is recognizable, the leading columns are
//! the least-bad fallback.

use crate::markers::{normalize_for_match, Marker, MarkerLexicon};
use crate::table::Column;

/// Positional columns used when no anchor marker matches
pub const FALLBACK_KEY_COLUMN_COUNT: usize = 3;

/// Choose the anchor columns for row extraction
///
/// Searches folded column names for a full-name column, then a tax-id
/// column, then a company column, appending each first match in that order
/// (deduplicated). With no match at all, the first
/// [`FALLBACK_KEY_COLUMN_COUNT`] column indices are used, bounded by the
/// actual column count.
pub fn infer_key_columns(columns: &[Column], lexicon: &MarkerLexicon) -> Vec<u16> {
    let folded: Vec<String> = columns
        .iter()
        .map(|c| normalize_for_match(&c.name))
        .collect();

    let mut keys: Vec<u16> = Vec::new();
    for marker in [Marker::FullName, Marker::TaxId, Marker::Company] {
        let found = folded
            .iter()
            .position(|name| lexicon.text_contains(marker, name));
        if let Some(index) = found {
            let index = columns[index].index;
            if !keys.contains(&index) {
                keys.push(index);
            }
        }
    }

    if keys.is_empty() {
        keys = columns
            .iter()
            .take(FALLBACK_KEY_COLUMN_COUNT)
            .map(|c| c.index)
            .collect();
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns(names: &[&str]) -> Vec<Column> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Column {
                index: i as u16,
                name: (*name).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_markers_found_in_order() {
        let cols = columns(&["Empresa", "Função", "Nome Completo", "CPF"]);
        let keys = infer_key_columns(&cols, &MarkerLexicon::default());
        // Full name first, then tax id, then company
        assert_eq!(keys, vec![2, 3, 0]);
    }

    #[test]
    fn test_partial_match_set() {
        let cols = columns(&["Matrícula", "Nome Completo", "Setor"]);
        let keys = infer_key_columns(&cols, &MarkerLexicon::default());
        assert_eq!(keys, vec![1]);
    }

    #[test]
    fn test_substring_matches_count() {
        let cols = columns(&["Nome Completo do Empregado", "Nº CPF"]);
        let keys = infer_key_columns(&cols, &MarkerLexicon::default());
        assert_eq!(keys, vec![0, 1]);
    }

    #[test]
    fn test_positional_fallback() {
        let cols = columns(&["A", "B", "C", "D"]);
        let keys = infer_key_columns(&cols, &MarkerLexicon::default());
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn test_fallback_bounded_by_column_count() {
        let cols = columns(&["A", "B"]);
        let keys = infer_key_columns(&cols, &MarkerLexicon::default());
        assert_eq!(keys, vec![0, 1]);
    }
}
