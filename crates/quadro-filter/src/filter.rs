//! Compound row filtering
//!
//! A filter is a pure predicate over a table's rows: text search, date
//! range, month, and year compose by logical AND across categories, while a
//! row's multiple date values compose by OR - the row matches when ANY of
//! its dates satisfies ALL the active date constraints at once.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use log::debug;

use quadro_core::CellValue;
use quadro_engine::{coerce_to_date, normalize_for_match, CoercionRules, Table};

/// Filter parameters; unset fields do not constrain
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    /// Substring search, matched accent- and case-insensitively over the
    /// whole row
    pub search: String,
    /// Earliest accepted date (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest accepted date (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Calendar month (1-12)
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
}

impl RowFilter {
    /// Check whether no field constrains anything
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && !self.has_date_filter()
    }

    fn has_date_filter(&self) -> bool {
        self.start_date.is_some()
            || self.end_date.is_some()
            || self.month.is_some()
            || self.year.is_some()
    }

    /// Test a single row against the filter
    pub fn matches(&self, row: &[CellValue], table: &Table) -> bool {
        let needle = normalize_for_match(&self.search);
        self.matches_search(row, &needle) && self.matches_dates(row, table)
    }

    /// Apply the filter to every table row, borrowing the matches
    ///
    /// The table is never altered; re-running with the same filter yields
    /// the same rows.
    pub fn apply<'a>(&self, table: &'a Table) -> Vec<&'a [CellValue]> {
        let needle = normalize_for_match(&self.search);
        let matched: Vec<&[CellValue]> = table
            .rows
            .iter()
            .map(|row| row.as_slice())
            .filter(|row| self.matches_search(row, &needle) && self.matches_dates(row, table))
            .collect();

        debug!("filter matched {} of {} rows", matched.len(), table.row_count());
        matched
    }

    fn matches_search(&self, row: &[CellValue], needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let haystack = row
            .iter()
            .map(|cell| normalize_for_match(&cell.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        haystack.contains(needle)
    }

    fn matches_dates(&self, row: &[CellValue], table: &Table) -> bool {
        if !self.has_date_filter() {
            return true;
        }

        let rules = CoercionRules::default();
        let candidates: Vec<NaiveDate> = row_dates(row, table, &rules).collect();
        if candidates.is_empty() {
            // An active date filter can never match a row without dates
            return false;
        }

        candidates.into_iter().any(|date| {
            if self.start_date.is_some_and(|start| date < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| date > end) {
                return false;
            }
            if self.month.is_some_and(|month| date.month() != month) {
                return false;
            }
            if self.year.is_some_and(|year| date.year() != year) {
                return false;
            }
            true
        })
    }
}

/// Every coercible date in the row's validity columns (or all date columns
/// when none are tagged)
fn row_dates<'a>(
    row: &'a [CellValue],
    table: &'a Table,
    rules: &'a CoercionRules,
) -> impl Iterator<Item = NaiveDate> + 'a {
    table
        .meta
        .effective_validity_columns()
        .iter()
        .filter_map(move |&col| row.get(col as usize))
        .filter_map(move |cell| coerce_to_date(cell, rules))
}

/// Sorted distinct years across every coercible date in the table's
/// validity (or date) columns, for populating a year filter control
pub fn distinct_years(table: &Table) -> Vec<i32> {
    let rules = CoercionRules::default();
    let years: BTreeSet<i32> = table
        .rows
        .iter()
        .flat_map(|row| row_dates(row, table, &rules))
        .map(|date| date.year())
        .collect();
    years.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quadro_engine::{Column, ColumnMeta};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Table with a name column and two validity-date columns.
    fn sample_table() -> Table {
        let columns = vec![
            Column {
                index: 0,
                name: "Nome Completo".into(),
            },
            Column {
                index: 1,
                name: "Validade NR-10".into(),
            },
            Column {
                index: 2,
                name: "Validade ASO".into(),
            },
        ];
        let rows = vec![
            vec![
                CellValue::text("João Silva"),
                CellValue::Date(ymd(2024, 1, 1)),
                CellValue::Date(ymd(2025, 6, 1)),
            ],
            vec![
                CellValue::text("Maria Souza"),
                CellValue::Date(ymd(2024, 8, 10)),
                CellValue::Empty,
            ],
            vec![
                CellValue::text("Pedro Alves"),
                CellValue::text("pendente"),
                CellValue::Empty,
            ],
        ];
        let meta = ColumnMeta {
            date_columns: vec![1, 2],
            validity_date_columns: vec![1, 2],
            numeric_columns: vec![],
        };
        Table {
            columns,
            rows,
            meta,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let table = sample_table();
        let filter = RowFilter::default();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&table).len(), 3);
    }

    #[test]
    fn test_search_is_accent_insensitive() {
        let table = sample_table();
        let filter = RowFilter {
            search: "joao".into(),
            ..RowFilter::default()
        };

        let rows = filter.apply(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], CellValue::text("João Silva"));
    }

    #[test]
    fn test_search_miss() {
        let table = sample_table();
        let filter = RowFilter {
            search: "inexistente".into(),
            ..RowFilter::default()
        };
        assert!(filter.apply(&table).is_empty());
    }

    #[test]
    fn test_year_matches_any_date_in_row() {
        let table = sample_table();
        let filter = RowFilter {
            year: Some(2025),
            ..RowFilter::default()
        };

        // Row 0 matches through its second date; row 1 has no 2025 date;
        // row 2 has no coercible date at all
        let rows = filter.apply(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], CellValue::text("João Silva"));
    }

    #[test]
    fn test_constraints_combine_per_date() {
        let table = sample_table();
        let filter = RowFilter {
            year: Some(2025),
            month: Some(1),
            ..RowFilter::default()
        };

        // 2024-01-01 matches the month, 2025-06-01 matches the year, but no
        // single date satisfies both
        assert!(filter.apply(&table).is_empty());
    }

    #[test]
    fn test_date_range() {
        let table = sample_table();
        let filter = RowFilter {
            start_date: Some(ymd(2024, 6, 1)),
            end_date: Some(ymd(2024, 12, 31)),
            ..RowFilter::default()
        };

        let rows = filter.apply(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], CellValue::text("Maria Souza"));
    }

    #[test]
    fn test_dateless_row_fails_active_date_filter() {
        let table = sample_table();
        let filter = RowFilter {
            month: Some(1),
            ..RowFilter::default()
        };

        let rows = filter.apply(&table);
        for row in &rows {
            assert_ne!(row[0], CellValue::text("Pedro Alves"));
        }
    }

    #[test]
    fn test_search_and_date_filters_compose() {
        let table = sample_table();
        let filter = RowFilter {
            search: "silva".into(),
            year: Some(2024),
            ..RowFilter::default()
        };
        assert_eq!(filter.apply(&table).len(), 1);

        let filter = RowFilter {
            search: "souza".into(),
            year: Some(2025),
            ..RowFilter::default()
        };
        assert!(filter.apply(&table).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent_and_non_mutating() {
        let table = sample_table();
        let filter = RowFilter {
            year: Some(2024),
            ..RowFilter::default()
        };

        let first: Vec<Vec<CellValue>> = filter.apply(&table).iter().map(|r| r.to_vec()).collect();
        let second: Vec<Vec<CellValue>> = filter.apply(&table).iter().map(|r| r.to_vec()).collect();
        assert_eq!(first, second);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_distinct_years() {
        let table = sample_table();
        assert_eq!(distinct_years(&table), vec![2024, 2025]);
    }
}
