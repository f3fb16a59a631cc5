//! Table model and the parse pipeline
//!
//! A [`Table`] is produced once per (sheet, parse) and is immutable
//! afterwards; filtering and rendering happen downstream on borrowed rows.
//! Re-parsing a sheet replaces the table wholesale.

use log::debug;

use quadro_core::{CellValue, GridView, Sheet};

use crate::classify::classify_columns;
use crate::error::{ParseError, Result};
use crate::extract::extract_rows;
use crate::header::{build_column_names, detect_header_depth, detect_header_row};
use crate::keys::infer_key_columns;
use crate::profile::ParseProfile;

/// A named column at a fixed position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// 0-based position within the table
    pub index: u16,
    /// Unique, non-empty display name
    pub name: String,
}

/// Per-column type tags inferred by the classifier
///
/// A column belongs to at most one type family; validity dates are always a
/// subset of the date columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMeta {
    /// Columns whose dominant content coerces to calendar dates
    pub date_columns: Vec<u16>,
    /// Date columns interpreted as expiration/renewal deadlines
    pub validity_date_columns: Vec<u16>,
    /// Columns whose dominant content is plain numbers
    pub numeric_columns: Vec<u16>,
}

impl ColumnMeta {
    /// Check whether a column is date-typed
    pub fn is_date_column(&self, index: u16) -> bool {
        self.date_columns.contains(&index)
    }

    /// Check whether a column is numeric-typed
    pub fn is_numeric_column(&self, index: u16) -> bool {
        self.numeric_columns.contains(&index)
    }

    /// The columns validity logic should read: the tagged validity dates,
    /// or every date column when none were tagged
    pub fn effective_validity_columns(&self) -> &[u16] {
        if self.validity_date_columns.is_empty() {
            &self.date_columns
        } else {
            &self.validity_date_columns
        }
    }
}

/// A typed, immutable table derived from one sheet
///
/// Every row holds exactly `columns.len()` cells, in source order; absent
/// cells are represented explicitly, never omitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Ordered column descriptors
    pub columns: Vec<Column>,
    /// Dense data rows, top to bottom
    pub rows: Vec<Vec<CellValue>>,
    /// Inferred per-column type tags
    pub meta: ColumnMeta,
}

impl Table {
    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Derive a typed table from a sheet
///
/// Runs the full inference pipeline: header detection, header merging,
/// key-column inference, row extraction, and column classification, all
/// driven by `profile`. The single failure mode is a sheet with no
/// populated range; every other irregularity degrades to a best-effort
/// table.
pub fn parse_sheet(sheet: &Sheet, profile: &ParseProfile) -> Result<Table> {
    let range = sheet
        .populated_range()
        .ok_or_else(|| ParseError::NoTable(sheet.name().to_string()))?;
    let view = GridView::new(sheet, range);

    let scan_end = range
        .end_row
        .min(range.start_row.saturating_add(profile.header_read_rows));
    let matrix = view.block(range.start_row, scan_end);

    let header_row = detect_header_row(&matrix, &profile.lexicon, profile.header_score_rows);
    let depth = if profile.two_row_headers {
        detect_header_depth(
            &matrix,
            header_row,
            &profile.lexicon,
            profile.two_row_token_threshold,
        )
    } else {
        1
    };
    debug!(
        "sheet '{}': header at scan row {} ({} row(s) deep)",
        sheet.name(),
        header_row,
        depth
    );

    let columns: Vec<Column> = build_column_names(&matrix, header_row, depth)
        .into_iter()
        .enumerate()
        .map(|(index, name)| Column {
            index: index as u16,
            name,
        })
        .collect();

    let key_columns = if profile.infer_key_columns {
        infer_key_columns(&columns, &profile.lexicon)
    } else {
        Vec::new()
    };
    debug!("sheet '{}': key columns {:?}", sheet.name(), key_columns);

    let data_start_row = range.start_row + header_row as u32 + depth as u32;
    let rows = extract_rows(&view, data_start_row, &key_columns, profile);
    debug!("sheet '{}': extracted {} data row(s)", sheet.name(), rows.len());

    let meta = classify_columns(&columns, &rows, profile);

    Ok(Table {
        columns,
        rows,
        meta,
    })
}
