//! Validity status derivation
//!
//! A validity date is a deadline. Relative to "today" it is either already
//! past, inside the warning window, or comfortably ahead.

use chrono::{Local, NaiveDate};

use quadro_core::CellValue;
use quadro_engine::{coerce_to_date, ColumnMeta, CoercionRules};

/// Days ahead of a deadline that still count as "upcoming"
pub const EXPIRE_WARNING_DAYS: i64 = 30;

/// Three-state validity classification of a date relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidityStatus {
    /// More than the warning window away
    OnTime,
    /// Due within the warning window (today included)
    Upcoming,
    /// Deadline has passed
    Expired,
}

impl ValidityStatus {
    /// Classify a deadline relative to a fixed "today"
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        let diff_days = (date - today).num_days();
        if diff_days < 0 {
            ValidityStatus::Expired
        } else if diff_days <= EXPIRE_WARNING_DAYS {
            ValidityStatus::Upcoming
        } else {
            ValidityStatus::OnTime
        }
    }
}

/// The current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Tally of validity statuses across a row set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidityCounts {
    /// Deadlines more than the warning window away
    pub on_time: usize,
    /// Deadlines due within the warning window
    pub upcoming: usize,
    /// Deadlines already passed
    pub expired: usize,
}

impl ValidityCounts {
    /// Total number of classified dates
    pub fn total(&self) -> usize {
        self.on_time + self.upcoming + self.expired
    }

    /// Record one status
    pub fn record(&mut self, status: ValidityStatus) {
        match status {
            ValidityStatus::OnTime => self.on_time += 1,
            ValidityStatus::Upcoming => self.upcoming += 1,
            ValidityStatus::Expired => self.expired += 1,
        }
    }
}

/// Count validity statuses over every coercible date in the rows' validity
/// columns (or all date columns when none are tagged)
pub fn count_statuses<'a, I>(rows: I, meta: &ColumnMeta, today: NaiveDate) -> ValidityCounts
where
    I: IntoIterator<Item = &'a [CellValue]>,
{
    let rules = CoercionRules::default();
    let mut counts = ValidityCounts::default();
    let columns = meta.effective_validity_columns();

    for row in rows {
        for &col in columns {
            let Some(cell) = row.get(col as usize) else { continue };
            if let Some(date) = coerce_to_date(cell, &rules) {
                counts.record(ValidityStatus::for_date(date, today));
            }
        }
    }

    counts
}
