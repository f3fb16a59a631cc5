//! Date coercion
//!
//! Converts a cell value of unknown representation into a canonical calendar
//! date, or signals failure with `None`. Sources mix three encodings that
//! must be tried in a strict order: native date cells, spreadsheet day
//! serials hiding in numeric cells, and free text in a day-first locale.
//! Generic text parsing misorders day/month for day-first locales, so the
//! explicit `DD/MM/YYYY` pattern is matched after the unambiguous ISO forms.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use lazy_regex::regex;

use quadro_core::CellValue;

/// Default lower bound of the plausible day-serial window (~1954)
pub const DEFAULT_SERIAL_MIN: f64 = 20_000.0;

/// Default upper bound of the plausible day-serial window (~2146)
pub const DEFAULT_SERIAL_MAX: f64 = 90_000.0;

/// Serial of the fictitious 1900-02-29 in the 1900 date system
const LEAP_BUG_SERIAL: i64 = 60;

/// Tunable bounds for interpreting numbers as day-serial dates
///
/// A finite number inside the window is decoded as a day serial; outside it,
/// the number is taken to be a plain measurement and coercion fails. The
/// defaults are empirical carry-overs, kept configurable rather than
/// re-derived.
#[derive(Debug, Clone)]
pub struct CoercionRules {
    /// Smallest serial accepted as a date
    pub serial_min: f64,
    /// Largest serial accepted as a date
    pub serial_max: f64,
}

impl Default for CoercionRules {
    fn default() -> Self {
        Self {
            serial_min: DEFAULT_SERIAL_MIN,
            serial_max: DEFAULT_SERIAL_MAX,
        }
    }
}

/// Coerce an arbitrary cell value into a calendar date
///
/// Priority order:
/// 1. A native date passes through.
/// 2. A finite number within the plausibility window decodes as a
///    1900-system day serial; any time-of-day fraction is dropped.
/// 3. Text is trimmed, then tried as ISO-8601 (date or datetime), then as a
///    leading day-first `DD/MM/YYYY`.
///
/// Everything else yields `None`.
pub fn coerce_to_date(value: &CellValue, rules: &CoercionRules) -> Option<NaiveDate> {
    match value {
        CellValue::Date(d) => Some(*d),
        CellValue::Number(n) => {
            let n = *n;
            if !n.is_finite() || n < rules.serial_min || n > rules.serial_max {
                return None;
            }
            date_from_serial(n.trunc() as i64)
        }
        CellValue::Text(s) => date_from_text(s),
        CellValue::Empty => None,
    }
}

/// Decode a 1900-system spreadsheet day serial into a calendar date
///
/// Serial 1 is 1900-01-01. The 1900 system counts a fictitious 1900-02-29
/// at serial 60; that serial maps to no real calendar day, and serials
/// beyond it are shifted down by one before the Gregorian conversion.
pub fn date_from_serial(serial: i64) -> Option<NaiveDate> {
    if serial == LEAP_BUG_SERIAL {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let adjusted = if serial > LEAP_BUG_SERIAL {
        serial - 1
    } else {
        serial
    };
    base.checked_add_signed(Duration::days(adjusted))
}

fn date_from_text(s: &str) -> Option<NaiveDate> {
    let raw = s.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(d) = raw.parse::<NaiveDate>() {
        return Some(d);
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }

    // Day first, never month first: construct explicitly from the groups
    let caps = regex!(r"^(\d{2})/(\d{2})/(\d{4})").captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
