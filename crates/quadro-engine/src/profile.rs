//! Parse profiles
//!
//! A profile carries every behavioral switch and scan cap the pipeline
//! consults, so that sheet-specific behavior is a caller decision instead of
//! a sheet-name comparison buried in the engine. Two profiles exist in
//! practice: the strict one for an authoritative validity-control sheet and
//! a lenient one for everything else.

use crate::coerce::CoercionRules;
use crate::markers::MarkerLexicon;

/// Blank-streak limit for the strict profile
pub const STRICT_BLANK_STREAK_LIMIT: u32 = 80;

/// Blank-streak limit for the lenient profile
pub const LENIENT_BLANK_STREAK_LIMIT: u32 = 40;

/// Data-row scan cap for the strict profile
pub const STRICT_MAX_DATA_ROWS: u32 = 5_000;

/// Data-row scan cap for the lenient profile
pub const LENIENT_MAX_DATA_ROWS: u32 = 1_500;

/// Rows read into the header-scan window
pub const HEADER_READ_ROWS: u32 = 200;

/// Rows actually scored within the window
pub const HEADER_SCORE_ROWS: usize = 50;

/// Date-ish sub-label cells required to treat a header as two rows
pub const TWO_ROW_TOKEN_THRESHOLD: usize = 6;

/// Rows sampled per column during classification
pub const CLASSIFY_SAMPLE_ROWS: usize = 250;

/// Every knob the parse pipeline consults
#[derive(Debug, Clone)]
pub struct ParseProfile {
    /// Probe for a second physical header row below the detected one
    pub two_row_headers: bool,
    /// Infer anchor columns from column names (else extract on any content)
    pub infer_key_columns: bool,
    /// Tag every date column as a validity date unless its name says
    /// "performed"
    pub treat_all_dates_as_validity: bool,
    /// Consecutive non-candidate rows tolerated before extraction halts
    pub blank_streak_limit: u32,
    /// Upper bound on rows walked past the data start row
    pub max_data_rows: u32,
    /// Rows read when building the header-scan window
    pub header_read_rows: u32,
    /// Rows scored for header-likeness within that window
    pub header_score_rows: usize,
    /// Sub-label threshold for the two-row-header heuristic
    pub two_row_token_threshold: usize,
    /// Rows sampled per column by the classifier
    pub sample_rows: usize,
    /// Day-serial plausibility window
    pub coercion: CoercionRules,
    /// Vocabulary driving the marker heuristics
    pub lexicon: MarkerLexicon,
}

impl ParseProfile {
    /// Strict profile for the authoritative validity-control sheet
    ///
    /// Multi-row headers are probed, anchor columns gate row extraction,
    /// and every date column counts as a validity deadline unless its name
    /// marks it as an event date.
    pub fn validity_control() -> Self {
        Self {
            two_row_headers: true,
            infer_key_columns: true,
            treat_all_dates_as_validity: true,
            blank_streak_limit: STRICT_BLANK_STREAK_LIMIT,
            max_data_rows: STRICT_MAX_DATA_ROWS,
            ..Self::generic()
        }
    }

    /// Lenient profile for sheets of unknown layout
    pub fn generic() -> Self {
        Self {
            two_row_headers: false,
            infer_key_columns: false,
            treat_all_dates_as_validity: false,
            blank_streak_limit: LENIENT_BLANK_STREAK_LIMIT,
            max_data_rows: LENIENT_MAX_DATA_ROWS,
            header_read_rows: HEADER_READ_ROWS,
            header_score_rows: HEADER_SCORE_ROWS,
            two_row_token_threshold: TWO_ROW_TOKEN_THRESHOLD,
            sample_rows: CLASSIFY_SAMPLE_ROWS,
            coercion: CoercionRules::default(),
            lexicon: MarkerLexicon::default(),
        }
    }
}

impl Default for ParseProfile {
    fn default() -> Self {
        Self::generic()
    }
}
