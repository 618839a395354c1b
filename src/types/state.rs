use chrono::NaiveDate;

use crate::types::ganzhi::DayLabel;

/// Running temporal context of one parse run.
///
/// Each field is overwritten only when a value of its own kind is
/// recognized; recognizing a new month leaves the resolved date alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseState {
    pub era_year: Option<u32>,
    pub month: Option<u32>,
    pub day_label: Option<DayLabel>,
    pub resolved_date: Option<NaiveDate>,
}

impl ParseState {
    /// Era year and month, once both have been seen.
    pub fn locator(&self) -> Option<(u32, u32)> {
        Some((self.era_year?, self.month?))
    }
}
