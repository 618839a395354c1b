use chrono::{Duration, NaiveDate};

use crate::types::ganzhi::DayLabel;

/// Days searched on each side of the approximate date.
pub const SEARCH_RADIUS_DAYS: i64 = 30;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// A known correspondence between one solar date and one position of the
/// 60-day cycle. All conversions are relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochAnchor {
    pub date: NaiveDate,
    pub cycle_index: u8,
}

const JIAJING_START: NaiveDate = match NaiveDate::from_ymd_opt(1522, 2, 9) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// First day of the first month of Jiajing 1, taken as cycle position 38.
pub const JIAJING_EPOCH: EpochAnchor = EpochAnchor {
    date: JIAJING_START,
    cycle_index: 38,
};

impl EpochAnchor {
    /// Cycle position of an arbitrary date relative to this anchor.
    pub fn cycle_index_of(&self, date: NaiveDate) -> u8 {
        let days: i64 = (date - self.date).num_days();
        (self.cycle_index as i64 + days).rem_euclid(60) as u8
    }

    /// Coarse solar estimate for the start of an era month: fixed 365-day
    /// years and 30-day months counted from the anchor.
    pub fn approximate_date(&self, era_year: u32, era_month: u32) -> Option<NaiveDate> {
        let days: i64 =
            (era_year as i64 - 1) * DAYS_PER_YEAR + (era_month as i64 - 1) * DAYS_PER_MONTH;
        self.date.checked_add_signed(Duration::try_days(days)?)
    }

    /// Resolves `label` to the earliest date within ±30 days of the
    /// approximate date for (`era_year`, `era_month`) that carries the label.
    ///
    /// Returns `None` when the label has no cycle position, when `era_year` is
    /// zero or `era_month` is outside `1..=12`, or when no candidate matches.
    pub fn resolve(&self, label: DayLabel, era_year: u32, era_month: u32) -> Option<NaiveDate> {
        let target: u8 = label.cycle_index()?;
        if era_year == 0 || !(1..=12).contains(&era_month) {
            return None;
        }
        let approx: NaiveDate = self.approximate_date(era_year, era_month)?;

        // ascending scan: earliest candidate wins
        (-SEARCH_RADIUS_DAYS..=SEARCH_RADIUS_DAYS)
            .filter_map(|offset| approx.checked_add_signed(Duration::days(offset)))
            .find(|candidate| self.cycle_index_of(*candidate) == target)
    }
}

/// Resolves a day label against the Jiajing epoch.
pub fn resolve(label: DayLabel, era_year: u32, era_month: u32) -> Option<NaiveDate> {
    JIAJING_EPOCH.resolve(label, era_year, era_month)
}

/// String form of [`resolve`]: `day_label` must be exactly a stem glyph
/// followed by a branch glyph, anything else is unresolved.
pub fn convert(day_label: &str, era_year: u32, era_month: u32) -> Option<NaiveDate> {
    let label: DayLabel = day_label.parse().ok()?;
    resolve(label, era_year, era_month)
}
