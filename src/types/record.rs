use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ganzhi::DayLabel;

/// One dated line of chronicle text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRecord {
    /// Resolved solar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Era year in force when the line was read (1 = 嘉靖元年).
    #[serde(rename = "year")]
    pub era_year: u32,

    /// Era month in force when the line was read.
    pub month: u32,

    /// Day label in force when the line was read.
    #[serde(rename = "ganzhi")]
    pub day_label: DayLabel,

    /// Line text with this line's day-label token removed, trimmed.
    pub text: String,

    /// Character offset of the trimmed line in the input.
    pub char_start: usize,
    /// Character offset one past the end of the trimmed line.
    pub char_end: usize,

    /// 0-based line index in the input.
    pub line_num: usize,

    /// Character offset in the input of the removed day-label token.
    /// `None` when the line had no label of its own and inherited the date.
    #[serde(default)]
    pub label_offset: Option<usize>,
}

impl TimelineRecord {
    /// Puts the removed day-label token back into the line.
    ///
    /// For a record produced from `input`, the result equals the trimmed
    /// source line (`input` chars `char_start..char_end`) up to whitespace
    /// adjacent to the token.
    pub fn restore_line(&self) -> String {
        let Some(offset) = self.label_offset else {
            return self.text.clone();
        };
        let rel: usize = offset.saturating_sub(self.char_start);
        let label: String = self.day_label.to_string();

        // trimming after removal only drops whitespace next to the token
        let mut out = String::with_capacity(self.text.len() + label.len());
        let chars: Vec<char> = self.text.chars().collect();
        let at: usize = rel.min(chars.len());
        out.extend(chars[..at].iter());
        out.push_str(&label);
        out.extend(chars[at..].iter());
        out
    }
}
