//! Grouping of timeline records by era month.

use std::collections::BTreeMap;

use crate::types::keys::RecordKey;
use crate::types::timeline::Timeline;

/// All records of one (era year, month).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthBucket {
    /// Record keys in input order.
    pub keys: Vec<RecordKey>,
    /// Record texts joined by newlines.
    pub text: String,
    /// Total characters of the record texts.
    pub char_count: usize,
}

/// Buckets the records of `timeline` by `(era_year, month)`, in ascending
/// era order.
pub fn group_by_month(timeline: &Timeline) -> BTreeMap<(u32, u32), MonthBucket> {
    let mut buckets: BTreeMap<(u32, u32), MonthBucket> = BTreeMap::new();
    for &key in &timeline.by_input_order {
        let Some(record) = timeline.get(key) else {
            continue;
        };
        let bucket: &mut MonthBucket = buckets.entry((record.era_year, record.month)).or_default();
        bucket.keys.push(key);
        bucket.text.push_str(&record.text);
        bucket.text.push('\n');
        bucket.char_count += record.text.chars().count();
    }
    buckets
}
