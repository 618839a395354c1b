use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use slotmap::SlotMap;

use crate::types::keys::RecordKey;
use crate::types::record::TimelineRecord;

/// Dated records produced by one parse run.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    /// All emitted records.
    pub records: SlotMap<RecordKey, TimelineRecord>,

    // --- Order "views" ---
    pub by_input_order: Vec<RecordKey>,
    pub by_date: Vec<RecordKey>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, key: RecordKey) -> Option<&TimelineRecord> {
        self.records.get(key)
    }

    /// Appends a record at the end of the input-order view.
    ///
    /// The date view is stale until [`Timeline::sort_views`] runs.
    pub fn push(&mut self, record: TimelineRecord) -> RecordKey {
        let key: RecordKey = self.records.insert(record);
        self.by_input_order.push(key);
        key
    }

    /// Rebuilds the date view: ascending date, ties in input order.
    pub fn sort_views(&mut self) {
        let order_index: HashMap<RecordKey, usize> = self
            .by_input_order
            .iter()
            .enumerate()
            .map(|(idx, key)| (*key, idx))
            .collect();
        let records = &self.records;
        let key_position = |key: &RecordKey| order_index.get(key).copied().unwrap_or(usize::MAX);

        let mut by_date: Vec<RecordKey> = self.by_input_order.clone();
        by_date.sort_by(|a, b| match (records.get(*a), records.get(*b)) {
            (Some(ra), Some(rb)) => {
                let date_ord: Ordering = ra.date.cmp(&rb.date);
                if date_ord == Ordering::Equal {
                    key_position(a).cmp(&key_position(b))
                } else {
                    date_ord
                }
            }
            _ => key_position(a).cmp(&key_position(b)),
        });
        self.by_date = by_date;
    }

    /// Records in input order.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineRecord> {
        self.by_input_order
            .iter()
            .filter_map(|key| self.records.get(*key))
    }

    /// Records in date order.
    pub fn iter_by_date(&self) -> impl Iterator<Item = &TimelineRecord> {
        self.by_date.iter().filter_map(|key| self.records.get(*key))
    }

    /// Owned copy of the records in input order.
    pub fn to_records(&self) -> Vec<TimelineRecord> {
        self.iter().cloned().collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.values().map(|r| r.date).min()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.values().map(|r| r.date).max()
    }

    /// Days between the earliest and the latest record.
    pub fn span_days(&self) -> Option<i64> {
        Some((self.last_date()? - self.first_date()?).num_days())
    }
}

impl FromIterator<TimelineRecord> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineRecord>>(iter: I) -> Self {
        let mut timeline = Timeline::default();
        for record in iter {
            timeline.push(record);
        }
        timeline.sort_views();
        timeline
    }
}
