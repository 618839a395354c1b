//! JSON persistence of timelines.
//!
//! Records are written as a pretty-printed array in input order, with the
//! field names the corpus tooling already reads (`date`, `year`, `month`,
//! `ganzhi`, `text`, `char_start`, `char_end`, `line_num`) plus
//! `label_offset`.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::types::errors::ChronicleError;
use crate::types::record::TimelineRecord;
use crate::types::timeline::Timeline;

pub fn to_json(timeline: &Timeline) -> Result<String, ChronicleError> {
    let records: Vec<&TimelineRecord> = timeline.iter().collect();
    serde_json::to_string_pretty(&records).map_err(|source| ChronicleError::Json { source })
}

pub fn from_json(json: &str) -> Result<Vec<TimelineRecord>, ChronicleError> {
    serde_json::from_str(json).map_err(|source| ChronicleError::Json { source })
}

pub fn write_json(timeline: &Timeline, path: impl AsRef<Path>) -> Result<(), ChronicleError> {
    let path: &Path = path.as_ref();
    let json: String = to_json(timeline)?;
    fs::write(path, json).map_err(|source| ChronicleError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), records = timeline.len(), "timeline written");
    Ok(())
}

pub fn read_json(path: impl AsRef<Path>) -> Result<Timeline, ChronicleError> {
    let path: &Path = path.as_ref();
    let json: String = fs::read_to_string(path).map_err(|source| ChronicleError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(from_json(&json)?.into_iter().collect())
}
