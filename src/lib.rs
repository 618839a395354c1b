//! Turns Ming Shilu chronicle text into a dated timeline.
//!
//! Chronicle entries name their day only by its stem-branch label (`丙午`),
//! with the reign year (`嘉靖三年`) and month (`九月`) given once and left
//! in force for the entries that follow. [`parse`] reads the text line by
//! line, keeps that running context, and resolves each label to a solar
//! date through [`convert`].
//!
//! ```
//! let timeline = chronicle_timeline::parse("嘉靖元年正月\n丙午，上御奉天殿，文武群臣上表称贺。\n");
//! let record = timeline.iter().next().unwrap();
//! assert_eq!(record.date.to_string(), "1522-02-13");
//! assert_eq!((record.era_year, record.month), (1, 1));
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod monthly;
pub mod parse;
pub mod types;

pub use crate::config::{ParserConfig, UnresolvedPolicy};
pub use crate::core::calendar::{JIAJING_EPOCH, convert, resolve};
pub use crate::parse::{ChronicleParser, parse};
pub use crate::types::errors::ChronicleError;
pub use crate::types::ganzhi::DayLabel;
pub use crate::types::record::TimelineRecord;
pub use crate::types::timeline::Timeline;
