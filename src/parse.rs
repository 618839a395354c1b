use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::{ParserConfig, UnresolvedPolicy};
use crate::core::{calendar, line};
use crate::types::errors::ChronicleError;
use crate::types::ganzhi::DayLabel;
use crate::types::record::TimelineRecord;
use crate::types::state::ParseState;
use crate::types::timeline::Timeline;

/// Sequential parser turning chronicle text into a [`Timeline`].
///
/// The parser itself only holds configuration. Every call to
/// [`ChronicleParser::parse`] starts from an empty [`ParseState`], so one
/// parser can serve many documents, from many threads, without state leaking
/// between them.
#[derive(Debug, Clone, Default)]
pub struct ChronicleParser {
    config: ParserConfig,
}

impl ChronicleParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole chronicle text.
    ///
    /// Lines are split on `\n`. Offsets in the records count characters
    /// (not bytes) from the start of `text`.
    pub fn parse(&self, text: &str) -> Timeline {
        let mut run: ParseRun = ParseRun::new(&self.config);
        for raw_line in text.split_inclusive('\n') {
            run.push_line(raw_line);
        }
        run.finish()
    }

    /// Parses a chronicle text file, streaming it line by line.
    ///
    /// # Errors
    /// - `ChronicleError::OpenFile` if the file cannot be opened.
    /// - `ChronicleError::Read` on I/O errors or invalid UTF-8 while reading.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Timeline, ChronicleError> {
        let path_owned: String = path.as_ref().display().to_string();
        let mut reader: BufReader<File> = match File::open(path.as_ref()) {
            Ok(file) => BufReader::new(file),
            Err(source) => {
                return Err(ChronicleError::OpenFile {
                    path: path_owned,
                    source,
                });
            }
        };

        let mut run: ParseRun = ParseRun::new(&self.config);
        // read_line keeps the terminator, so offsets stay exact
        let mut buf = String::new();
        loop {
            buf.clear();
            let n: usize = reader
                .read_line(&mut buf)
                .map_err(|source| ChronicleError::Read {
                    path: path_owned.clone(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            run.push_line(&buf);
        }

        let timeline: Timeline = run.finish();
        info!(path = %path_owned, records = timeline.len(), "chronicle file parsed");
        Ok(timeline)
    }
}

/// Parses `text` with the default configuration.
pub fn parse(text: &str) -> Timeline {
    ChronicleParser::default().parse(text)
}

/// State of one pass over one document.
struct ParseRun<'a> {
    config: &'a ParserConfig,
    state: ParseState,
    timeline: Timeline,
    char_pos: usize,
    line_num: usize,
}

impl<'a> ParseRun<'a> {
    fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            state: ParseState::default(),
            timeline: Timeline::default(),
            char_pos: 0,
            line_num: 0,
        }
    }

    /// Consumes one raw line, terminator included.
    fn push_line(&mut self, raw_line: &str) {
        let chars: Vec<char> = raw_line.chars().collect();
        let line_start: usize = self.char_pos;
        self.char_pos += chars.len();
        let line_num: usize = self.line_num;
        self.line_num += 1;

        // trim, keeping track of where the kept part sits
        let lead: usize = chars.iter().take_while(|c| c.is_whitespace()).count();
        let trail: usize = chars[lead..]
            .iter()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        let content: &[char] = &chars[lead..chars.len() - trail];
        if content.is_empty() {
            return;
        }

        // 1. era year
        if let Some(token) = line::era_year(content) {
            if !token.value.exact {
                debug!(line = line_num, "era-year numeral fell back to zero");
            }
            self.state.era_year = Some(token.value.value);
            debug!(line = line_num, era_year = token.value.value, "era year");
        }

        // 2. month
        if let Some(token) = line::month(content) {
            if !token.value.exact {
                debug!(line = line_num, "month numeral fell back to zero");
            }
            self.state.month = Some(token.value.value);
            debug!(line = line_num, month = token.value.value, "month");
        }

        // 3. day label
        let label_token = line::day_label(content);
        if let Some(token) = label_token {
            self.state.day_label = Some(token.value);
            match self.state.locator() {
                None => {}
                // a zero numeral is no locator; the running date stands
                Some((0, _)) | Some((_, 0)) => {
                    debug!(line = line_num, label = %token.value, "zero locator, date kept");
                }
                Some((era_year, month)) => {
                    self.resolve_label(token.value, era_year, month, line_num);
                }
            }
        }

        // 4. emission
        let (Some(date), Some(era_year), Some(month), Some(day_label)) = (
            self.state.resolved_date,
            self.state.era_year,
            self.state.month,
            self.state.day_label,
        ) else {
            return;
        };

        let text: String = match label_token {
            Some(token) => content[..token.start]
                .iter()
                .chain(content[token.start + token.len..].iter())
                .collect(),
            None => content.iter().collect(),
        };
        let text: &str = text.trim();
        if text.chars().count() <= self.config.min_text_chars {
            return;
        }

        let char_start: usize = line_start + lead;
        self.timeline.push(TimelineRecord {
            date,
            era_year,
            month,
            day_label,
            text: text.to_string(),
            char_start,
            char_end: char_start + content.len(),
            line_num,
            label_offset: label_token.map(|token| char_start + token.start),
        });
    }

    fn resolve_label(&mut self, label: DayLabel, era_year: u32, month: u32, line_num: usize) {
        let resolved: Option<NaiveDate> = calendar::resolve(label, era_year, month);
        match resolved {
            Some(date) => {
                debug!(line = line_num, %label, %date, "day resolved");
                self.state.resolved_date = Some(date);
            }
            None => {
                debug!(line = line_num, %label, era_year, month, "day unresolved");
                if self.config.unresolved_policy == UnresolvedPolicy::Overwrite {
                    self.state.resolved_date = None;
                }
            }
        }
    }

    fn finish(mut self) -> Timeline {
        self.timeline.sort_views();
        if let (Some(first), Some(last)) = (self.timeline.first_date(), self.timeline.last_date()) {
            info!(
                records = self.timeline.len(),
                lines = self.line_num,
                %first,
                %last,
                "timeline built"
            );
        } else {
            info!(lines = self.line_num, "timeline built without records");
        }
        self.timeline
    }
}
