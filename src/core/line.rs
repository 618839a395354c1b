use crate::core::numeral::{self, NumeralReading};
use crate::types::ganzhi::DayLabel;

/// Reign name preceding every era-year numeral.
pub const ERA_NAME: [char; 2] = ['嘉', '靖'];

const YEAR_MARKER: char = '年';
const MONTH_MARKER: char = '月';

const YEAR_GLYPHS: [char; 13] = [
    '元', '〇', '零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '十',
];
const MONTH_LEAD_GLYPHS: [char; 13] = [
    '正', '二', '三', '四', '五', '六', '七', '八', '九', '十', '冬', '腊', '臘',
];
// month names that never take a second numeral glyph
const MONTH_ALIAS_GLYPHS: [char; 4] = ['正', '冬', '腊', '臘'];
const MONTH_TAIL_GLYPHS: [char; 10] = ['一', '二', '三', '四', '五', '六', '七', '八', '九', '十'];

/// A recognized token inside one line. Offsets count characters from the
/// start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<T> {
    pub value: T,
    pub start: usize,
    pub len: usize,
}

// Example: 嘉靖二十一年冬十月丁酉 -> era year 21
pub(crate) fn era_year(line: &[char]) -> Option<Token<NumeralReading>> {
    let mut from: usize = 0;
    while let Some(pos) = find_seq(line, &ERA_NAME, from) {
        let run_start: usize = pos + ERA_NAME.len();
        let run_len: usize = line[run_start..]
            .iter()
            .take_while(|c| YEAR_GLYPHS.contains(*c))
            .count();
        if run_len > 0 && line.get(run_start + run_len) == Some(&YEAR_MARKER) {
            let run: String = line[run_start..run_start + run_len].iter().collect();
            return Some(Token {
                value: numeral::read(&run),
                start: pos,
                len: ERA_NAME.len() + run_len + 1,
            });
        }
        from = pos + 1;
    }
    None
}

// Example: 嘉靖二十一年冬十月丁酉 -> month 10
// 冬 here names the season; as a month alias it stands alone (冬月)
pub(crate) fn month(line: &[char]) -> Option<Token<NumeralReading>> {
    for (idx, lead) in line.iter().enumerate() {
        if !MONTH_LEAD_GLYPHS.contains(lead) {
            continue;
        }
        let run_len: usize = match (line.get(idx + 1), line.get(idx + 2)) {
            (Some(tail), Some(&MONTH_MARKER))
                if MONTH_TAIL_GLYPHS.contains(tail) && !MONTH_ALIAS_GLYPHS.contains(lead) =>
            {
                2
            }
            (Some(&MONTH_MARKER), _) => 1,
            _ => continue,
        };
        let run: String = line[idx..idx + run_len].iter().collect();
        return Some(Token {
            value: numeral::read(&run),
            start: idx,
            len: run_len + 1,
        });
    }
    None
}

/// First stem-branch pair on the line that exists in the 60-day cycle.
pub(crate) fn day_label(line: &[char]) -> Option<Token<DayLabel>> {
    line.windows(2).enumerate().find_map(|(idx, pair)| {
        DayLabel::from_glyphs(pair[0], pair[1])
            .filter(|label| label.is_valid())
            .map(|label| Token {
                value: label,
                start: idx,
                len: 2,
            })
    })
}

fn find_seq(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}
