//! End-to-end parser scenarios over small chronicle excerpts.

use chrono::NaiveDate;
use chronicle_timeline::{ChronicleParser, ParserConfig, UnresolvedPolicy, parse};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Year, month and label on a single line.
#[test]
fn single_line_entry() {
    let timeline = parse("嘉靖元年正月...（丙午）...某某奏事如下");
    assert_eq!(timeline.len(), 1);
    let record = timeline.iter().next().unwrap();
    assert_eq!(record.era_year, 1);
    assert_eq!(record.month, 1);
    assert_eq!(record.day_label.to_string(), "丙午");
    assert_eq!(record.date, ymd(1522, 2, 13));
    assert_eq!(record.text, "嘉靖元年正月...（）...某某奏事如下");
    assert_eq!(record.char_start, 0);
    assert_eq!(record.char_end, 22);
}

/// A label before any year or month never produces a record.
#[test]
fn incomplete_state_emits_nothing() {
    assert!(parse("丙午，上御奉天殿，文武群臣上表称贺。").is_empty());
    assert!(parse("嘉靖元年\n丙午，上御奉天殿，文武群臣上表称贺。").is_empty());
    assert!(parse("正月\n丙午，上御奉天殿，文武群臣上表称贺。").is_empty());
}

/// Remaining text must be longer than ten characters.
#[test]
fn short_remainders_are_dropped() {
    let text = "嘉靖元年正月丙午\n丙午上御奉天殿受百官朝贺\n丙午上御奉天殿受百官朝贺。\n";
    let timeline = parse(text);
    assert_eq!(timeline.len(), 1);
    let record = timeline.iter().next().unwrap();
    assert_eq!(record.text, "上御奉天殿受百官朝贺。");
    assert_eq!(record.line_num, 2);
}

#[test]
fn threshold_is_configurable() {
    let parser = ChronicleParser::new(ParserConfig::default().with_min_text_chars(3));
    let timeline = parser.parse("嘉靖元年正月丙午\n丙午上御奉天殿受百官朝贺\n");
    // 嘉靖元年正月 (6 chars) now passes too
    assert_eq!(timeline.len(), 2);
}

/// Year and month carry over to lines that only bring a new label.
#[test]
fn year_and_month_carry_over() {
    let text = "\
嘉靖三年九月丙午，上御文华殿，召大学士议事良久。
九月丁未，礼部进《大礼集议》，上览之，留中不发。
";
    let timeline = parse(text);
    assert_eq!(timeline.len(), 2);
    let records: Vec<_> = timeline.iter().collect();
    for record in &records {
        assert_eq!((record.era_year, record.month), (3, 9));
    }
    assert_eq!(records[0].day_label.to_string(), "丙午");
    assert_eq!(records[1].day_label.to_string(), "丁未");
    assert_eq!(records[1].date - records[0].date, chrono::Duration::days(1));
}

/// Lines without a label of their own inherit the last resolved date.
#[test]
fn unlabelled_lines_inherit_date() {
    let text = "\
嘉靖元年正月
丙午，上御奉天殿，文武群臣上表称贺。
是日，诏天下，大赦，除正德中弊政数十事。
";
    let timeline = parse(text);
    assert_eq!(timeline.len(), 2);
    let records: Vec<_> = timeline.iter().collect();
    assert_eq!(records[1].date, records[0].date);
    assert_eq!(records[1].label_offset, None);
    assert_eq!(records[1].text, "是日，诏天下，大赦，除正德中弊政数十事。");
}

/// A new month does not clear the resolved date.
#[test]
fn new_month_keeps_resolved_date() {
    let text = "\
嘉靖元年正月
丙午，上御奉天殿，文武群臣上表称贺。
二月
是月，京师大风霾，昼晦，命百官修省。
";
    let timeline = parse(text);
    assert_eq!(timeline.len(), 2);
    let records: Vec<_> = timeline.iter().collect();
    assert_eq!(records[1].month, 2);
    assert_eq!(records[1].date, ymd(1522, 2, 13));
}

// month 13 is outside the calendar, so 丁未 cannot be placed
const UNRESOLVABLE: &str = "\
嘉靖元年正月
丙午，上御奉天殿，文武群臣上表称贺。
十三月
丁未，户部奏各省钱粮亏欠之数，请严催征。
";

#[test]
fn unresolved_label_clears_date_by_default() {
    let timeline = parse(UNRESOLVABLE);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.iter().next().unwrap().day_label.to_string(), "丙午");
}

#[test]
fn unresolved_label_can_keep_previous_date() {
    let parser = ChronicleParser::new(
        ParserConfig::default().with_unresolved_policy(UnresolvedPolicy::RetainPrevious),
    );
    let timeline = parser.parse(UNRESOLVABLE);
    assert_eq!(timeline.len(), 2);
    let last = timeline.iter().last().unwrap();
    assert_eq!(last.date, ymd(1522, 2, 13));
    assert_eq!(last.month, 13);
    assert_eq!(last.day_label.to_string(), "丁未");
}

/// A year numeral read as 0 skips conversion and keeps the running date,
/// whatever the policy.
#[test]
fn zero_year_keeps_running_date() {
    let text = "\
嘉靖元年正月
丙午，上御奉天殿，文武群臣上表称贺。
嘉靖〇年
丁未，户部奏各省钱粮亏欠之数，请严催征。
";
    for policy in [UnresolvedPolicy::Overwrite, UnresolvedPolicy::RetainPrevious] {
        let parser = ChronicleParser::new(ParserConfig::default().with_unresolved_policy(policy));
        let timeline = parser.parse(text);
        assert_eq!(timeline.len(), 2);
        let last = timeline.iter().last().unwrap();
        assert_eq!(last.date, ymd(1522, 2, 13));
        assert_eq!(last.era_year, 0);
        assert_eq!(last.day_label.to_string(), "丁未");
    }
}

/// Only the recognized token is removed; the line is rebuilt from the record.
#[test]
fn stripped_token_restores_source_line() {
    let text = "\
嘉靖三年九月
  丙午，上御文华殿，召大学士议事良久。
礼部奏：丁未日当祭太庙，请遣官代行。上从之。
是日，诏天下，大赦，除正德中弊政数十事。
";
    let chars: Vec<char> = text.chars().collect();
    let timeline = parse(text);
    assert_eq!(timeline.len(), 3);
    for record in timeline.iter() {
        let source: String = chars[record.char_start..record.char_end].iter().collect();
        let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(squash(&record.restore_line()), squash(&source));
        if let Some(offset) = record.label_offset {
            let token: String = chars[offset..offset + 2].iter().collect();
            assert_eq!(token, record.day_label.to_string());
        }
    }
}

/// Blank lines advance offsets but are otherwise ignored.
#[test]
fn blank_lines_only_move_offsets() {
    let dense = parse("嘉靖元年正月\n丙午，上御奉天殿，文武群臣上表称贺。\n");
    let sparse = parse("嘉靖元年正月\n\n\n丙午，上御奉天殿，文武群臣上表称贺。\n");
    let a = dense.iter().next().unwrap();
    let b = sparse.iter().next().unwrap();
    assert_eq!(a.text, b.text);
    assert_eq!(a.date, b.date);
    assert_eq!(b.char_start, a.char_start + 2);
    assert_eq!(b.line_num, a.line_num + 2);
}

/// One parser shared by several threads, one document each.
#[test]
fn documents_parse_independently_in_parallel() {
    let parser = ChronicleParser::default();
    let shared: &ChronicleParser = &parser;
    let docs = [
        "嘉靖元年正月\n丙午，上御奉天殿，文武群臣上表称贺。\n",
        "丙午，上御奉天殿，文武群臣上表称贺。\n",
        "嘉靖二十一年冬十月\n丁酉，宫人杨金英等谋逆，伏诛。事详具于后。\n",
    ];
    let results: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| s.spawn(move || shared.parse(doc).len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec![1, 0, 1]);

    let renyin = parser.parse(docs[2]);
    let record = renyin.iter().next().unwrap();
    assert_eq!((record.era_year, record.month), (21, 10));
    assert_eq!(record.date, ymd(1542, 10, 17));
}
