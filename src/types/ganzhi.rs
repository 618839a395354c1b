use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Heavenly stem glyphs in cycle order (`甲` = 0).
pub const STEM_GLYPHS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// Earthly branch glyphs in cycle order (`子` = 0).
pub const BRANCH_GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stem(u8);

impl Stem {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        STEM_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|idx| Stem(idx as u8))
    }

    /// 0-based position (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn glyph(self) -> char {
        STEM_GLYPHS[self.0 as usize]
    }
}

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branch(u8);

impl Branch {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        BRANCH_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|idx| Branch(idx as u8))
    }

    /// 0-based position (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn glyph(self) -> char {
        BRANCH_GLYPHS[self.0 as usize]
    }
}

/// A stem-branch day designation such as `丙午`.
///
/// Every stem can be paired with every branch at the glyph level, but only the
/// 60 pairs whose indices share parity occur in the sexagenary cycle. For the
/// other 60 pairs [`DayLabel::cycle_index`] returns `None`.
///
/// Serializes as its two glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayLabel {
    pub stem: Stem,
    pub branch: Branch,
}

impl DayLabel {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Builds a label from a stem glyph and a branch glyph.
    ///
    /// Returns `None` when either glyph is not calendrical. The pair is not
    /// checked against the cycle; see [`DayLabel::cycle_index`].
    pub fn from_glyphs(stem: char, branch: char) -> Option<Self> {
        Some(Self {
            stem: Stem::from_glyph(stem)?,
            branch: Branch::from_glyph(branch)?,
        })
    }

    /// Builds the label sitting at `cycle_index` (taken modulo 60).
    pub fn from_cycle_index(cycle_index: u8) -> Self {
        let idx: u8 = cycle_index % 60;
        Self {
            stem: Stem(idx % 10),
            branch: Branch(idx % 12),
        }
    }

    pub const fn stem_index(self) -> u8 {
        self.stem.0
    }

    pub const fn branch_index(self) -> u8 {
        self.branch.0
    }

    /// Position in the 60-day cycle, i.e. the unique `i` in `0..60` with
    /// `i % 10 == stem_index` and `i % 12 == branch_index`.
    pub fn cycle_index(self) -> Option<u8> {
        (0..60u8).find(|i| i % 10 == self.stem.0 && i % 12 == self.branch.0)
    }

    pub fn is_valid(self) -> bool {
        self.cycle_index().is_some()
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

/// Error returned when a string is not exactly one stem glyph followed by one
/// branch glyph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a stem-branch label: '{0}'")]
pub struct InvalidDayLabel(pub String);

impl FromStr for DayLabel {
    type Err = InvalidDayLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(stem), Some(branch), None) => {
                DayLabel::from_glyphs(stem, branch).ok_or_else(|| InvalidDayLabel(s.to_string()))
            }
            _ => Err(InvalidDayLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for DayLabel {
    type Error = InvalidDayLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayLabel> for String {
    fn from(label: DayLabel) -> Self {
        label.to_string()
    }
}
