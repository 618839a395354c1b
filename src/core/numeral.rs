use smallvec::SmallVec;

/// Tens marker splitting a run into `left * 10 + right`.
const TEN: char = '十';

/// Glyph values, including the calendar aliases: 元 (first year), 正 (first
/// month), 冬 (eleventh month) and 腊/臘 (twelfth month).
const GLYPH_VALUES: [(char, u32); 17] = [
    ('〇', 0),
    ('零', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
    ('元', 1),
    ('正', 1),
    ('冬', 11),
    ('腊', 12),
    ('臘', 12),
];

/// Result of reading a numeral run.
///
/// `exact` is false when some part of the run could not be read and was
/// taken as 0. `value` is what the chronicle parser uses either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralReading {
    pub value: u32,
    pub exact: bool,
}

impl NumeralReading {
    fn exact(value: u32) -> Self {
        Self { value, exact: true }
    }

    fn fallback(value: u32) -> Self {
        Self {
            value,
            exact: false,
        }
    }

    /// `Some(value)` only for a fully recognized run.
    pub fn checked(self) -> Option<u32> {
        self.exact.then_some(self.value)
    }
}

pub fn glyph_value(glyph: char) -> Option<u32> {
    GLYPH_VALUES
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|&(_, v)| v)
}

/// Reads a Chinese numeral run such as `二十一`, `十二`, `元` or `冬`.
///
/// A single glyph maps through the table. A run with exactly one `十` reads
/// as `(left or 1) * 10 + (right or 0)`, where left and right must each be a
/// single known glyph. Anything else reads as 0 with `exact == false`.
pub fn read(run: &str) -> NumeralReading {
    let glyphs: SmallVec<[char; 4]> = run.chars().collect();

    if glyphs.len() == 1 {
        return match glyph_value(glyphs[0]) {
            Some(v) => NumeralReading::exact(v),
            None => NumeralReading::fallback(0),
        };
    }

    let tens: SmallVec<[usize; 2]> = glyphs
        .iter()
        .enumerate()
        .filter(|(_, g)| **g == TEN)
        .map(|(idx, _)| idx)
        .collect();
    if tens.len() != 1 {
        return NumeralReading::fallback(0);
    }
    let split: usize = tens[0];
    let (left, right) = (&glyphs[..split], &glyphs[split + 1..]);

    let mut exact: bool = true;
    let mut part = |side: &[char], implicit: u32| -> u32 {
        match side {
            [] => implicit,
            [g] => glyph_value(*g).unwrap_or_else(|| {
                exact = false;
                0
            }),
            _ => {
                exact = false;
                0
            }
        }
    };
    let left_value: u32 = part(left, 1);
    let right_value: u32 = part(right, 0);

    NumeralReading {
        value: left_value * 10 + right_value,
        exact,
    }
}
