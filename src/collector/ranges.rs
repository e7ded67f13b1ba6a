use std::fmt::Write;

use lazy_static::lazy_static;
use regex::Regex;

/// Inclusive block of code points worth keeping in a subset
#[derive(Debug, Clone, Copy)]
pub struct UnicodeRange {
    pub name: &'static str,
    pub start: char,
    pub end: char,
}

impl UnicodeRange {
    const fn new(name: &'static str, start: char, end: char) -> Self {
        Self { name, start, end }
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }
}

/// Every character outside these blocks is ignored by the collector
pub const UNICODE_RANGES: [UnicodeRange; 12] = [
    UnicodeRange::new("Basic Latin", '\u{0020}', '\u{007E}'),
    UnicodeRange::new("Latin-1 Supplement", '\u{00A0}', '\u{00FF}'),
    UnicodeRange::new("Latin Extended-A", '\u{0100}', '\u{017F}'),
    UnicodeRange::new("Latin Extended-B", '\u{0180}', '\u{024F}'),
    UnicodeRange::new("Greek and Coptic", '\u{0370}', '\u{03FF}'),
    UnicodeRange::new("Cyrillic", '\u{0400}', '\u{04FF}'),
    UnicodeRange::new("Cyrillic Supplement", '\u{0500}', '\u{052F}'),
    UnicodeRange::new("Latin Extended Additional", '\u{1E00}', '\u{1EFF}'),
    UnicodeRange::new("CJK Unified Ideographs", '\u{4E00}', '\u{9FFF}'),
    UnicodeRange::new("Hiragana and Katakana", '\u{3040}', '\u{30FF}'),
    UnicodeRange::new("Hangul Syllables", '\u{AC00}', '\u{D7AF}'),
    UnicodeRange::new("Halfwidth and Fullwidth Forms", '\u{FF00}', '\u{FFEF}'),
];

lazy_static! {
    /// Single-character class matching any code point in `UNICODE_RANGES`
    pub static ref CHAR_PATTERN: Regex = Regex::new(&character_class(&UNICODE_RANGES))
        .expect("Unicode range table forms a valid character class");
}

/// Render ranges as a regex character class, e.g. `[\x{20}-\x{7E}...]`
pub fn character_class(ranges: &[UnicodeRange]) -> String {
    let mut class = String::from("[");
    for range in ranges {
        // Writing to a String cannot fail
        let _ = write!(
            class,
            "\\x{{{:X}}}-\\x{{{:X}}}",
            range.start as u32, range.end as u32
        );
    }
    class.push(']');
    class
}

/// Name of the block `c` falls in, if any
pub fn block_of(c: char) -> Option<&'static str> {
    UNICODE_RANGES
        .iter()
        .find(|range| range.contains(c))
        .map(|range| range.name)
}
