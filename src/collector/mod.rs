//! Character collection across a project's source tree

pub mod ranges;
pub mod scan;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};

pub use ranges::{block_of, UnicodeRange, CHAR_PATTERN, UNICODE_RANGES};
pub use scan::{has_allowed_extension, visit_text_files, ScanStats};

/// Distinct characters in code point order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    text: String,
}

impl CharSet {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.text.contains(c)
    }

    /// Content hash of the UTF-8 encoded characters
    pub fn hash(&self) -> String {
        content_hash(&self.text)
    }

    /// Character count per Unicode block, in code point order
    pub fn block_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for block in self.text.chars().filter_map(block_of) {
            match counts.last_mut() {
                Some((name, count)) if *name == block => *count += 1,
                _ => counts.push((block, 1)),
            }
        }
        counts
    }
}

impl From<BTreeSet<char>> for CharSet {
    fn from(chars: BTreeSet<char>) -> Self {
        Self {
            text: chars.into_iter().collect(),
        }
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lowercase hex SHA-256 digest of `text`
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Add every in-range character of `text` to `chars`
pub fn collect_from_text(text: &str, chars: &mut BTreeSet<char>) {
    for m in CHAR_PATTERN.find_iter(text) {
        chars.extend(m.as_str().chars());
    }
}

/// Scan `roots` and return every in-range character found in allow-listed files
pub fn collect<P: AsRef<Path>>(roots: &[P], extensions: &[String]) -> CharSet {
    collect_with_stats(roots, extensions).0
}

/// Same as [`collect`], also reporting what the walk touched
pub fn collect_with_stats<P: AsRef<Path>>(
    roots: &[P],
    extensions: &[String],
) -> (CharSet, ScanStats) {
    let mut chars = BTreeSet::new();
    let mut stats = ScanStats::default();

    for root in roots {
        visit_text_files(root.as_ref(), extensions, &mut stats, |_, text| {
            collect_from_text(text, &mut chars)
        });
    }

    debug!(
        "Scanned {} files ({} skipped, {} missing roots), {} distinct characters",
        stats.files_read,
        stats.files_skipped,
        stats.missing_roots,
        chars.len()
    );
    let charset = CharSet::from(chars);
    for (block, count) in charset.block_counts() {
        debug!("  {}: {}", block, count);
    }
    (charset, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn default_extensions() -> Vec<String> {
        crate::models::config::DEFAULT_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect()
    }

    #[test]
    fn disallowed_extensions_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.ts"), "Hello").unwrap();
        fs::write(dir.path().join("b.md"), "世界").unwrap();

        let charset = collect(&[dir.path()], &default_extensions());
        assert_eq!(charset.as_str(), "Helo");
        assert!(!charset.contains('世'));
    }

    #[test]
    fn invalid_utf8_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.js"), "ok").unwrap();
        fs::write(dir.path().join("bad.js"), b"\xC3\x28 broken \xFF").unwrap();

        let (charset, stats) = collect_with_stats(&[dir.path()], &default_extensions());
        assert_eq!(charset.as_str(), "ko");
        assert_eq!(stats.files_skipped, 1);
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("z")).unwrap();
        fs::write(dir.path().join("z").join("x.vue"), "zzz 你好").unwrap();
        fs::write(dir.path().join("y.yaml"), "好 aa").unwrap();

        let charset = collect(&[dir.path()], &default_extensions());
        assert_eq!(charset.as_str(), " az你好");
        assert_eq!(charset.len(), 5);
    }

    #[test]
    fn root_order_does_not_change_the_result() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("a.html"), "<p>日本語</p>").unwrap();
        fs::write(second.path().join("b.json"), r#"{"k": "한국어"}"#).unwrap();

        let extensions = default_extensions();
        let forward = collect(&[first.path(), second.path()], &extensions);
        let backward = collect(&[second.path(), first.path()], &extensions);
        assert_eq!(forward, backward);
        assert_eq!(forward.hash(), backward.hash());
    }

    #[test]
    fn control_characters_and_emoji_are_dropped() {
        let mut chars = BTreeSet::new();
        collect_from_text("a\tb\n😀ｶ", &mut chars);
        assert_eq!(CharSet::from(chars).as_str(), "abｶ");
    }

    #[test]
    fn block_counts_follow_code_point_order() {
        let mut chars = BTreeSet::new();
        collect_from_text("ab 世界 かな é", &mut chars);
        let counts = CharSet::from(chars).block_counts();
        assert_eq!(
            counts,
            [
                ("Basic Latin", 3),
                ("Latin-1 Supplement", 1),
                ("Hiragana and Katakana", 2),
                ("CJK Unified Ideographs", 2),
            ]
        );
    }

    #[test]
    fn hash_is_hex_sha256() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(CharSet::default().hash().len(), 64);
    }
}
