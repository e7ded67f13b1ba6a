use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One face of the source collection to subset, keyed by a region/language tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontVariant {
    /// Tag embedded in the output file name ("SC", "JP", ...)
    pub tag: String,
    /// Index of the face inside the source font collection
    pub face_index: u32,
}

impl FontVariant {
    pub fn new(tag: impl Into<String>, face_index: u32) -> Self {
        Self {
            tag: tag.into(),
            face_index,
        }
    }

    /// Variants built when nothing else is configured
    pub fn defaults() -> Vec<FontVariant> {
        vec![
            // CJK Unified Ideographs, simplified Chinese glyph forms
            FontVariant::new("SC", 2),
            // Hiragana + Katakana + Kanji
            FontVariant::new("JP", 0),
        ]
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.face_index)
    }
}

/// Parses the `TAG=INDEX` form accepted on the command line
impl FromStr for FontVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, index) = s.split_once('=').ok_or_else(|| {
            Error::Config(format!("variant '{}' must look like TAG=INDEX", s))
        })?;

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::Config(format!("variant '{}' has an empty tag", s)));
        }

        let face_index = index.trim().parse::<u32>().map_err(|e| {
            Error::Config(format!("variant '{}' has an invalid face index: {}", s, e))
        })?;

        Ok(FontVariant::new(tag, face_index))
    }
}

/// Output container format passed to the subsetter as `--flavor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Woff2,
    Woff,
}

impl Flavor {
    /// File extension of generated files
    pub fn extension(self) -> &'static str {
        match self {
            Flavor::Woff2 => "woff2",
            Flavor::Woff => "woff",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_casing::test_casing;

    #[test]
    fn parses_tag_and_index() {
        let variant: FontVariant = "KR=3".parse().unwrap();
        assert_eq!(variant, FontVariant::new("KR", 3));

        let padded: FontVariant = " TC = 1 ".parse().unwrap();
        assert_eq!(padded, FontVariant::new("TC", 1));
    }

    #[test_casing(4, ["SC", "=2", "SC=", "SC=-1"])]
    fn rejects_malformed_variants(raw: &str) {
        let err = raw.parse::<FontVariant>().unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err}");
    }

    #[test]
    fn default_variants_keep_declaration_order() {
        let tags: Vec<_> = FontVariant::defaults()
            .into_iter()
            .map(|variant| variant.tag)
            .collect();
        assert_eq!(tags, ["SC", "JP"]);
    }

    #[test]
    fn flavor_is_lowercase_in_json() {
        assert_eq!(serde_json::to_string(&Flavor::Woff2).unwrap(), "\"woff2\"");
        let flavor: Flavor = serde_json::from_str("\"woff\"").unwrap();
        assert_eq!(flavor.extension(), "woff");
    }
}
