use serde::{Deserialize, Serialize};

/// Contents of `.font-subset-cache.json`
///
/// Keys this tool does not know about are carried through untouched so the
/// file can be shared with other build steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Digest of the character set the current subsets were built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars_hash: Option<String>,
    /// Path of the most recently generated font file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_font: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CacheRecord {
    /// True when the record was built from a character set with this digest
    pub fn matches(&self, chars_hash: &str) -> bool {
        self.chars_hash.as_deref() == Some(chars_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_an_empty_record() {
        let record: CacheRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, CacheRecord::default());
        assert!(!record.matches(""));
    }

    #[test]
    fn unknown_keys_survive_a_rewrite() {
        let raw = r#"{ "chars_hash": "abc", "output_font": "a.woff2", "built_by": "ci" }"#;
        let record: CacheRecord = serde_json::from_str(raw).unwrap();
        assert!(record.matches("abc"));
        assert_eq!(record.extra["built_by"], "ci");

        let rewritten = serde_json::to_value(&record).unwrap();
        assert_eq!(rewritten["built_by"], "ci");
        assert_eq!(rewritten["output_font"], "a.woff2");
    }
}
