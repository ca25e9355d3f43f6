//! Pattern extraction from `vehicles.meta` text.
//!
//! The extractors work on raw text and never validate the surrounding XML.
//! A missing marker is not an error: the model extractor returns an empty
//! list and the audio extractor returns `None`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ConvertError, ConvertResult};

/// `<modelName>` values, trimmed, single line.
fn model_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<modelName>\s*(.*?)\s*</modelName>").unwrap())
}

/// `<audioNameHash>` values, trimmed, single line.
fn audio_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<audioNameHash>\s*(.*?)\s*</audioNameHash>").unwrap())
}

/// Extract every model name in document order.
///
/// Duplicates are preserved; callers that need a set deduplicate themselves.
///
/// # Examples
///
/// ```
/// use vehpack::meta::extract_model_names;
///
/// let text = "<Item><modelName>adder</modelName></Item><Item><MODELNAME> comet </MODELNAME></Item>";
/// assert_eq!(extract_model_names(text), vec!["adder", "comet"]);
/// ```
pub fn extract_model_names(text: &str) -> Vec<String> {
    model_name_pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract the first audio name hash, lower-cased.
///
/// Returns `None` when the marker is absent or its value is empty.
///
/// # Examples
///
/// ```
/// use vehpack::meta::extract_audio_name;
///
/// assert_eq!(extract_audio_name("<audioNameHash>ADDER</audioNameHash>"), Some("adder".to_string()));
/// assert_eq!(extract_audio_name("<modelName>adder</modelName>"), None);
/// ```
pub fn extract_audio_name(text: &str) -> Option<String> {
    let caps = audio_name_pattern().captures(text)?;
    let value = caps[1].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

/// Read a metadata file as UTF-8 text.
pub fn read_meta_text(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|e| ConvertError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Model and audio identifiers found in one `vehicles.meta` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleIdentifiers {
    /// Model names in document order.
    pub model_names: Vec<String>,
    /// First audio name hash, lower-cased.
    pub audio_name: Option<String>,
}

impl VehicleIdentifiers {
    /// Extract identifiers from metadata text.
    pub fn from_text(text: &str) -> Self {
        Self {
            model_names: extract_model_names(text),
            audio_name: extract_audio_name(text),
        }
    }

    /// Read and extract identifiers from a metadata file.
    pub fn from_file(path: &Path) -> ConvertResult<Self> {
        let text = read_meta_text(path)?;
        Ok(Self::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const VEHICLES_META: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CVehicleModelInfo__InitDataList>
  <InitDatas>
    <Item>
      <modelName>adder</modelName>
      <txdName>adder</txdName>
      <audioNameHash>ADDER</audioNameHash>
    </Item>
    <Item>
      <modelName>  comet  </modelName>
      <audioNameHash>comet</audioNameHash>
    </Item>
  </InitDatas>
</CVehicleModelInfo__InitDataList>
"#;

    #[test]
    fn test_model_names_in_document_order() {
        assert_eq!(extract_model_names(VEHICLES_META), vec!["adder", "comet"]);
    }

    #[test]
    fn test_model_names_case_insensitive_markers() {
        let text = "<MODELNAME>a</MODELNAME><modelname>b</modelname>";
        assert_eq!(extract_model_names(text), vec!["a", "b"]);
    }

    #[test]
    fn test_model_names_preserve_duplicates() {
        let text = "<modelName>a</modelName><modelName>a</modelName>";
        assert_eq!(extract_model_names(text), vec!["a", "a"]);
    }

    #[test]
    fn test_model_names_absent() {
        assert!(extract_model_names("<Item></Item>").is_empty());
        assert!(extract_model_names("").is_empty());
    }

    #[test]
    fn test_model_name_does_not_span_lines() {
        let text = "<modelName>broken\n</modelName>";
        assert!(extract_model_names(text).is_empty());
    }

    #[test]
    fn test_audio_name_first_lowercased() {
        assert_eq!(extract_audio_name(VEHICLES_META), Some("adder".to_string()));
    }

    #[test]
    fn test_audio_name_absent_or_empty() {
        assert_eq!(extract_audio_name("<modelName>x</modelName>"), None);
        assert_eq!(extract_audio_name("<audioNameHash>  </audioNameHash>"), None);
    }

    #[test]
    fn test_identifiers_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vehicles.meta");
        std::fs::write(&path, VEHICLES_META).unwrap();

        let ids = VehicleIdentifiers::from_file(&path).unwrap();
        assert_eq!(ids.model_names, vec!["adder", "comet"]);
        assert_eq!(ids.audio_name.as_deref(), Some("adder"));
    }

    #[test]
    fn test_identifiers_from_invalid_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vehicles.meta");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = VehicleIdentifiers::from_file(&path).unwrap_err();
        assert!(matches!(err, ConvertError::ReadFailed { .. }));
    }

    proptest! {
        #[test]
        fn prop_extracts_every_marker_in_order(
            names in proptest::collection::vec("[a-z][a-z0-9_]{0,11}", 0..12)
        ) {
            let text: String = names
                .iter()
                .map(|n| format!("<Item>\n  <modelName>{}</modelName>\n</Item>\n", n))
                .collect();

            prop_assert_eq!(extract_model_names(&text), names);
        }
    }
}
