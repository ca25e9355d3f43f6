//! File classification by name and extension.

use std::path::Path;

use crate::meta::MetaCategory;

/// Binary asset extensions that are streamed as-is.
pub const STREAM_EXTENSIONS: [&str; 4] = ["yft", "ytd", "ydr", "ymt"];

/// Where a file ends up in the converted resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Model, texture or drawable asset for `stream/`.
    Stream,
    /// Metadata file for `data/`.
    Meta(MetaCategory),
    /// Audio configuration (`.rel`, name tables) for `audioconfig/`.
    AudioConfig,
    /// Audio waveform container (`.awc`) for `sfx/dlc_<name>/`.
    AudioWave,
    /// Anything else; ignored.
    Other,
}

impl FileKind {
    /// Classify a file by its name. First matching rule wins:
    ///
    /// 1. stream asset extension (case-insensitive)
    /// 2. exact metadata file name
    /// 3. `.rel` extension or `nametable` in the name (case-insensitive)
    /// 4. `.awc` extension (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use vehpack::meta::MetaCategory;
    /// use vehpack::scan::FileKind;
    ///
    /// assert_eq!(FileKind::classify("adder.YFT"), FileKind::Stream);
    /// assert_eq!(FileKind::classify("handling.meta"), FileKind::Meta(MetaCategory::Handling));
    /// assert_eq!(FileKind::classify("adder_game.dat151.rel"), FileKind::AudioConfig);
    /// assert_eq!(FileKind::classify("adder.awc"), FileKind::AudioWave);
    /// assert_eq!(FileKind::classify("readme.txt"), FileKind::Other);
    /// ```
    pub fn classify(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        let extension = Path::new(&lower)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        if STREAM_EXTENSIONS.contains(&extension) {
            FileKind::Stream
        } else if let Some(category) = MetaCategory::from_file_name(file_name) {
            FileKind::Meta(category)
        } else if extension == "rel" || lower.contains("nametable") {
            FileKind::AudioConfig
        } else if extension == "awc" {
            FileKind::AudioWave
        } else {
            FileKind::Other
        }
    }

    /// Short label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Stream => "stream",
            FileKind::Meta(_) => "meta",
            FileKind::AudioConfig => "audioconfig",
            FileKind::AudioWave => "audiowave",
            FileKind::Other => "other",
        }
    }
}

/// Whether a stream asset name marks a high-detail model variant.
pub fn is_high_detail(file_name: &str) -> bool {
    file_name.to_lowercase().contains("_hi")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_extensions() {
        for name in ["adder.yft", "adder.ytd", "wheel.ydr", "adder.ymt", "ADDER_HI.YFT"] {
            assert_eq!(FileKind::classify(name), FileKind::Stream, "{}", name);
        }
    }

    #[test]
    fn test_meta_files() {
        for category in MetaCategory::ALL {
            assert_eq!(
                FileKind::classify(category.file_name()),
                FileKind::Meta(category)
            );
        }
    }

    #[test]
    fn test_meta_requires_exact_name() {
        assert_eq!(FileKind::classify("Handling.meta"), FileKind::Other);
        assert_eq!(FileKind::classify("handling2.meta"), FileKind::Other);
        assert_eq!(FileKind::classify("content.xml"), FileKind::Other);
    }

    #[test]
    fn test_audio_config() {
        assert_eq!(FileKind::classify("adder_game.dat151.rel"), FileKind::AudioConfig);
        assert_eq!(FileKind::classify("adder_sounds.DAT54.REL"), FileKind::AudioConfig);
        assert_eq!(FileKind::classify("adder_amp.dat10.rel"), FileKind::AudioConfig);
        assert_eq!(FileKind::classify("adder.NameTable"), FileKind::AudioConfig);
    }

    #[test]
    fn test_audio_wave() {
        assert_eq!(FileKind::classify("adder.awc"), FileKind::AudioWave);
        assert_eq!(FileKind::classify("ADDER_NPC.AWC"), FileKind::AudioWave);
    }

    #[test]
    fn test_other() {
        assert_eq!(FileKind::classify("readme.txt"), FileKind::Other);
        assert_eq!(FileKind::classify("yft"), FileKind::Other);
        assert_eq!(FileKind::classify(""), FileKind::Other);
    }

    #[test]
    fn test_high_detail() {
        assert!(is_high_detail("adder_hi.yft"));
        assert!(is_high_detail("ADDER_HI.yft"));
        assert!(!is_high_detail("adder.yft"));
    }
}
