//! Mod folder discovery.
//!
//! Walks a mod folder recursively in file-name order and classifies every
//! file it finds. Discovery never copies anything; the resource writer
//! decides what to do with each [`ScannedFile`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::kind::{is_high_detail, FileKind};
use crate::error::{ConvertError, ConvertResult};
use crate::meta::{MetaCategory, VehicleIdentifiers};

/// Model name used when no `.yft` asset can name the vehicle.
pub const UNKNOWN_MODEL_NAME: &str = "unknown_model";

/// A classified file inside a mod folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name component.
    pub file_name: String,
    /// Classification result.
    pub kind: FileKind,
}

/// Identifiers gathered from every `vehicles.meta` in a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModIdentifiers {
    /// Model names in discovery order, duplicates removed.
    pub model_names: Vec<String>,
    /// First audio name hash found.
    pub audio_name: Option<String>,
    /// Number of `vehicles.meta` files that could not be read.
    pub unreadable: usize,
}

impl ModIdentifiers {
    fn absorb(&mut self, ids: VehicleIdentifiers) {
        for name in ids.model_names {
            if !name.is_empty() && !self.model_names.contains(&name) {
                self.model_names.push(name);
            }
        }
        if self.audio_name.is_none() {
            self.audio_name = ids.audio_name;
        }
    }
}

/// The classified contents of one mod folder.
#[derive(Debug, Clone)]
pub struct ModScan {
    root: PathBuf,
    files: Vec<ScannedFile>,
    walk_errors: usize,
}

impl ModScan {
    /// Walk `root` and classify every file.
    ///
    /// Entries that cannot be read are logged and skipped. Fails only when
    /// `root` itself is missing or is not a directory.
    pub fn scan(root: &Path) -> ConvertResult<Self> {
        if !root.exists() {
            return Err(ConvertError::SourceNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ConvertError::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();
        let mut walk_errors = 0;

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                    walk_errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            let kind = FileKind::classify(&file_name);
            files.push(ScannedFile {
                path: entry.into_path(),
                file_name,
                kind,
            });
        }

        debug!(
            root = %root.display(),
            files = files.len(),
            walk_errors,
            "Mod folder scanned"
        );

        Ok(Self {
            root: root.to_path_buf(),
            files,
            walk_errors,
        })
    }

    /// The scanned folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All files in walk order.
    pub fn files(&self) -> &[ScannedFile] {
        &self.files
    }

    /// Number of entries skipped because they could not be read.
    pub fn walk_errors(&self) -> usize {
        self.walk_errors
    }

    /// Files of the given kind, in walk order.
    pub fn files_of(&self, kind: FileKind) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    /// Paths of metadata files of one category, in walk order.
    pub fn meta_paths(&self, category: MetaCategory) -> Vec<PathBuf> {
        self.files_of(FileKind::Meta(category))
            .map(|f| f.path.clone())
            .collect()
    }

    /// Read model and audio names from every `vehicles.meta`.
    ///
    /// Unreadable files are logged and counted, never fatal.
    pub fn identifiers(&self) -> ModIdentifiers {
        let mut ids = ModIdentifiers::default();

        for file in self.files_of(FileKind::Meta(MetaCategory::Vehicles)) {
            match VehicleIdentifiers::from_file(&file.path) {
                Ok(found) => {
                    debug!(
                        path = %file.path.display(),
                        models = found.model_names.len(),
                        audio = ?found.audio_name,
                        "Parsed vehicle definitions"
                    );
                    ids.absorb(found);
                }
                Err(e) => {
                    warn!(error = %e, "Error parsing model or audio name");
                    ids.unreadable += 1;
                }
            }
        }

        ids
    }

    /// Name derived from the first non high-detail `.yft` asset.
    ///
    /// Returns [`UNKNOWN_MODEL_NAME`] when there is none.
    pub fn fallback_model_name(&self) -> String {
        self.files_of(FileKind::Stream)
            .map(|f| Path::new(&f.file_name))
            .find(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("yft"))
                    && !is_high_detail(&p.to_string_lossy())
            })
            .and_then(|p| p.file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| UNKNOWN_MODEL_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_nonexistent_root() {
        let err = ModScan::scan(Path::new("/nonexistent/mod")).unwrap_err();
        assert!(matches!(err, ConvertError::SourceNotFound(_)));
    }

    #[test]
    fn test_scan_file_root() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "adder.yft", "x");
        let err = ModScan::scan(&temp.path().join("adder.yft")).unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_classifies_nested_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "stream/adder.yft", "x");
        write(temp.path(), "stream/sub/adder.ytd", "x");
        write(temp.path(), "data/handling.meta", "x");
        write(temp.path(), "audio/adder_game.dat151.rel", "x");
        write(temp.path(), "audio/sfx/adder.awc", "x");
        write(temp.path(), "readme.txt", "x");

        let scan = ModScan::scan(temp.path()).unwrap();
        assert_eq!(scan.files().len(), 6);
        assert_eq!(scan.files_of(FileKind::Stream).count(), 2);
        assert_eq!(scan.files_of(FileKind::AudioConfig).count(), 1);
        assert_eq!(scan.files_of(FileKind::AudioWave).count(), 1);
        assert_eq!(scan.files_of(FileKind::Other).count(), 1);
        assert_eq!(scan.meta_paths(MetaCategory::Handling).len(), 1);
        assert!(scan.meta_paths(MetaCategory::Colors).is_empty());
        assert_eq!(scan.walk_errors(), 0);
    }

    #[test]
    fn test_scan_order_is_sorted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "c.yft", "x");
        write(temp.path(), "a.yft", "x");
        write(temp.path(), "b.yft", "x");

        let scan = ModScan::scan(temp.path()).unwrap();
        let names: Vec<_> = scan.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.yft", "b.yft", "c.yft"]);
    }

    #[test]
    fn test_identifiers_across_files() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "a/vehicles.meta",
            "<modelName>adder</modelName><audioNameHash>ADDER</audioNameHash>",
        );
        write(
            temp.path(),
            "b/vehicles.meta",
            "<modelName>comet</modelName><modelName>adder</modelName><audioNameHash>comet</audioNameHash>",
        );

        let scan = ModScan::scan(temp.path()).unwrap();
        let ids = scan.identifiers();
        assert_eq!(ids.model_names, vec!["adder", "comet"]);
        assert_eq!(ids.audio_name.as_deref(), Some("adder"));
        assert_eq!(ids.unreadable, 0);
    }

    #[test]
    fn test_identifiers_skip_unreadable_file() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("a").join("vehicles.meta");
        std::fs::create_dir_all(bad.parent().unwrap()).unwrap();
        std::fs::write(&bad, [0xffu8, 0xfe, 0xfd]).unwrap();
        write(temp.path(), "b/vehicles.meta", "<modelName>comet</modelName>");

        let ids = ModScan::scan(temp.path()).unwrap().identifiers();
        assert_eq!(ids.model_names, vec!["comet"]);
        assert_eq!(ids.unreadable, 1);
    }

    #[test]
    fn test_fallback_skips_high_detail() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "adder_hi.yft", "x");
        write(temp.path(), "adder.ytd", "x");
        write(temp.path(), "zentorno.yft", "x");

        let scan = ModScan::scan(temp.path()).unwrap();
        assert_eq!(scan.fallback_model_name(), "zentorno");
    }

    #[test]
    fn test_fallback_unknown() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "adder_hi.yft", "x");
        write(temp.path(), "adder.ytd", "x");

        let scan = ModScan::scan(temp.path()).unwrap();
        assert_eq!(scan.fallback_model_name(), UNKNOWN_MODEL_NAME);
    }
}
