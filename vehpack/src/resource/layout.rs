//! On-disk layout of a FiveM vehicle resource.
//!
//! ```text
//! <resource>/
//! ├── fxmanifest.lua
//! ├── vehicle_names.lua
//! ├── stream/          binary assets (optionally one subfolder per mod)
//! ├── data/            one file per metadata category
//! ├── audioconfig/     .rel files and name tables
//! └── sfx/dlc_<name>/  .awc waveform containers
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ConvertError, ConvertResult};
use crate::meta::MetaCategory;

/// Subfolder for streamed binary assets.
pub const STREAM_DIR: &str = "stream";
/// Subfolder for metadata files.
pub const DATA_DIR: &str = "data";
/// Subfolder for audio configuration files.
pub const AUDIO_CONFIG_DIR: &str = "audioconfig";
/// Subfolder for audio waveform packs.
pub const SFX_DIR: &str = "sfx";
/// Prefix of every waveform pack folder under `sfx/`.
pub const WAVEPACK_PREFIX: &str = "dlc_";
/// Generated manifest file name.
pub const MANIFEST_FILE: &str = "fxmanifest.lua";
/// Generated name registration script.
pub const NAMES_FILE: &str = "vehicle_names.lua";

/// Result of copying a stream asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamCopy {
    /// The asset was copied; holds the path relative to the resource root.
    Copied(String),
    /// An asset with the same name already existed and was kept.
    Skipped(String),
}

/// Paths and copy policy for one resource directory.
#[derive(Debug, Clone)]
pub struct ResourceLayout {
    root: PathBuf,
}

impl ResourceLayout {
    /// Create the resource root and its fixed subfolders.
    ///
    /// `sfx/` is created lazily when the first waveform pack is written.
    pub fn create(root: impl Into<PathBuf>) -> ConvertResult<Self> {
        let layout = Self { root: root.into() };
        for dir in [
            layout.root.clone(),
            layout.stream_dir(),
            layout.data_dir(),
            layout.audio_config_dir(),
        ] {
            create_dir(&dir)?;
        }
        debug!(root = %layout.root.display(), "Resource layout ready");
        Ok(layout)
    }

    /// Resource root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stream_dir(&self) -> PathBuf {
        self.root.join(STREAM_DIR)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn audio_config_dir(&self) -> PathBuf {
        self.root.join(AUDIO_CONFIG_DIR)
    }

    pub fn sfx_dir(&self) -> PathBuf {
        self.root.join(SFX_DIR)
    }

    /// Folder for waveform containers of one vehicle: `sfx/dlc_<name>`.
    pub fn wavepack_dir(&self, name: &str) -> PathBuf {
        self.sfx_dir().join(format!("{}{}", WAVEPACK_PREFIX, name))
    }

    /// Path of a category's file under `data/`.
    pub fn meta_path(&self, category: MetaCategory) -> PathBuf {
        self.data_dir().join(category.file_name())
    }

    /// Copy a stream asset unless one with the same name already exists.
    ///
    /// With `subdir`, the asset lands in `stream/<subdir>/`. The first copy
    /// of a name wins, so nested duplicates and re-runs never overwrite.
    pub fn copy_stream(
        &self,
        source: &Path,
        file_name: &str,
        subdir: Option<&str>,
    ) -> ConvertResult<StreamCopy> {
        let (dir, relative) = match subdir {
            Some(sub) => (
                self.stream_dir().join(sub),
                format!("{}/{}/{}", STREAM_DIR, sub, file_name),
            ),
            None => (self.stream_dir(), format!("{}/{}", STREAM_DIR, file_name)),
        };
        let target = dir.join(file_name);

        if target.exists() {
            trace!(target = %target.display(), "Stream asset already present");
            return Ok(StreamCopy::Skipped(relative));
        }

        create_dir(&dir)?;
        copy_file(source, &target)?;
        Ok(StreamCopy::Copied(relative))
    }

    /// Copy a metadata file to `data/`, replacing any previous copy.
    pub fn copy_meta(&self, source: &Path, category: MetaCategory) -> ConvertResult<()> {
        copy_file(source, &self.meta_path(category))
    }

    /// Write merged metadata text to `data/`.
    pub fn write_meta(&self, category: MetaCategory, content: &str) -> ConvertResult<()> {
        write_file(&self.meta_path(category), content)
    }

    /// Copy an audio configuration file to `audioconfig/`.
    pub fn copy_audio_config(&self, source: &Path, file_name: &str) -> ConvertResult<()> {
        copy_file(source, &self.audio_config_dir().join(file_name))
    }

    /// Copy a waveform container to `sfx/dlc_<pack>/`.
    ///
    /// `pack` must be a single folder name.
    pub fn copy_wave(&self, source: &Path, file_name: &str, pack: &str) -> ConvertResult<()> {
        if !is_folder_name(pack) {
            return Err(ConvertError::InvalidResourceName(pack.to_string()));
        }
        let dir = self.wavepack_dir(pack);
        create_dir(&dir)?;
        copy_file(source, &dir.join(file_name))
    }

    /// Path of the generated `fxmanifest.lua`.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path of the generated `vehicle_names.lua`.
    pub fn names_path(&self) -> PathBuf {
        self.root.join(NAMES_FILE)
    }

    pub fn write_manifest(&self, content: &str) -> ConvertResult<()> {
        write_file(&self.manifest_path(), content)
    }

    pub fn write_names(&self, content: &str) -> ConvertResult<()> {
        write_file(&self.names_path(), content)
    }
}

/// Whether `name` can be used as exactly one path component.
pub fn is_folder_name(name: &str) -> bool {
    let trimmed = name.trim();
    !(trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\']))
}

fn create_dir(path: &Path) -> ConvertResult<()> {
    fs::create_dir_all(path).map_err(|e| ConvertError::CreateDirFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_file(from: &Path, to: &Path) -> ConvertResult<()> {
    fs::copy(from, to).map_err(|e| ConvertError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;
    trace!(from = %from.display(), to = %to.display(), "Copied");
    Ok(())
}

fn write_file(path: &Path, content: &str) -> ConvertResult<()> {
    fs::write(path, content).map_err(|e| ConvertError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
