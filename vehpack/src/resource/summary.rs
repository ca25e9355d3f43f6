//! Conversion result types.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::meta::MetaCategory;

/// Which conversion produced a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// One mod folder, one resource.
    Single,
    /// Several mod folders merged into one resource.
    Combined,
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Single => write!(f, "single"),
            ConversionMode::Combined => write!(f, "combined"),
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// Conversion mode.
    pub mode: ConversionMode,

    /// Resource root directory.
    pub output_dir: PathBuf,

    /// Number of mod folders that contributed.
    pub source_count: usize,

    /// Stream assets copied by this run, relative to the resource root.
    pub stream_files: Vec<String>,

    /// Stream assets skipped because the name already existed.
    pub stream_skipped: usize,

    /// Metadata categories written to `data/`, in manifest order.
    pub meta_files: Vec<MetaCategory>,

    /// Categories produced by merging more than one file.
    pub merged: Vec<MetaCategory>,

    /// Audio config and waveform file names copied.
    pub audio_files: Vec<String>,

    /// Model names registered in `vehicle_names.lua`.
    pub model_names: BTreeSet<String>,

    /// Whether the names came from the asset-file fallback.
    pub used_fallback_name: bool,

    /// Vehicle definition files that could not be read.
    pub unreadable_meta: usize,
}

impl ConversionSummary {
    /// Create an empty summary for a conversion into `output_dir`.
    pub fn new(mode: ConversionMode, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            output_dir: output_dir.into(),
            source_count: 0,
            stream_files: Vec::new(),
            stream_skipped: 0,
            meta_files: Vec::new(),
            merged: Vec::new(),
            audio_files: Vec::new(),
            model_names: BTreeSet::new(),
            used_fallback_name: false,
            unreadable_meta: 0,
        }
    }

    /// Returns true if anything was skipped or could not be read.
    pub fn has_warnings(&self) -> bool {
        self.used_fallback_name || self.unreadable_meta > 0
    }
}
