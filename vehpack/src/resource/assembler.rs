//! Resource assembly for single and combined conversions.
//!
//! Both modes scan their mod folders first and only then touch the output
//! directory, so a missing source never leaves a half-built resource.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use super::layout::{is_folder_name, ResourceLayout, StreamCopy};
use super::manifest::Manifest;
use super::names::write_vehicle_names;
use super::summary::{ConversionMode, ConversionSummary};
use crate::error::{ConvertError, ConvertResult};
use crate::meta::{merge_meta_files, MetaCategory, VehicleIdentifiers};
use crate::scan::{FileKind, ModIdentifiers, ModScan, ScannedFile, UNKNOWN_MODEL_NAME};

/// Resource name used when a mod declares no model name.
pub const FALLBACK_RESOURCE_NAME: &str = "convertedcar";

/// Stream subfolder name used when a mod folder path has no final component.
const FALLBACK_STREAM_SUBDIR: &str = "vehicle";

/// Convert one mod folder into a resource at `output_dir`.
///
/// Stream assets go flat into `stream/`; the first asset of a given name
/// wins. Metadata files are copied to `data/`. Model names come from every
/// `vehicles.meta` in the folder, with a fallback derived from the first
/// non high-detail `.yft` asset.
pub fn convert_single(mod_folder: &Path, output_dir: &Path) -> ConvertResult<ConversionSummary> {
    let scan = ModScan::scan(mod_folder)?;
    let ids = scan.identifiers();
    let pack = wavepack_name(&ids, &scan);

    info!(
        source = %mod_folder.display(),
        output = %output_dir.display(),
        files = scan.files().len(),
        "Converting vehicle mod"
    );

    let mut assembly = Assembly::start(ConversionMode::Single, output_dir)?;
    assembly.summary.source_count = 1;
    assembly.summary.unreadable_meta = ids.unreadable;

    for file in scan.files() {
        match file.kind {
            FileKind::Meta(category) => {
                assembly.layout.copy_meta(&file.path, category)?;
                assembly.mark_written(category);
            }
            _ => assembly.place(file, None, &pack)?,
        }
    }

    assembly.summary.model_names.extend(ids.model_names);
    if assembly.summary.model_names.is_empty() {
        assembly.apply_fallback_name(scan.fallback_model_name());
    }

    assembly.finish()
}

/// Convert several mod folders into one combined resource at `output_dir`.
///
/// Each folder's stream assets go to `stream/<folder name>/`. Metadata
/// categories with one contributing file are copied; categories with more
/// are merged in folder order. Model names are aggregated across all
/// vehicle definition files.
pub fn convert_combined(
    mod_folders: &[PathBuf],
    output_dir: &Path,
) -> ConvertResult<ConversionSummary> {
    if mod_folders.is_empty() {
        return Err(ConvertError::NoSources);
    }

    let scans = mod_folders
        .iter()
        .map(|folder| ModScan::scan(folder))
        .collect::<ConvertResult<Vec<_>>>()?;
    let subdirs = stream_subdirs(mod_folders);

    info!(
        sources = scans.len(),
        output = %output_dir.display(),
        "Building combined resource"
    );

    let mut assembly = Assembly::start(ConversionMode::Combined, output_dir)?;
    assembly.summary.source_count = scans.len();

    let mut meta_paths: BTreeMap<MetaCategory, Vec<PathBuf>> = BTreeMap::new();

    for (scan, subdir) in scans.iter().zip(&subdirs) {
        let ids = scan.identifiers();
        let pack = wavepack_name(&ids, scan);
        debug!(
            source = %scan.root().display(),
            subdir = %subdir,
            models = ids.model_names.len(),
            "Placing mod folder"
        );

        assembly.summary.unreadable_meta += ids.unreadable;
        assembly.summary.model_names.extend(ids.model_names);

        for file in scan.files() {
            match file.kind {
                FileKind::Meta(category) => {
                    meta_paths.entry(category).or_default().push(file.path.clone());
                }
                _ => assembly.place(file, Some(subdir.as_str()), &pack)?,
            }
        }
    }

    for (category, paths) in &meta_paths {
        if let [only] = paths.as_slice() {
            assembly.layout.copy_meta(only, *category)?;
        } else {
            let merged = merge_meta_files(*category, paths);
            assembly.layout.write_meta(*category, &merged)?;
            assembly.summary.merged.push(*category);
            info!(category = %category, files = paths.len(), "Merged metadata");
        }
        assembly.mark_written(*category);
    }

    if assembly.summary.model_names.is_empty() {
        let fallback = scans
            .iter()
            .map(ModScan::fallback_model_name)
            .find(|name| name != UNKNOWN_MODEL_NAME)
            .unwrap_or_else(|| UNKNOWN_MODEL_NAME.to_string());
        assembly.apply_fallback_name(fallback);
    }

    assembly.finish()
}

/// Pick the resource folder name for a single conversion.
///
/// Uses the first model name of the first readable `vehicles.meta` that
/// declares one usable as a folder name, or [`FALLBACK_RESOURCE_NAME`].
pub fn resource_name_for(mod_folder: &Path) -> ConvertResult<String> {
    let scan = ModScan::scan(mod_folder)?;

    for file in scan.files_of(FileKind::Meta(MetaCategory::Vehicles)) {
        match VehicleIdentifiers::from_file(&file.path) {
            Ok(ids) => {
                for name in ids.model_names {
                    if is_folder_name(&name) {
                        return Ok(name);
                    }
                    warn!(model = %name, "Model name cannot be used as a folder name");
                }
            }
            Err(e) => warn!(error = %e, "Error reading vehicles.meta"),
        }
    }

    warn!(
        source = %mod_folder.display(),
        fallback = FALLBACK_RESOURCE_NAME,
        "vehicles.meta missing or without model name"
    );
    Ok(FALLBACK_RESOURCE_NAME.to_string())
}

/// Reject names that cannot be used as a single folder component.
pub fn validate_resource_name(name: &str) -> ConvertResult<()> {
    if is_folder_name(name) {
        Ok(())
    } else {
        Err(ConvertError::InvalidResourceName(name.to_string()))
    }
}

/// Unique stream subfolder names, one per mod folder, in input order.
///
/// Repeated folder names get `_2`, `_3`, ... suffixes.
pub fn stream_subdirs(mod_folders: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();

    mod_folders
        .iter()
        .map(|folder| {
            let base = folder
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| FALLBACK_STREAM_SUBDIR.to_string());

            let mut candidate = base.clone();
            let mut n = 2;
            while !used.insert(candidate.clone()) {
                candidate = format!("{}_{}", base, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

/// Name of the `sfx/dlc_<name>` pack for a mod: audio name, else a model
/// name, else the asset fallback. Names that are not a single folder
/// component are skipped.
fn wavepack_name(ids: &ModIdentifiers, scan: &ModScan) -> String {
    let candidates = ids
        .audio_name
        .iter()
        .chain(&ids.model_names)
        .cloned()
        .chain(std::iter::once(scan.fallback_model_name()));

    for name in candidates {
        if is_folder_name(&name) {
            return name;
        }
        warn!(name = %name, "Skipping unusable wavepack name");
    }
    UNKNOWN_MODEL_NAME.to_string()
}

/// In-progress resource: the layout being written plus the running summary.
struct Assembly {
    layout: ResourceLayout,
    summary: ConversionSummary,
    written: Vec<MetaCategory>,
    audio_configs: BTreeSet<String>,
    wavepacks: BTreeSet<String>,
}

impl Assembly {
    fn start(mode: ConversionMode, output_dir: &Path) -> ConvertResult<Self> {
        Ok(Self {
            layout: ResourceLayout::create(output_dir)?,
            summary: ConversionSummary::new(mode, output_dir),
            written: Vec::new(),
            audio_configs: BTreeSet::new(),
            wavepacks: BTreeSet::new(),
        })
    }

    /// Copy a non-metadata file to its destination.
    fn place(&mut self, file: &ScannedFile, subdir: Option<&str>, pack: &str) -> ConvertResult<()> {
        match file.kind {
            FileKind::Stream => {
                match self.layout.copy_stream(&file.path, &file.file_name, subdir)? {
                    StreamCopy::Copied(relative) => self.summary.stream_files.push(relative),
                    StreamCopy::Skipped(relative) => {
                        debug!(asset = %relative, "Keeping existing stream asset");
                        self.summary.stream_skipped += 1;
                    }
                }
            }
            FileKind::AudioConfig => {
                self.layout.copy_audio_config(&file.path, &file.file_name)?;
                self.audio_configs.insert(file.file_name.clone());
                self.summary.audio_files.push(file.file_name.clone());
            }
            FileKind::AudioWave => {
                self.layout.copy_wave(&file.path, &file.file_name, pack)?;
                self.wavepacks.insert(pack.to_string());
                self.summary.audio_files.push(file.file_name.clone());
            }
            FileKind::Meta(_) | FileKind::Other => {
                trace!(path = %file.path.display(), kind = file.kind.label(), "Not placed");
            }
        }
        Ok(())
    }

    fn mark_written(&mut self, category: MetaCategory) {
        if !self.written.contains(&category) {
            self.written.push(category);
        }
    }

    fn apply_fallback_name(&mut self, name: String) {
        warn!(model = %name, "No model name found, using fallback");
        self.summary.model_names.insert(name);
        self.summary.used_fallback_name = true;
    }

    fn finish(mut self) -> ConvertResult<ConversionSummary> {
        write_vehicle_names(&self.layout, &self.summary.model_names)?;

        let manifest = Manifest::new(&self.written, self.audio_configs, self.wavepacks);
        manifest.write(&self.layout)?;
        self.summary.meta_files = manifest.meta;

        info!(
            output = %self.layout.root().display(),
            stream = self.summary.stream_files.len(),
            skipped = self.summary.stream_skipped,
            meta = self.summary.meta_files.len(),
            audio = self.summary.audio_files.len(),
            models = self.summary.model_names.len(),
            "Resource written"
        );

        Ok(self.summary)
    }
}
