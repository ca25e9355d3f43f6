//! `fxmanifest.lua` generation.

use std::fmt::Write as _;

use super::layout::{
    ResourceLayout, AUDIO_CONFIG_DIR, DATA_DIR, NAMES_FILE, SFX_DIR, WAVEPACK_PREFIX,
};
use crate::error::ConvertResult;
use crate::meta::MetaCategory;

/// Audio config file suffixes and the `data_file` role each declares.
const AUDIO_ROLES: [(&str, &str); 3] = [
    (".dat151.rel", "AUDIO_GAMEDATA"),
    (".dat54.rel", "AUDIO_SOUNDDATA"),
    (".dat10.rel", "AUDIO_SYNTHDATA"),
];

/// Role declared for every waveform pack folder.
const WAVEPACK_ROLE: &str = "AUDIO_WAVEPACK";

/// The `data_file` role of an audio config file, if it declares one.
pub fn audio_role(file_name: &str) -> Option<&'static str> {
    AUDIO_ROLES
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map(|(_, role)| *role)
}

/// Everything the manifest declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Metadata categories written to `data/`.
    pub meta: Vec<MetaCategory>,
    /// Audio config file names copied to `audioconfig/`, sorted.
    pub audio_configs: Vec<String>,
    /// Waveform pack names (without the `dlc_` prefix), sorted.
    pub wavepacks: Vec<String>,
}

impl Manifest {
    /// Build a manifest from what one conversion wrote.
    ///
    /// Categories are listed in [`MetaCategory::ALL`] order regardless of
    /// the order they were written in. Audio files and packs already in the
    /// output directory from earlier runs are not declared.
    pub fn new(
        meta: &[MetaCategory],
        audio_configs: impl IntoIterator<Item = String>,
        wavepacks: impl IntoIterator<Item = String>,
    ) -> Self {
        let meta = MetaCategory::ALL
            .into_iter()
            .filter(|category| meta.contains(category))
            .collect();

        let mut audio_configs: Vec<String> = audio_configs.into_iter().collect();
        audio_configs.sort();
        audio_configs.dedup();
        let mut wavepacks: Vec<String> = wavepacks.into_iter().collect();
        wavepacks.sort();
        wavepacks.dedup();

        Self {
            meta,
            audio_configs,
            wavepacks,
        }
    }

    /// Render the manifest text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("fx_version 'cerulean'\ngame 'gta5'\n\nfiles {\n");
        for category in &self.meta {
            let _ = writeln!(out, "    '{}/{}',", DATA_DIR, category.file_name());
        }
        let _ = writeln!(out, "    '{}/*.rel',", AUDIO_CONFIG_DIR);
        let _ = writeln!(out, "    '{}/**/*.awc'", SFX_DIR);
        out.push_str("}\n\n");

        for category in &self.meta {
            if let Some(role) = category.manifest_role() {
                let _ = writeln!(
                    out,
                    "data_file '{}' '{}/{}'",
                    role,
                    DATA_DIR,
                    category.file_name()
                );
            }
        }

        for name in &self.audio_configs {
            if let Some(role) = audio_role(name) {
                let _ = writeln!(out, "data_file '{}' '{}/{}'", role, AUDIO_CONFIG_DIR, name);
            }
        }

        for pack in &self.wavepacks {
            let _ = writeln!(
                out,
                "data_file '{}' '{}/{}{}'",
                WAVEPACK_ROLE, SFX_DIR, WAVEPACK_PREFIX, pack
            );
        }

        let _ = writeln!(out, "\nclient_script '{}'", NAMES_FILE);
        out
    }

    /// Render and write `fxmanifest.lua` into the resource.
    pub fn write(&self, layout: &ResourceLayout) -> ConvertResult<()> {
        layout.write_manifest(&self.render())
    }
}
