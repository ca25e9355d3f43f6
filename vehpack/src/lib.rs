//! vehpack - GTA V vehicle mods to FiveM resources
//!
//! Takes extracted vehicle mod folders and assembles server-ready FiveM
//! resources: stream assets, metadata under `data/`, audio banks, a
//! `vehicle_names.lua` script and an `fxmanifest.lua`.
//!
//! # Modules
//!
//! - [`meta`]: metadata categories, pattern extraction and merging
//! - [`scan`]: mod folder discovery and file classification
//! - [`resource`]: output layout, manifest and the single/combined assemblers
//! - [`config`]: INI configuration
//! - [`history`]: recent conversions
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod meta;
pub mod resource;
pub mod scan;

pub use error::{ConvertError, ConvertResult};
pub use resource::{convert_combined, convert_single, ConversionMode, ConversionSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
