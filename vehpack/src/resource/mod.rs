//! FiveM resource assembly.
//!
//! Turns scanned mod folders into a resource directory:
//!
//! 1. Scan every mod folder ([`crate::scan::ModScan`])
//! 2. Create the fixed layout ([`ResourceLayout`])
//! 3. Copy stream, audio and metadata files, merging metadata in combined mode
//! 4. Write `vehicle_names.lua` and `fxmanifest.lua`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vehpack::resource::{convert_single, resource_name_for};
//!
//! let source = Path::new("/mods/adder");
//! let name = resource_name_for(source)?;
//! let summary = convert_single(source, &Path::new("/resources").join(&name))?;
//!
//! println!("Streamed {} files", summary.stream_files.len());
//! ```

mod assembler;
mod layout;
mod manifest;
mod names;
mod summary;

pub use assembler::{
    convert_combined, convert_single, resource_name_for, stream_subdirs, validate_resource_name,
    FALLBACK_RESOURCE_NAME,
};
pub use layout::{
    ResourceLayout, StreamCopy, AUDIO_CONFIG_DIR, DATA_DIR, MANIFEST_FILE, NAMES_FILE, SFX_DIR,
    STREAM_DIR, WAVEPACK_PREFIX,
};
pub use manifest::{audio_role, Manifest};
pub use names::{render_vehicle_names, write_vehicle_names};
pub use summary::{ConversionMode, ConversionSummary};
