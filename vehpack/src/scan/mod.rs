//! Mod folder scanning and file classification.
//!
//! This module provides:
//! - [`FileKind`]: pure classification of a file by its name
//! - [`ModScan`]: recursive discovery of a mod folder, plus name extraction
//!   from the vehicle definitions it contains

mod discovery;
mod kind;

pub use discovery::{ModIdentifiers, ModScan, ScannedFile, UNKNOWN_MODEL_NAME};
pub use kind::{is_high_detail, FileKind, STREAM_EXTENSIONS};
