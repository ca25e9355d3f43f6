//! Vehicle metadata handling.
//!
//! - [`MetaCategory`]: the fixed set of metadata files with their root tags
//!   and manifest roles
//! - [`extract_model_names`] / [`extract_audio_name`]: regex scrapers for
//!   `vehicles.meta`
//! - [`merge_meta_files`]: splices same-category files into one

mod category;
mod extract;
mod merge;

pub use category::MetaCategory;
pub use extract::{extract_audio_name, extract_model_names, read_meta_text, VehicleIdentifiers};
pub use merge::{inner_content, merge_contents, merge_meta_files};
