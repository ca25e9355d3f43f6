//! Merging of same-category metadata files.
//!
//! Each input contributes the text between the first opening root tag of
//! its category and the following closing tag. All contributions are
//! concatenated inside a single instance of the root tag pair:
//!
//! ```text
//! <CHandlingDataMgr>
//! ...inner block of file A...
//! ...inner block of file B...
//! </CHandlingDataMgr>
//! ```
//!
//! Inputs without the root tag pair contribute nothing.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::category::MetaCategory;
use super::extract::read_meta_text;

/// Root element patterns, indexed by `MetaCategory as usize`.
///
/// The opening tag may carry attributes; matching is case-insensitive and
/// `.` spans newlines.
fn root_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        MetaCategory::ALL
            .iter()
            .map(|category| {
                let tag = regex::escape(category.root_tag());
                Regex::new(&format!(r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>")).unwrap()
            })
            .collect()
    })
}

/// Return the trimmed text between the category's root tags, if present.
///
/// # Examples
///
/// ```
/// use vehpack::meta::{inner_content, MetaCategory};
///
/// let text = r#"<CHandlingDataMgr type="x"> <Item/> </CHandlingDataMgr>"#;
/// assert_eq!(inner_content(MetaCategory::Handling, text), Some("<Item/>"));
/// assert_eq!(inner_content(MetaCategory::Colors, text), None);
/// ```
pub fn inner_content(category: MetaCategory, text: &str) -> Option<&str> {
    root_patterns()[category as usize]
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Merge already-loaded file contents for one category.
pub fn merge_contents<S: AsRef<str>>(category: MetaCategory, contents: &[S]) -> String {
    let open = category.open_tag();
    let close = category.close_tag();
    let mut parts = Vec::with_capacity(contents.len() + 2);

    parts.push(open.as_str());
    for (index, text) in contents.iter().enumerate() {
        match inner_content(category, text.as_ref()) {
            Some(inner) => parts.push(inner),
            None => debug!(
                category = %category,
                input = index,
                "Root tag not found, input contributes nothing"
            ),
        }
    }
    parts.push(close.as_str());

    parts.join("\n")
}

/// Merge metadata files of one category, in the given order.
///
/// Unreadable files are logged and skipped; they never abort the merge.
pub fn merge_meta_files(category: MetaCategory, paths: &[PathBuf]) -> String {
    let contents: Vec<String> = paths
        .iter()
        .filter_map(|path| read_for_merge(category, path))
        .collect();

    debug!(
        category = %category,
        inputs = paths.len(),
        readable = contents.len(),
        "Merging metadata files"
    );

    merge_contents(category, &contents)
}

fn read_for_merge(category: MetaCategory, path: &Path) -> Option<String> {
    match read_meta_text(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(category = %category, error = %e, "Skipping unreadable metadata file");
            None
        }
    }
}
