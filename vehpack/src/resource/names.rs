//! `vehicle_names.lua` generation.
//!
//! FiveM shows the raw model identifier for vehicles without a text entry;
//! the script registers each model name as its own display name.

use std::collections::BTreeSet;

use super::layout::ResourceLayout;
use crate::error::ConvertResult;

/// Render one `AddTextEntry` line per model name, in sorted order.
///
/// Quotes and backslashes in names are escaped for Lua.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use vehpack::resource::render_vehicle_names;
///
/// let names: BTreeSet<String> = ["comet", "adder"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(
///     render_vehicle_names(&names),
///     "AddTextEntry('adder', 'adder')\nAddTextEntry('comet', 'comet')\n"
/// );
/// ```
pub fn render_vehicle_names(names: &BTreeSet<String>) -> String {
    names
        .iter()
        .map(|name| {
            let quoted = lua_escape(name);
            format!("AddTextEntry('{}', '{}')\n", quoted, quoted)
        })
        .collect()
}

/// Escape `name` for use inside a single-quoted Lua string.
fn lua_escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Write `vehicle_names.lua` into the resource.
pub fn write_vehicle_names(layout: &ResourceLayout, names: &BTreeSet<String>) -> ConvertResult<()> {
    layout.write_names(&render_vehicle_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_sorted_and_deduplicated() {
        let text = render_vehicle_names(&set(&["zentorno", "adder", "adder"]));
        assert_eq!(
            text,
            "AddTextEntry('adder', 'adder')\nAddTextEntry('zentorno', 'zentorno')\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_vehicle_names(&BTreeSet::new()), "");
    }

    #[test]
    fn test_render_escapes_lua_quotes() {
        let text = render_vehicle_names(&set(&["o'neil", "back\\slash"]));
        assert_eq!(
            text,
            concat!(
                "AddTextEntry('back\\\\slash', 'back\\\\slash')\n",
                "AddTextEntry('o\\'neil', 'o\\'neil')\n",
            )
        );
    }

    #[test]
    fn test_write_vehicle_names() {
        let temp = TempDir::new().unwrap();
        let layout = ResourceLayout::create(temp.path()).unwrap();

        write_vehicle_names(&layout, &set(&["adder"])).unwrap();

        let content = std::fs::read_to_string(layout.names_path()).unwrap();
        assert_eq!(content, "AddTextEntry('adder', 'adder')\n");
    }
}
