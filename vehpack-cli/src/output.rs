//! Console output for command results.

use console::style;
use vehpack::resource::{MANIFEST_FILE, NAMES_FILE};
use vehpack::ConversionSummary;

/// Line-oriented output sink.
pub trait Output {
    fn println(&self, line: &str);

    fn newline(&self) {
        self.println("");
    }

    fn header(&self, title: &str) {
        self.println(title);
        self.println(&"=".repeat(title.len()));
    }

    fn subheader(&self, title: &str) {
        self.newline();
        self.println(&format!("{}:", title));
    }

    fn indented(&self, line: &str) {
        self.println(&format!("  {}", line));
    }
}

/// Writes to stdout.
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn println(&self, line: &str) {
        println!("{}", line);
    }
}

/// Print what a conversion produced.
pub fn print_summary(out: &dyn Output, summary: &ConversionSummary) {
    out.header("Conversion Summary");
    out.println(&format!("Resource:     {}", summary.output_dir.display()));
    out.println(&format!("Mode:         {}", summary.mode));
    out.println(&format!("Mod folders:  {}", summary.source_count));
    out.println(&format!(
        "Stream files: {} copied, {} skipped",
        summary.stream_files.len(),
        summary.stream_skipped
    ));
    out.println(&format!("Audio files:  {}", summary.audio_files.len()));

    out.subheader("Metadata");
    if summary.meta_files.is_empty() {
        out.indented("(none)");
    }
    for category in &summary.meta_files {
        if summary.merged.contains(category) {
            out.indented(&format!("data/{} (merged)", category));
        } else {
            out.indented(&format!("data/{}", category));
        }
    }

    out.subheader("Vehicles");
    for name in &summary.model_names {
        out.indented(name);
    }

    if summary.has_warnings() {
        out.subheader("Warnings");
        if summary.used_fallback_name {
            out.indented("- no model name found in vehicles.meta, using asset name");
        }
        if summary.unreadable_meta > 0 {
            out.indented(&format!(
                "- {} vehicles.meta file(s) could not be read",
                summary.unreadable_meta
            ));
        }
    }

    out.newline();
    out.println(&format!(
        "{} Wrote {} and {}",
        style("Done.").green().bold(),
        MANIFEST_FILE,
        NAMES_FILE
    ));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use vehpack::meta::MetaCategory;
    use vehpack::ConversionMode;

    /// Collects lines for assertions.
    #[derive(Default)]
    pub struct BufferOutput {
        pub lines: RefCell<Vec<String>>,
    }

    impl Output for BufferOutput {
        fn println(&self, line: &str) {
            self.lines.borrow_mut().push(line.to_string());
        }
    }

    #[test]
    fn test_summary_marks_merged_categories() {
        let mut summary =
            ConversionSummary::new(ConversionMode::Combined, PathBuf::from("/res/pack"));
        summary.source_count = 2;
        summary.meta_files = vec![MetaCategory::Vehicles, MetaCategory::Handling];
        summary.merged = vec![MetaCategory::Vehicles];
        summary.model_names.insert("adder".to_string());

        let out = BufferOutput::default();
        print_summary(&out, &summary);
        let lines = out.lines.borrow();

        assert!(lines.contains(&"  data/vehicles.meta (merged)".to_string()));
        assert!(lines.contains(&"  data/handling.meta".to_string()));
        assert!(lines.contains(&"  adder".to_string()));
        assert!(!lines.iter().any(|l| l == "Warnings:"));
    }

    #[test]
    fn test_summary_reports_fallback_name() {
        let mut summary = ConversionSummary::new(ConversionMode::Single, PathBuf::from("/res/x"));
        summary.model_names.insert("sultan".to_string());
        summary.used_fallback_name = true;

        let out = BufferOutput::default();
        print_summary(&out, &summary);

        let lines = out.lines.borrow();
        assert!(lines.iter().any(|l| l == "Warnings:"));
        assert!(lines.iter().any(|l| l.contains("using asset name")));
    }
}
