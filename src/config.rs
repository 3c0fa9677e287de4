use std::path::{Path, PathBuf};

/// File name of the Papers with Code backup, as published in `paperswithcode-data`.
pub const DEFAULT_MAPPING_FILE: &str = "links-between-papers-and-code.json";

/// Default pattern for picking documents out of a directory.
pub const DEFAULT_PATTERN: &str = "*.md";

/// Where to get the backup dataset.
pub const BACKUP_SOURCE: &str = "https://github.com/paperswithcode/paperswithcode-data";

/// Settings for converting one document.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Explicit output path. When `None` the output goes next to the input.
    pub output: Option<PathBuf>,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl ConvertOptions {
    /// Output path for `input`: the explicit one, or `<stem>_arxiv<.ext>` beside the input.
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }
}

/// Which documents a batch run covers.
#[derive(Clone, Debug)]
pub enum Selection {
    /// Explicit paths; entries containing `*` or `?` are expanded as glob patterns.
    Files(Vec<PathBuf>),
    /// Every file in `dir` matching `pattern`.
    Directory { dir: PathBuf, pattern: String },
}

/// Settings for a batch run.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub selection: Selection,
    pub dry_run: bool,
    /// Keep going after a file fails instead of stopping.
    pub continue_on_error: bool,
}

/// Appended to the file stem of a converted document.
const OUTPUT_SUFFIX: &str = "_arxiv";

pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };
    input.with_file_name(name)
}

/// Whether `path` is named like the output of an earlier conversion.
pub fn is_converted_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
