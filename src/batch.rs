use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::{
    config::{BatchOptions, ConvertOptions, Selection, is_converted_output},
    convert::convert_file,
    mapping::UrlMapping,
    summary,
};

/// Tally of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub successful: usize,
    pub failed: usize,
    /// The run stopped at a failure before every file was processed.
    pub stopped_early: bool,
}

impl BatchOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

fn is_pattern(path: &Path) -> bool {
    path.to_string_lossy().contains(['*', '?'])
}

/// Files matching `pattern`, minus the `*_arxiv` outputs of earlier runs.
fn expand(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob(pattern).with_context(|| format!("invalid glob pattern {pattern}"))? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if is_converted_output(&path) {
            debug!(file = %path.display(), "skipping output of an earlier run");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Turn a selection into the list of documents to convert.
pub fn collect_files(selection: &Selection) -> anyhow::Result<Vec<PathBuf>> {
    let files = match selection {
        Selection::Directory { dir, pattern } => {
            if !dir.is_dir() {
                bail!("directory not found: {}", dir.display());
            }
            let mut files = expand(&dir.join(pattern).to_string_lossy())?;
            files.sort();
            if files.is_empty() {
                bail!("no files matching '{pattern}' found in {}", dir.display());
            }
            files
        }
        Selection::Files(paths) => {
            let mut files = Vec::new();
            for path in paths {
                if is_pattern(path) {
                    files.extend(expand(&path.to_string_lossy())?);
                } else {
                    files.push(path.clone());
                }
            }
            let missing: Vec<_> = files.iter().filter(|f| !f.exists()).collect();
            if !missing.is_empty() {
                let list = missing
                    .iter()
                    .map(|f| format!("  - {}", f.display()))
                    .collect::<Vec<_>>()
                    .join("\n");
                bail!("the following files were not found:\n{list}");
            }
            files
        }
    };
    if files.is_empty() {
        bail!("no files to process");
    }
    Ok(files)
}

/// Convert every file with the same mapping, writing next to each input.
pub fn run(files: &[PathBuf], mapping: &UrlMapping, opts: &BatchOptions) -> BatchOutcome {
    let convert_opts = ConvertOptions {
        output: None,
        dry_run: opts.dry_run,
    };
    let bar = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("=> "));
    }

    let mut outcome = BatchOutcome::default();
    for (i, file) in files.iter().enumerate() {
        bar.set_message(file.display().to_string());
        match convert_file(file, mapping, &convert_opts) {
            Ok(done) => {
                outcome.successful += 1;
                bar.suspend(|| {
                    eprintln!();
                    summary::print_file_summary(&done);
                });
            }
            Err(e) => {
                outcome.failed += 1;
                warn!(file = %file.display(), "conversion failed: {e:#}");
                if !opts.continue_on_error {
                    outcome.stopped_early = i + 1 < files.len();
                    break;
                }
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    info!(
        successful = outcome.successful,
        failed = outcome.failed,
        "batch finished"
    );
    outcome
}
