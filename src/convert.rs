use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use tracing::info;

use crate::{
    config::ConvertOptions,
    mapping::UrlMapping,
    report,
    rewriter::{self, ConversionResult},
};

/// What happened to one document.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// Where the rewritten document was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Where the manual lookup report was written, if anything was left unmatched.
    pub report: Option<PathBuf>,
    pub result: ConversionResult,
}

/// Rewrite the legacy links in `input` and write the results out.
///
/// On a dry run nothing is written. Otherwise the rewritten document goes to the configured output
/// and, when some URLs could not be resolved, a manual lookup report is written beside it.
pub fn convert_file(
    input: &Path,
    mapping: &UrlMapping,
    opts: &ConvertOptions,
) -> anyhow::Result<FileOutcome> {
    let text = match fs::read_to_string(input) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("input file not found: {}", input.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read input file {}", input.display()));
        }
    };

    let result = rewriter::convert(&text, mapping);
    info!(
        input = %input.display(),
        found = result.discovered(),
        replaced = result.replaced,
        unmatched = result.unmatched.len(),
        "converted"
    );

    if opts.dry_run {
        return Ok(FileOutcome {
            input: input.to_path_buf(),
            output: None,
            report: None,
            result,
        });
    }

    let output = opts.output_for(input);
    fs::write(&output, &result.text)
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    let report = if result.unmatched.is_empty() {
        None
    } else {
        let path = report::not_found_path(&output);
        fs::write(&path, report::render_not_found(&result.unmatched))
            .with_context(|| format!("failed to write lookup report {}", path.display()))?;
        Some(path)
    };

    Ok(FileOutcome {
        input: input.to_path_buf(),
        output: Some(output),
        report,
        result,
    })
}
