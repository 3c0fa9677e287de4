use std::path::Path;

use owo_colors::{OwoColorize, Stream::Stderr};

use crate::{batch::BatchOutcome, convert::FileOutcome};

/// Per-document summary, printed to stderr so stdout stays clean.
pub fn print_file_summary(outcome: &FileOutcome) {
    let res = &outcome.result;
    eprintln!(
        "{} {}",
        "Conversion summary:".if_supports_color(Stderr, |t| t.bold()),
        outcome.input.display()
    );
    eprintln!("- Total URLs found: {}", res.discovered());
    match res.conversion_rate() {
        Some(rate) => eprintln!("- Conversion rate: {rate:.1}%"),
        None => eprintln!("- No URLs found"),
    }
    eprintln!(
        "{}  {}",
        format!("✓ {} converted", res.replaced).if_supports_color(Stderr, |t| t.green()),
        format!("✗ {} need manual lookup", res.unmatched.len())
            .if_supports_color(Stderr, |t| t.red()),
    );
    for url in &res.unmatched {
        eprintln!("  {} {url}", "✗".if_supports_color(Stderr, |t| t.red()));
    }

    match (&outcome.output, &outcome.report) {
        (None, _) => eprintln!("Dry run: no files were modified."),
        (Some(output), report) => {
            eprintln!("Converted file saved as: {}", output.display());
            if let Some(report) = report {
                print_saved_report(report);
            }
        }
    }
}

fn print_saved_report(report: &Path) {
    eprintln!(
        "{} URLs requiring manual lookup saved to: {}",
        "⚠".if_supports_color(Stderr, |t| t.yellow()),
        report.display()
    );
}

pub fn print_batch_summary(outcome: &BatchOutcome) {
    eprintln!();
    eprintln!("{}", "Batch conversion summary".if_supports_color(Stderr, |t| t.bold()));
    eprintln!("- Total files processed: {}", outcome.successful + outcome.failed);
    eprintln!(
        "{}  {}",
        format!("✓ {} succeeded", outcome.successful).if_supports_color(Stderr, |t| t.green()),
        format!("✗ {} failed", outcome.failed).if_supports_color(Stderr, |t| t.red()),
    );
    if outcome.stopped_early {
        eprintln!("Stopped after the first failure. Use --continue-on-error to process the rest.");
    }
}
