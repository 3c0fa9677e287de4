use std::{fs, path::Path, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Stream::Stderr};

use pwc2arxiv::{
    batch,
    cli::{Cli, Command},
    config::BACKUP_SOURCE,
    convert,
    error::DataError,
    logging,
    mapping::UrlMapping,
    report, summary,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    logging::init(logging::level_from_flags(args.verbose, args.quiet));

    match args.command {
        Command::Convert {
            input,
            output,
            common,
        } => {
            let opts = Command::convert_options(output, &common);
            if !input.exists() {
                anyhow::bail!("input file not found: {}", input.display());
            }
            let mapping = load_mapping(&common.json_file)?;
            let outcome = convert::convert_file(&input, &mapping, &opts)?;
            summary::print_file_summary(&outcome);
        }
        Command::Batch {
            files,
            directory,
            pattern,
            continue_on_error,
            common,
        } => {
            let opts =
                Command::batch_options(files, directory, pattern, continue_on_error, &common);
            let files = batch::collect_files(&opts.selection)?;
            let mapping = load_mapping(&common.json_file)?;
            eprintln!("Found {} files to process", files.len());
            if opts.dry_run {
                eprintln!("Dry run: no files will be modified");
            }
            let outcome = batch::run(&files, &mapping, &opts);
            summary::print_batch_summary(&outcome);
            if !outcome.all_succeeded() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Search { list, no_save } => search(&list, no_save)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn load_mapping(path: &Path) -> anyhow::Result<UrlMapping> {
    let mapping = UrlMapping::load(path).inspect_err(|e| {
        if let DataError::SourceMissing { .. } = e {
            eprintln!(
                "{} download the backup file from {BACKUP_SOURCE}",
                "hint:".if_supports_color(Stderr, |t| t.yellow())
            );
        }
    })?;
    eprintln!("Loaded {} URL mappings", mapping.len());
    Ok(mapping)
}

fn search(list: &Path, no_save: bool) -> anyhow::Result<()> {
    let text = fs::read_to_string(list)
        .with_context(|| format!("failed to read URL list {}", list.display()))?;
    let urls = report::read_url_list(&text);
    if urls.is_empty() {
        eprintln!("No Papers with Code URLs found in {}", list.display());
        return Ok(());
    }

    let results = report::render_search_results(&urls);
    print!("{results}");
    if !no_save {
        let path = report::search_results_path(list);
        fs::write(&path, &results)
            .with_context(|| format!("failed to write search results {}", path.display()))?;
        eprintln!("Results saved to: {}", path.display());
    }
    eprintln!("{} papers need a manual lookup", urls.len());
    Ok(())
}
