use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{
    BatchOptions, ConvertOptions, DEFAULT_MAPPING_FILE, DEFAULT_PATTERN, Selection,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print more diagnostics (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print fewer diagnostics
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace Papers with Code links in a document with arXiv links
    Convert {
        /// Document to convert; any text format works
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output path [default: <INPUT stem>_arxiv.<ext> beside the input]
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        common: Common,
    },
    /// Convert several documents with one mapping
    Batch {
        /// Documents to convert; glob patterns are expanded
        #[arg(value_name = "FILES", required_unless_present = "directory", conflicts_with = "directory")]
        files: Vec<PathBuf>,
        /// Convert every file in this directory matching --pattern
        #[arg(short, long)]
        directory: Option<PathBuf>,
        /// File pattern used with --directory
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,
        /// Keep going when a document fails
        #[arg(long)]
        continue_on_error: bool,
        #[command(flatten)]
        common: Common,
    },
    /// Print search links for papers that still need a manual lookup
    Search {
        /// A *_not_found.txt report or a list of Papers with Code URLs, one per line
        #[arg(value_name = "LIST")]
        list: PathBuf,
        /// Only print; don't write <LIST stem>_search_results.txt
        #[arg(long)]
        no_save: bool,
    },
}

#[derive(Args, Debug)]
pub struct Common {
    /// Papers with Code backup JSON
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_MAPPING_FILE)]
    pub json_file: PathBuf,
    /// Show what would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Command {
    pub fn convert_options(output: Option<PathBuf>, common: &Common) -> ConvertOptions {
        ConvertOptions {
            output,
            dry_run: common.dry_run,
        }
    }

    pub fn batch_options(
        files: Vec<PathBuf>,
        directory: Option<PathBuf>,
        pattern: String,
        continue_on_error: bool,
        common: &Common,
    ) -> BatchOptions {
        let selection = match directory {
            Some(dir) => Selection::Directory { dir, pattern },
            None => Selection::Files(files),
        };
        BatchOptions {
            selection,
            dry_run: common.dry_run,
            continue_on_error,
        }
    }
}
