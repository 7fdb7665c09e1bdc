use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use search_engine::indexer::index::InvertedIndex;
use search_engine::queryengine::run_interactive;

/// Reload a serialized inverted index and answer Boolean queries
/// interactively until `!exit`.
#[derive(Parser, Debug)]
#[command(name = "queryengine")]
struct Args {
    /// Index file written by the indexer.
    index_file: PathBuf,

    /// Directory of page artifacts, used to recover URLs for results.
    pages_dir: PathBuf,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let index = match InvertedIndex::reload_from_file(&args.index_file) {
        Ok(index) => index,
        Err(e) => {
            tracing::error!(error = %e, "failed to load index file");
            return ExitCode::FAILURE;
        }
    };

    match run_interactive(&index, &args.pages_dir, stdin().lock(), stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "query engine I/O error");
            ExitCode::FAILURE
        }
    }
}
