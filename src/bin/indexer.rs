use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use search_engine::indexer::index::InvertedIndex;
use search_engine::indexer::build_index;
use search_engine::limits::Limits;

/// Build an inverted index from an artifact directory. In its four-argument
/// form, also exercises the reload/re-serialize round trip for debugging.
#[derive(Parser, Debug)]
#[command(name = "indexer")]
struct Args {
    /// Directory of page artifacts written by the crawler.
    target_dir: PathBuf,

    /// Path to write the built index to.
    index_file: PathBuf,

    /// Debug round-trip: reload this index file...
    load_file: Option<PathBuf>,

    /// ...and re-serialize it here. Must be given together with `load_file`.
    rewrite_file: Option<PathBuf>,
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

    if args.load_file.is_some() != args.rewrite_file.is_some() {
        tracing::error!("load_file and rewrite_file must be given together");
        return ExitCode::FAILURE;
    }

    if !args.target_dir.is_dir() {
        tracing::error!(dir = %args.target_dir.display(), "target directory does not exist");
        return ExitCode::FAILURE;
    }

    let limits = Limits::default();

    let (index, stats) = match build_index(&args.target_dir, limits.word_len) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "indexing failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = index.write_to_file(&args.index_file) {
        tracing::error!(error = %e, "failed to write index file");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        documents = stats.documents_indexed,
        words = index.word_count(),
        "index written to {}",
        args.index_file.display()
    );

    if let (Some(load_file), Some(rewrite_file)) = (args.load_file, args.rewrite_file) {
        let reloaded = match InvertedIndex::reload_from_file(&load_file) {
            Ok(index) => index,
            Err(e) => {
                tracing::error!(error = %e, "failed to reload index file");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = reloaded.write_to_file(&rewrite_file) {
            tracing::error!(error = %e, "failed to rewrite reloaded index");
            return ExitCode::FAILURE;
        }
        tracing::info!(
            "reloaded {} and rewrote it to {}",
            load_file.display(),
            rewrite_file.display()
        );
    }

    ExitCode::SUCCESS
}
