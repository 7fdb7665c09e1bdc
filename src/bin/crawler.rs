use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use search_engine::crawler::fetcher::Fetcher;
use search_engine::crawler::run_crawl;
use search_engine::limits::{Limits, MAX_DEPTH};

/// Breadth-first crawl of a single URL prefix, writing one numbered page
/// artifact per fetched page.
#[derive(Parser, Debug)]
#[command(name = "crawler")]
struct Args {
    /// Seed URL to start crawling from.
    seed_url: String,

    /// Directory to write page artifacts into. Must already exist.
    target_dir: PathBuf,

    /// Maximum crawl depth (0-4).
    depth: u32,

    /// URL prefix a discovered URL must match to be admitted. Defaults to
    /// the seed URL's scheme + host.
    #[arg(long)]
    prefix: Option<String>,
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

    if args.depth > MAX_DEPTH {
        tracing::error!(depth = args.depth, max = MAX_DEPTH, "depth out of range");
        return ExitCode::FAILURE;
    }

    if !args.target_dir.is_dir() {
        tracing::error!(dir = %args.target_dir.display(), "target directory does not exist");
        return ExitCode::FAILURE;
    }

    let prefix = match args.prefix {
        Some(p) => p,
        None => match Url::parse(&args.seed_url) {
            Ok(url) => format!(
                "{}://{}",
                url.scheme(),
                url.host_str().unwrap_or_default()
            ),
            Err(e) => {
                tracing::error!(seed_url = %args.seed_url, error = %e, "invalid seed URL");
                return ExitCode::FAILURE;
            }
        },
    };

    let limits = Limits::default();
    let fetcher = Fetcher::new(limits.fetch_retries, 30, "search-engine-crawler/0.1");

    match run_crawl(
        &args.seed_url,
        &args.target_dir,
        args.depth,
        &prefix,
        &limits,
        &fetcher,
    ) {
        Ok(stats) => {
            tracing::info!(
                pages_written = stats.pages_written,
                pages_failed = stats.pages_failed,
                "crawl complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "crawl failed");
            ExitCode::FAILURE
        }
    }
}
