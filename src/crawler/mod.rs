pub mod fetcher;
pub mod frontier;
pub mod parser;

use std::path::Path;

use thiserror::Error;

use crate::artifact;
use crate::limits::Limits;
use fetcher::Fetcher;
use frontier::Frontier;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("seed URL fetch failed: {0}")]
    SeedFetch(#[source] fetcher::FetchError),
    #[error("failed to write artifact: {0}")]
    ArtifactIo(#[source] artifact::ArtifactError),
}

/// Summary of a completed crawl, returned for logging by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct CrawlStats {
    pub pages_written: u32,
    pub pages_failed: u32,
}

/// Breadth-first crawl of `seed_url`, writing page artifacts into `target_dir`.
///
/// Ties the frontier, fetcher and link extractor together exactly as
/// described by the BFS discipline: pop the next unvisited record, fetch
/// it (unless past `max_depth`), write an artifact, admit newly discovered
/// links at `depth + 1`, mark visited, sleep, repeat.
pub fn run_crawl(
    seed_url: &str,
    target_dir: &Path,
    max_depth: u32,
    url_prefix: &str,
    limits: &Limits,
    fetcher: &Fetcher,
) -> Result<CrawlStats, CrawlError> {
    let mut frontier = Frontier::new();
    frontier.insert(seed_url, 0);

    let mut next_doc_id: u32 = 1;
    let mut pages_written = 0;
    let mut pages_failed = 0;
    let mut first_fetch = true;

    loop {
        let Some(record) = frontier.next_unvisited() else {
            break;
        };
        let url = record.url.clone();
        let depth = record.depth;

        if depth > max_depth {
            frontier.mark_visited(&url);
            continue;
        }

        tracing::info!(url = %url, depth, doc_id = next_doc_id, "fetching");
        let fetch_result = match fetcher.fetch(&url) {
            Ok(result) => result,
            Err(e) => {
                if first_fetch {
                    return Err(CrawlError::SeedFetch(e));
                }
                tracing::warn!(url = %url, error = %e, "giving up on URL after retries");
                frontier.mark_visited(&url);
                pages_failed += 1;
                fetcher::politeness_sleep(limits.interval_per_fetch_secs);
                continue;
            }
        };
        first_fetch = false;

        let doc_id = next_doc_id;
        next_doc_id += 1;

        artifact::write_artifact(target_dir, doc_id, &fetch_result.final_url, depth, &fetch_result.body)
            .map_err(CrawlError::ArtifactIo)?;
        pages_written += 1;

        let html = String::from_utf8_lossy(&fetch_result.body);
        let discovered = parser::extract_links(&html, &fetch_result.final_url);
        for link in discovered.into_iter().take(limits.max_urls_per_page) {
            if !frontier.contains(&link)
                && parser::is_admissible(&link, url_prefix, limits.max_url_len)
            {
                frontier.insert(&link, depth + 1);
            }
        }

        frontier.mark_visited(&url);
        fetcher::politeness_sleep(limits.interval_per_fetch_secs);
    }

    Ok(CrawlStats {
        pages_written,
        pages_failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use tempfile::tempdir;

    /// A page served by the throwaway HTTP server used in these tests.
    struct Page {
        path: &'static str,
        body: &'static str,
    }

    fn respond(mut stream: TcpStream, pages: &[Page]) {
        let mut buf = [0u8; 1024];
        let n = stream.read(&mut buf).unwrap_or(0);
        let request = String::from_utf8_lossy(&buf[..n]);
        let path = request
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or("/");

        match pages.iter().find(|p| p.path == path) {
            Some(page) => {
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    page.body.len(),
                    page.body
                );
                let _ = stream.write_all(response.as_bytes());
            }
            None => {
                let response = "HTTP/1.1 404 Not Found\r\nConnection: close\r\n\r\n";
                let _ = stream.write_all(response.as_bytes());
            }
        }
    }

    /// Spin up a background thread serving `pages` over plain HTTP and
    /// return the base URL it listens on.
    fn spawn_server(pages: Vec<Page>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming().take(pages.len()) {
                if let Ok(stream) = stream {
                    respond(stream, &pages);
                }
            }
        });
        format!("http://{addr}")
    }

    use std::thread;

    #[test]
    fn depth_zero_crawl_writes_one_artifact_and_discovers_the_next_depth() {
        let dir = tempdir().unwrap();
        let base = spawn_server(vec![Page {
            path: "/index.html",
            body: r#"<a href="/a.html">a</a><a href="http://elsewhere.example/x">x</a>"#,
        }]);
        let seed = format!("{base}/index.html");

        let fetcher = Fetcher::new(1, 5, "test-agent");
        let limits = Limits {
            interval_per_fetch_secs: 0,
            ..Limits::default()
        };

        let stats = run_crawl(&seed, dir.path(), 0, &base, &limits, &fetcher).unwrap();

        assert_eq!(stats.pages_written, 1);
        assert_eq!(stats.pages_failed, 0);
        assert!(artifact::artifact_path(dir.path(), 1).exists());
        assert!(!artifact::artifact_path(dir.path(), 2).exists());
    }

    #[test]
    fn seed_fetch_failure_is_fatal() {
        let dir = tempdir().unwrap();
        let fetcher = Fetcher::new(1, 1, "test-agent");
        let limits = Limits {
            interval_per_fetch_secs: 0,
            ..Limits::default()
        };

        let result = run_crawl(
            "http://127.0.0.1:1/unreachable",
            dir.path(),
            0,
            "http://127.0.0.1:1",
            &limits,
            &fetcher,
        );
        assert!(matches!(result, Err(CrawlError::SeedFetch(_))));
    }
}
