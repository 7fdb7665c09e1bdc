//! Fixed parameters shared by the crawler, indexer and query engine.
//!
//! Grouped into a single `Limits` struct rather than scattered `const`s
//! so that a binary can override one for testing without touching the
//! others.

/// Longest URL the crawler will admit to the frontier.
pub const MAX_URL_LEN: usize = 2049;

/// Longest word the indexer will record; longer words are truncated.
pub const WORD_LEN: usize = 1000;

/// Hash-table slot count used by the djb2-family hash in [`crate::indexer::index`].
pub const MAX_SLOTS: usize = 10_000;

/// Politeness delay between two fetches issued by the crawler, in seconds.
pub const INTERVAL_PER_FETCH_SECS: u64 = 1;

/// Upper bound on URLs admitted from a single page.
pub const MAX_URLS_PER_PAGE: usize = 1000;

/// Upper bound on crawl depth accepted by the CLI.
pub const MAX_DEPTH: u32 = 4;

/// Total fetch attempts (including the first) before a URL is given up on.
pub const FETCH_RETRIES: u32 = 3;

/// Runtime-tunable subset of the fixed parameters above.
///
/// A `Limits` is threaded explicitly through the crawler and indexer
/// constructors rather than read from globals, so a caller can override
/// one knob (say, for a test) without reaching for process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_url_len: usize,
    pub word_len: usize,
    pub max_slots: usize,
    pub interval_per_fetch_secs: u64,
    pub max_urls_per_page: usize,
    pub fetch_retries: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_url_len: MAX_URL_LEN,
            word_len: WORD_LEN,
            max_slots: MAX_SLOTS,
            interval_per_fetch_secs: INTERVAL_PER_FETCH_SECS,
            max_urls_per_page: MAX_URLS_PER_PAGE,
            fetch_retries: FETCH_RETRIES,
        }
    }
}
