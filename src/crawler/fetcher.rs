use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Result of a successful HTTP fetch.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status_code: u16,
    pub body: Vec<u8>,
    pub final_url: String,
}

/// Single-threaded, retrying HTTP fetcher.
///
/// The crawler issues one fetch at a time — there is no concurrent
/// fetching to rate-limit — so this only needs a single shared client and
/// a politeness sleep between calls, not the per-domain limiter a
/// multi-origin crawler would need.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    retries: u32,
}

impl Fetcher {
    /// Create a new fetcher.
    ///
    /// - `retries`: total attempts per URL before giving up (the
    ///   `FETCH_RETRIES` limit, including the first attempt)
    /// - `timeout_secs`: per-request timeout in seconds
    /// - `user_agent`: custom User-Agent header string
    pub fn new(retries: u32, timeout_secs: u64, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client");

        Fetcher {
            client,
            retries: retries.max(1),
        }
    }

    /// Fetch a URL, retrying on transport failure up to `retries` total
    /// attempts. Returns the last error if every attempt fails.
    pub fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let mut last_err = None;
        for attempt in 1..=self.retries {
            match self.fetch_once(url) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::warn!(url, attempt, retries = self.retries, error = %e, "fetch attempt failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.expect("retries is always >= 1"))
    }

    fn fetch_once(&self, url: &str) -> Result<FetchResult, FetchError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        // Read exactly the response body's bytes — no re-encoding, so the
        // artifact on disk is the fetched body length, byte for byte.
        let body = response.bytes()?.to_vec();

        Ok(FetchResult {
            status_code,
            body,
            final_url,
        })
    }
}

/// Sleep for the configured politeness interval between fetches.
pub fn politeness_sleep(seconds: u64) {
    if seconds > 0 {
        thread::sleep(Duration::from_secs(seconds));
    }
}
