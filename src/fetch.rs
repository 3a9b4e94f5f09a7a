//! HTTP fetch layer for the Google News search feed.
//!
//! The client is a trait so tests can swap in a canned response without
//! touching the network.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{Request, Response, Url};

/// Base URL of the Google News RSS search endpoint.
pub const GOOGLE_NEWS_RSS_BASE: &str = "https://news.google.com/rss/search";

/// Default search query (Korean: government subsidies OR welfare).
pub const DEFAULT_QUERY: &str = "정부지원금 OR 복지";

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Builds the search feed URL for `query`, percent-encoding it and pinning
/// language and region to Korean/Korea.
pub fn search_feed_url(query: &str) -> Result<Url> {
    Ok(Url::parse_with_params(
        GOOGLE_NEWS_RSS_BASE,
        &[("q", query), ("hl", "ko"), ("gl", "KR"), ("ceid", "KR:ko")],
    )?)
}

/// Fetches `url` with a single GET and returns the raw body bytes.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success HTTP status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        bail!("feed fetch failed with status {status}");
    }
    Ok(resp.bytes().await?.to_vec())
}
