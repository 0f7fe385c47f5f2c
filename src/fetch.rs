//! Page retrieval.
//!
//! A [`PageSource`] hands the extraction engine a page as UTF-8 HTML. The
//! engine does not care whether the page is a random lemma or a fixed URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding::decode_page;
use crate::result::Word;
use crate::{extract_with_options, Error, Options, Result};

/// Random French lemma on English Wiktionary.
pub const DEFAULT_SOURCE_URL: &str =
    "https://en.wiktionary.org/wiki/Special:RandomInCategory/French_lemmas";

/// Source of dictionary pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page as UTF-8 HTML.
    async fn fetch_page(&self) -> Result<String>;

    /// Where pages come from (for logs).
    fn describe(&self) -> String;
}

/// Fetches pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpPageSource {
    /// Create a source for `url` with a request timeout.
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url })
    }

    /// Parse and validate `url`, which must be http or https.
    pub fn from_url_str(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::Config(format!("source url {url:?}: {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Config(format!(
                "source url must be http(s), got {}",
                url.scheme()
            )));
        }
        Self::new(url, timeout)
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self) -> Result<String> {
        let response = self.client.get(self.url.clone()).send().await.map_err(|err| {
            tracing::warn!(url = %self.url, error = %err, "couldn't complete request to source");
            Error::Fetch(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        tracing::debug!(url = %response.url(), "fetched source page");

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(decode_page(&body, content_type.as_deref()))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Serves the same HTML every time.
#[derive(Debug, Clone)]
pub struct StaticPageSource {
    html: String,
}

impl StaticPageSource {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch_page(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn describe(&self) -> String {
        "static page".to_string()
    }
}

/// Fetch a page and extract its filtered `Word`.
///
/// The parsed document only exists inside the synchronous extraction call.
pub async fn fetch_word(source: &dyn PageSource, options: &Options) -> Result<Word> {
    let html = source.fetch_page().await?;
    extract_with_options(&html, options)
}
