use crate::utils::error::Result;
use reqwest::{header, Client};

pub const DEFAULT_URL: &str = "https://atlasbig.com.tr/istanbulun-mahalleleri";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Single GET with a browser-like User-Agent. Timeouts and redirects are the
/// client defaults and nothing is retried.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            user_agent: user_agent.into(),
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        let body = response.error_for_status()?.text().await?;

        tracing::debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}
