use crate::config::Config;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Final response of a page fetch: status, body text, and how many
/// redirects were followed to get there.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
    pub redirects: usize,
}

/// Performs the two outbound calls an extraction can make: the ranking
/// lookup and the page fetch itself. Redirects are followed manually on a
/// no-redirect client so the chain length stays observable.
pub struct PageFetcher {
    client: Client,
    traffic_endpoint: String,
    max_redirects: usize,
}

impl PageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            traffic_endpoint: config.traffic_endpoint.clone(),
            max_redirects: config.max_redirects,
        })
    }

    /// GET the URL, following redirects up to the configured cap. Any
    /// transport failure (timeout, TLS, DNS, connection reset) resolves to
    /// `None`; the indicators that depend on the page fall back to their
    /// defaults.
    pub async fn fetch_page(&self, url: &str) -> Option<PageResponse> {
        match self.get_following_redirects(url).await {
            Ok(page) => {
                log::debug!(
                    "fetched {url}: status {} after {} redirect(s), {} byte body",
                    page.status,
                    page.redirects,
                    page.body.len()
                );
                Some(page)
            }
            Err(e) => {
                log::debug!("page fetch failed for {url}: {e}");
                None
            }
        }
    }

    /// Query the ranking service for the given domain. True only when the
    /// final response is a 200; non-200 statuses and every failure mode
    /// collapse to false.
    pub async fn traffic_rank_ok(&self, domain: &str) -> bool {
        let endpoint = self.traffic_endpoint.replace("{domain}", domain);
        match self.get_following_redirects(&endpoint).await {
            Ok(page) => page.status == 200,
            Err(e) => {
                log::debug!("traffic rank lookup failed for {domain}: {e}");
                false
            }
        }
    }

    async fn get_following_redirects(&self, url: &str) -> Result<PageResponse> {
        let mut current = url.to_string();
        let mut redirects = 0;

        loop {
            let response = self.client.get(&current).send().await?;

            if response.status().is_redirection() && redirects < self.max_redirects {
                if let Some(location) = response.headers().get(reqwest::header::LOCATION) {
                    let location = location.to_str()?;
                    // Location may be relative; resolve against the
                    // current URL.
                    current = if location.starts_with("http") {
                        location.to_string()
                    } else {
                        Url::parse(&current)?.join(location)?.to_string()
                    };
                    redirects += 1;
                    log::debug!("redirect {redirects} -> {current}");
                    continue;
                }
            }

            let status = response.status().as_u16();
            let body = response.text().await?;
            return Ok(PageResponse {
                status,
                body,
                redirects,
            });
        }
    }
}
