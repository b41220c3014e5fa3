//! The 16-slot feature vector and its extraction pipeline.
//!
//! Slot order is part of the classifier contract; the model was trained on
//! exactly this ordering and reordering silently corrupts predictions.
//!
//!  0. raw input parses as an IPv4/IPv6 literal
//!  1. literal `@` anywhere in the input
//!  2. input length >= 54
//!  3. path depth (integer count, not a flag)
//!  4. last `//` past the scheme-delimiter region
//!  5. literal `https` inside the network-location
//!  6. known link-shortener pattern
//!  7. hyphen in the network-location
//!  8–10. constant zeros: domain age, registration length and DNS-record
//!        slots, kept as stand-ins for data sources this build never
//!        queries
//!  11. ranking lookup for the domain returned 200
//!  12. no hidden-iframe pattern in the body (1 when no page)
//!  13. script block wiring an `onmouseover` handler (0 when no page)
//!  14. right click not suppressed (1 when no page)
//!  15. more than two redirects followed (0 when no page)

pub mod content;
pub mod lexical;

use crate::config::Config;
use crate::fetcher::{PageFetcher, PageResponse};
use crate::url_parts::parse_lenient;
use anyhow::Result;

pub const FEATURE_COUNT: usize = 16;

pub type FeatureVector = [f64; FEATURE_COUNT];

/// Turns a URL string into a [`FeatureVector`], performing at most two
/// network calls per extraction: the ranking lookup, then one page fetch
/// shared by all content indicators.
pub struct FeatureExtractor {
    fetcher: PageFetcher,
}

impl FeatureExtractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// Extract the full vector. Never fails: both network calls degrade to
    /// their documented defaults and every predicate is total.
    pub async fn extract(&self, url: &str) -> FeatureVector {
        let domain = {
            let parts = parse_lenient(url);
            let domain = parts.domain().to_string();
            if domain.is_empty() {
                url.to_string()
            } else {
                domain
            }
        };

        let web_traffic = self.fetcher.traffic_rank_ok(&domain).await;
        let page = self.fetcher.fetch_page(url).await;

        assemble_vector(url, web_traffic, page.as_ref())
    }
}

/// Pure assembly of the vector from the URL string, the ranking-lookup
/// outcome, and the optional fetched page.
pub fn assemble_vector(
    url: &str,
    web_traffic: bool,
    page: Option<&PageResponse>,
) -> FeatureVector {
    let parts = parse_lenient(url);

    [
        flag(lexical::is_ip_literal(url)),
        flag(lexical::has_at_sign(url)),
        flag(lexical::is_long_url(url)),
        lexical::path_depth(&parts) as f64,
        flag(lexical::has_late_double_slash(url)),
        flag(lexical::https_in_netloc(&parts)),
        flag(lexical::is_shortened(url)),
        flag(lexical::hyphen_in_netloc(&parts)),
        // Domain age, registration length, DNS record: constant stand-ins.
        0.0,
        0.0,
        0.0,
        flag(web_traffic),
        flag(content::no_iframe(page)),
        flag(content::has_mouseover_script(page)),
        flag(content::right_click_enabled(page)),
        flag(content::excessive_forwarding(page)),
    ]
}

fn flag(hit: bool) -> f64 {
    if hit {
        1.0
    } else {
        0.0
    }
}
