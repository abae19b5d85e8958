//! Paginated, rate-limited client for the Scryfall card search API.
//!
//! Wire-level concerns (pagination, rate limiting, error bodies) all live
//! here; callers get back fully accumulated `ScryfallCard` lists and feed
//! them to the normalize/transform pipeline.

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, instrument};

use sg_core::common::error::{GrapherError, Result};
use sg_core::common::types::{CardApi, ScryfallCard, ScryfallSearchResponse};

use crate::apis::rate_limiter::{Limits, RateLimiter};
use crate::common::constants::{SCRYFALL_API_NAME, SCRYFALL_USER_AGENT};
use crate::config::GrapherConfig;
use crate::observability::metrics;

/// Error body Scryfall returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ScryfallErrorBody {
    details: Option<String>,
}

pub struct ScryfallClient {
    client: reqwest::Client,
    base_url: String,
    limiter: RateLimiter,
}

impl ScryfallClient {
    pub fn new(config: &GrapherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(Limits {
                requests_per_min: Some(config.rate_limit_rpm),
                concurrency: Some(1),
            }),
        }
    }

    /// Fetch every page of a search, invoking `on_page` after each page
    /// with the records accumulated so far and the reported total. The
    /// callback is how the presentation layer gets progressive-render
    /// feedback on large result sets.
    #[instrument(skip(self, on_page))]
    pub async fn search_with_progress<F>(&self, query: &str, mut on_page: F) -> Result<Vec<ScryfallCard>>
    where
        F: FnMut(&[ScryfallCard], usize),
    {
        let mut all_cards: Vec<ScryfallCard> = Vec::new();
        let mut pages = 0usize;

        let request = self
            .client
            .get(format!("{}/cards/search", self.base_url))
            .query(&[("q", query)]);
        let mut response: ScryfallSearchResponse = self.get_json(request).await?;

        loop {
            pages += 1;
            let ScryfallSearchResponse {
                total_cards,
                has_more,
                next_page,
                data,
            } = response;

            debug!(page = pages, fetched = data.len(), total = total_cards, "search page received");
            all_cards.extend(data);
            on_page(&all_cards, total_cards);

            match next_page {
                Some(url) if has_more => {
                    response = self.get_json(self.client.get(&url)).await?;
                }
                _ => break,
            }
        }

        metrics::sources::pages_fetched(pages);
        info!(cards = all_cards.len(), pages, "search complete");
        Ok(all_cards)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        self.limiter.acquire().await;

        let t0 = Instant::now();
        let resp = request
            .header(USER_AGENT, SCRYFALL_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        metrics::sources::request_duration(t0.elapsed().as_secs_f64());

        let status = resp.status();
        if !status.is_success() {
            metrics::sources::request_error();
            let details = resp
                .json::<ScryfallErrorBody>()
                .await
                .ok()
                .and_then(|body| body.details);
            return Err(GrapherError::Api {
                message: details
                    .unwrap_or_else(|| format!("Scryfall request failed with status {}", status)),
            });
        }

        let bytes = resp.bytes().await?;
        metrics::sources::request_success();
        metrics::sources::payload_bytes(bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl CardApi for ScryfallClient {
    fn api_name(&self) -> &'static str {
        SCRYFALL_API_NAME
    }

    async fn search(&self, query: &str) -> Result<Vec<ScryfallCard>> {
        self.search_with_progress(query, |_, _| {}).await
    }

    #[instrument(skip(self))]
    async fn card_named(&self, name: &str) -> Result<ScryfallCard> {
        let request = self
            .client
            .get(format!("{}/cards/named", self.base_url))
            .query(&[("fuzzy", name)]);
        self.get_json(request).await
    }
}
