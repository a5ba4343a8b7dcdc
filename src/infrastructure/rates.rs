//! # Rate Source Client
//!
//! Implements the `RateProvider` trait against the HTTP rate source: a GET
//! keyed by the base currency code, returning a JSON object with a `rates`
//! mapping relative to that base. Every request carries a bounded timeout so
//! a slow source cannot stall unrelated command processing.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::config::RatesConfig;
use crate::domain::error::BotError;
use crate::domain::traits::RateProvider;

pub struct HttpRateProvider {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl HttpRateProvider {
    pub fn new(config: &RatesConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn rates(&self, base: &str) -> Result<HashMap<String, f64>, BotError> {
        let url = format!("{}/{}", self.endpoint, base);
        tracing::debug!("fetching rates from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BotError::RateSource(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BotError::RateSource(format!(
                "rate source returned {}",
                response.status()
            )));
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| BotError::RateSource(format!("malformed response: {e}")))?;
        Ok(body.rates)
    }
}
