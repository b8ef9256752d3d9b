use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::quotes::quotes_errors::QuoteError;
use crate::quotes::quotes_model::Quote;
use crate::quotes::quotes_traits::QuoteGateway;

const BASE_URL: &str = "https://cloud.iexapis.com/stable";

/// Environment variable holding the IEX API token. The provider refuses to
/// start without it.
pub const API_KEY_VAR: &str = "TRADEBOOK_API_KEY";

/// Environment variable overriding the quote endpoint base URL.
pub const BASE_URL_VAR: &str = "TRADEBOOK_QUOTE_URL";

/// IEX-cloud-style quote provider
pub struct IexProvider {
    client: Client,
    base_url: String,
    token: String,
}

impl IexProvider {
    pub fn new(base_url: String, token: String) -> Self {
        let client = Client::new();
        IexProvider {
            client,
            base_url,
            token,
        }
    }

    /// Builds a provider from the environment; fails when the API token is unset.
    pub fn from_env() -> crate::errors::Result<Self> {
        let token = std::env::var(API_KEY_VAR)
            .map_err(|_| ConfigError::MissingKey(API_KEY_VAR.to_string()))?;
        let base_url = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| BASE_URL.to_string());
        Ok(Self::new(base_url, token))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IexQuote {
    symbol: String,
    latest_price: Decimal,
    latest_update: i64,
}

#[async_trait]
impl QuoteGateway for IexProvider {
    async fn lookup(&self, symbol: &str) -> Result<Option<Quote>, QuoteError> {
        let url = format!(
            "{}/stock/{}/quote?token={}",
            self.base_url, symbol, self.token
        );

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QuoteError::ProviderError(format!(
                "Quote API returned {}: {}",
                status, body
            )));
        }

        let payload: IexQuote = response
            .json()
            .await
            .map_err(|e| QuoteError::ParsingError(format!("Failed to parse quote: {}", e)))?;

        if payload.latest_price <= Decimal::ZERO {
            return Err(QuoteError::ParsingError(format!(
                "Non-positive price {} for symbol {}",
                payload.latest_price, payload.symbol
            )));
        }

        let timestamp = DateTime::<Utc>::from_timestamp_millis(payload.latest_update)
            .ok_or_else(|| {
                QuoteError::ParsingError(format!(
                    "Invalid quote timestamp {} for symbol {}",
                    payload.latest_update, payload.symbol
                ))
            })?;

        Ok(Some(Quote {
            symbol: payload.symbol,
            price: payload.latest_price,
            timestamp,
        }))
    }
}
