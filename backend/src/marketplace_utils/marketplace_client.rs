//! Marketplace REST client and its environment configuration.

use std::time::Duration;

use reqwest::{StatusCode, Url, header::ACCEPT};
use serde::de::DeserializeOwned;

use crate::marketplace_utils::marketplace_error::MarketplaceApiError;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl MarketplaceConfig {
    /// Read `MARKETPLACE_API_URL`, `MARKETPLACE_API_TOKEN` and `MARKETPLACE_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = var("MARKETPLACE_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url: var("MARKETPLACE_API_URL").unwrap_or(DEFAULT_API_URL.to_string()),
            token: var("MARKETPLACE_API_TOKEN").filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    base_url: Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl MarketplaceClient {
    pub fn new(config: MarketplaceConfig) -> Result<Self, MarketplaceApiError> {
        // a trailing slash keeps the path prefix (e.g. `/api`) when joining endpoints
        let normalized = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|err| MarketplaceApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| MarketplaceApiError::Network { url: normalized.clone(), source })?;
        Ok(Self { base_url, token: config.token, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, path: &str) -> Result<Url, MarketplaceApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| MarketplaceApiError::InvalidUrl { url: path.to_string(), reason: err.to_string() })
    }

    /// GET `path` with query `params` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MarketplaceApiError> {
        let url = self.endpoint_url(path)?;
        tracing::debug!(url = %url, ?params, "sending marketplace GET request");

        let mut request = self
            .http
            .get(url.clone())
            .query(params)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| MarketplaceApiError::Network { url: url.to_string(), source })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| MarketplaceApiError::Network { url: url.to_string(), source })?;
        tracing::debug!(url = %url, status = %status, len = body.len(), "received marketplace response");
        parse_response(url.as_str(), status, &body)
    }
}

fn parse_response<T: DeserializeOwned>(url: &str, status: StatusCode, body: &str) -> Result<T, MarketplaceApiError> {
    if status.is_client_error() || status.is_server_error() {
        return Err(MarketplaceApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|source| MarketplaceApiError::Decode { url: url.to_string(), source })
}

pub fn get_marketplace_client() -> anyhow::Result<MarketplaceClient> {
    Ok(MarketplaceClient::new(MarketplaceConfig::from_env())?)
}
