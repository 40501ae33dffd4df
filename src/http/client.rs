//! Client for the payment initiation endpoint.
//!
//! # Responsibilities
//! - POST the JSON initiation body to the endpoint
//! - Classify failures (transport, status, malformed body)
//! - Refuse responses the popup cannot be opened with
//!
//! # Design Decisions
//! - One request per call; no retries (POST is not idempotent)
//! - Timeout only when configured
//! - The body is read as text first so malformed JSON is reported with context

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::observability::metrics;
use crate::payments::types::{PaymentInitiation, PaymentRequest};

/// Longest response body excerpt carried in a status error.
const MAX_ERROR_BODY: usize = 512;

/// Anything that can turn a payment request into a server-issued initiation.
#[async_trait]
pub trait InitiationApi: Send + Sync {
    async fn initiate(
        &self,
        url: &str,
        request: &PaymentRequest,
    ) -> CheckoutResult<PaymentInitiation>;
}

/// reqwest-backed initiation client.
#[derive(Clone)]
pub struct HttpInitiationClient {
    client: Client,
    base_url: Url,
}

impl HttpInitiationClient {
    /// Create a client from configuration.
    pub fn new(config: &CheckoutConfig) -> CheckoutResult<Self> {
        let base_url = Url::parse(&config.endpoints.base_url).map_err(|e| {
            CheckoutError::InvalidUrl(format!("'{}': {}", config.endpoints.base_url, e))
        })?;

        let mut builder = Client::builder().user_agent(config.http.user_agent.clone());
        if let Some(secs) = config.http.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.http.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve an absolute or base-relative endpoint.
    pub fn resolve(&self, url: &str) -> CheckoutResult<Url> {
        self.base_url
            .join(url)
            .map_err(|e| CheckoutError::InvalidUrl(format!("'{}': {}", url, e)))
    }
}

#[async_trait]
impl InitiationApi for HttpInitiationClient {
    async fn initiate(
        &self,
        url: &str,
        request: &PaymentRequest,
    ) -> CheckoutResult<PaymentInitiation> {
        let endpoint = self.resolve(url)?;
        let started = Instant::now();

        tracing::debug!(url = %endpoint, amount = %request.amount, "Sending initiation request");

        let resp = self.client.post(endpoint).json(request).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        metrics::record_initiation_latency(started.elapsed());

        if !status.is_success() {
            let body: String = text.chars().take(MAX_ERROR_BODY).collect();
            return Err(CheckoutError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_initiation(&text)
    }
}

/// Decode and sanity-check an initiation response body.
pub fn parse_initiation(text: &str) -> CheckoutResult<PaymentInitiation> {
    let initiation: PaymentInitiation = serde_json::from_str(text)
        .map_err(|e| CheckoutError::MalformedResponse(e.to_string()))?;

    if initiation.reference.trim().is_empty() {
        return Err(CheckoutError::MalformedResponse("empty reference".to_string()));
    }
    if initiation.email.trim().is_empty() {
        return Err(CheckoutError::MalformedResponse("empty email".to_string()));
    }

    Ok(initiation)
}
