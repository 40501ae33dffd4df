//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the checkout client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the checkout client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Payment provider settings (public key, currency).
    pub provider: ProviderConfig,

    /// Server endpoints the client talks to.
    pub endpoints: EndpointConfig,

    /// HTTP client settings.
    pub http: HttpConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Payment provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Public key handed to the payment popup.
    pub public_key: String,

    /// ISO 4217 currency code reported with analytics events.
    pub currency: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            currency: "NGN".to_string(),
        }
    }
}

/// Server endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the dashboard; relative paths and redirects are joined onto it.
    pub base_url: String,

    /// Path (or absolute URL) of the payment initiation endpoint.
    pub initiate_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            initiate_path: "/pay/intent/paystack".to_string(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds. Unset means the request may wait indefinitely.
    pub request_timeout_secs: Option<u64>,

    /// User-Agent header sent with the initiation request.
    pub user_agent: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: None,
            user_agent: concat!("paystack-checkout/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Record analytics counters in a Prometheus recorder.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
        }
    }
}
