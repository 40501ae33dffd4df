//! Error taxonomy for a checkout attempt.

use thiserror::Error;

/// Errors that end a checkout attempt.
///
/// Every variant is scoped to a single interaction; none of them is fatal to the host.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Display amount was absent or not a finite number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A redirect flow was triggered without its required selection.
    #[error("Missing required selection")]
    MissingSelection,

    /// The initiation request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The initiation endpoint answered with a non-success status.
    #[error("Initiation endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The initiation endpoint answered with a body we cannot hand to the popup.
    #[error("Malformed initiation response: {0}")]
    MalformedResponse(String),

    /// An endpoint or redirect URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The payment popup could not be driven.
    #[error("Popup error: {0}")]
    Popup(String),
}

impl CheckoutError {
    /// Tag reported as `error_kind` on analytics events.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::InvalidAmount(_) => "invalid_amount",
            CheckoutError::MissingSelection => "missing_selection",
            CheckoutError::Transport(_) => "transport",
            CheckoutError::Status { .. } => "status",
            CheckoutError::MalformedResponse(_) => "malformed_response",
            CheckoutError::InvalidUrl(_) => "invalid_url",
            CheckoutError::Popup(_) => "popup",
        }
    }
}

/// Result type for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
