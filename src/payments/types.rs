//! Payment initiation types.

use serde::{Deserialize, Serialize};

use crate::payments::amount::MinorUnits;

/// The payment trigger as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentControl {
    /// Recipient identifier.
    pub email: String,
    /// Raw display amount; `None` when the control carries no amount at all.
    pub amount: Option<String>,
    /// Endpoint the initiation request is posted to.
    pub initiate_url: String,
}

/// Body of the initiation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: MinorUnits,
    pub email: String,
}

/// Server answer to a successful initiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInitiation {
    pub email: String,
    pub amount: MinorUnits,
    pub reference: String,
}

/// Parameters the payment popup is opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    /// Provider public key.
    pub key: String,
    pub email: String,
    pub amount: MinorUnits,
    pub reference: String,
}

impl PopupConfig {
    /// Popup parameters for a server-issued initiation. Client-side values never leak in.
    pub fn for_initiation(key: impl Into<String>, initiation: PaymentInitiation) -> Self {
        Self {
            key: key.into(),
            email: initiation.email,
            amount: initiation.amount,
            reference: initiation.reference,
        }
    }
}

/// How the popup was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOutcome {
    /// Closed without paying.
    Cancelled,
    /// Provider confirmed the charge.
    Completed { reference: String },
}

/// Result of one activation of the payment control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Another attempt was still in flight; the click was ignored.
    Busy,
    Cancelled,
    Completed { reference: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = PaymentRequest {
            amount: MinorUnits::from(50000),
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "amount": 50000, "email": "a@b.com" })
        );
    }

    #[test]
    fn test_popup_uses_server_fields() {
        let initiation: PaymentInitiation = serde_json::from_str(
            r#"{"email":"server@b.com","amount":50000,"reference":"ref123","status":true}"#,
        )
        .unwrap();

        let popup = PopupConfig::for_initiation("pk_test", initiation);
        assert_eq!(popup.key, "pk_test");
        assert_eq!(popup.email, "server@b.com");
        assert_eq!(popup.amount, MinorUnits::from(50000));
        assert_eq!(popup.reference, "ref123");
    }
}
