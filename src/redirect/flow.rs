//! Validate → loading indicator → navigate.

use std::sync::Arc;

use url::Url;

use crate::error::{CheckoutError, CheckoutResult};
use crate::redirect::target::RedirectTarget;
use crate::ui::{Navigator, NoticeKind, Notifier, ProcessingIndicator};

pub const REDIRECTING_MESSAGE: &str = "Redirecting...";
pub const MISSING_DURATION_MESSAGE: &str = "Please select a subscription duration.";
pub const MISSING_REFERENCE_MESSAGE: &str = "Please provide a payment reference.";

pub struct RedirectFlow {
    base_url: Url,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl RedirectFlow {
    pub fn new(base_url: Url, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            base_url,
            notifier,
            navigator,
        }
    }

    /// Extend a subscription by the selected number of months.
    ///
    /// `selection` is the raw value of the duration field; it must be a positive whole
    /// number of months or nothing happens beyond a warning.
    pub fn extend_subscription(
        &self,
        subscription_id: u64,
        selection: Option<&str>,
    ) -> CheckoutResult<Url> {
        let duration_months = match selection.map(str::trim).map(str::parse::<u32>) {
            Some(Ok(months)) if months > 0 => months,
            _ => {
                tracing::warn!(
                    subscription_id,
                    ?selection,
                    "Extension requested without a duration"
                );
                self.notifier
                    .show_toast(NoticeKind::Warning, "Error", MISSING_DURATION_MESSAGE);
                return Err(CheckoutError::MissingSelection);
            }
        };

        self.go(RedirectTarget::ExtendSubscription {
            subscription_id,
            duration_months,
        })
    }

    /// Start paying an invoice.
    pub fn pay_invoice(&self, invoice_id: u64) -> CheckoutResult<Url> {
        self.go(RedirectTarget::PayInvoice { invoice_id })
    }

    /// Open the verification page for a completed charge.
    pub fn verify_payment(&self, reference: &str) -> CheckoutResult<Url> {
        let reference = reference.trim();
        if reference.is_empty() {
            tracing::warn!("Verification requested without a reference");
            self.notifier
                .show_toast(NoticeKind::Warning, "Error", MISSING_REFERENCE_MESSAGE);
            return Err(CheckoutError::MissingSelection);
        }

        self.go(RedirectTarget::VerifyPayment {
            reference: reference.to_string(),
        })
    }

    fn go(&self, target: RedirectTarget) -> CheckoutResult<Url> {
        let url = target.url(&self.base_url)?;

        let indicator = ProcessingIndicator::show(self.notifier.clone(), REDIRECTING_MESSAGE);
        tracing::info!(url = %url, "Redirecting to checkout page");
        self.navigator.navigate(url.as_str());
        indicator.hand_off();

        Ok(url)
    }
}
