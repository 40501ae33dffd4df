//! Dashboard pages a redirect can land on.

use url::Url;

use crate::error::{CheckoutError, CheckoutResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Prepay an existing subscription for more months.
    ExtendSubscription { subscription_id: u64, duration_months: u32 },
    /// Pay an outstanding invoice.
    PayInvoice { invoice_id: u64 },
    /// Confirm a completed charge by reference.
    VerifyPayment { reference: String },
}

impl RedirectTarget {
    /// Path segments below the site root.
    fn segments(&self) -> Vec<String> {
        match self {
            RedirectTarget::ExtendSubscription { subscription_id, duration_months } => vec![
                "pay".to_string(),
                "extend".to_string(),
                subscription_id.to_string(),
                duration_months.to_string(),
            ],
            RedirectTarget::PayInvoice { invoice_id } => vec![
                "pay".to_string(),
                "pay_invoice".to_string(),
                invoice_id.to_string(),
            ],
            RedirectTarget::VerifyPayment { reference } => vec![
                "pay".to_string(),
                "verify_payment".to_string(),
                reference.clone(),
            ],
        }
    }

    /// Absolute URL of the target page on `base`.
    pub fn url(&self, base: &Url) -> CheckoutResult<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| CheckoutError::InvalidUrl(format!("'{}' cannot be a base", base)))?
            .clear()
            .extend(self.segments());
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
