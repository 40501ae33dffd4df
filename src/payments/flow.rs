//! Payment initiation flow.
//!
//! # Sequence
//! ```text
//! click
//!     → in-flight guard (overlapping clicks return Busy)
//!     → amount validation (warning toast, no request on failure)
//!     → processing indicator up
//!     → POST { amount: amount*100, email }
//!     → indicator down
//!     → popup with the server's email/amount/reference
//!     → Completed: success toast + reload | Cancelled: info toast
//! ```
//!
//! A failed request dismisses the indicator, logs, raises a blocking alert and never
//! opens the popup. A popup that cannot be opened after a successful initiation is
//! reported separately (`paystack_popup_error`) with its own alert.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ProviderConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::http::InitiationApi;
use crate::observability::analytics::{
    Properties, EVENT_ABANDONED, EVENT_API_ERROR, EVENT_INITIATED, EVENT_INVALID_AMOUNT,
    EVENT_POPUP_ERROR, EVENT_SUCCESS,
};
use crate::observability::metrics;
use crate::payments::amount::{analytics_value, parse_display_amount, to_minor_units};
use crate::payments::guard::InFlight;
use crate::payments::state::{FlowState, StateTracker};
use crate::payments::types::{
    PaymentControl, PaymentOutcome, PaymentRequest, PopupConfig, PopupOutcome,
};
use crate::ui::{Host, NoticeKind, ProcessingIndicator};

pub const PROCESSING_MESSAGE: &str = "Processing...";
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";
pub const INTERRUPTED_MESSAGE: &str = "Payment process was interrupted.";
pub const INITIATION_FAILED_MESSAGE: &str = "There was an issue with initiating the payment.";
pub const POPUP_FAILED_MESSAGE: &str = "The payment window could not be opened.";

/// Drives one payment control.
pub struct PaymentFlow {
    api: Arc<dyn InitiationApi>,
    host: Host,
    provider_key: String,
    currency: String,
    in_flight: InFlight,
    state: StateTracker,
}

impl PaymentFlow {
    pub fn new(provider: &ProviderConfig, api: Arc<dyn InitiationApi>, host: Host) -> Self {
        Self {
            api,
            host,
            provider_key: provider.public_key.clone(),
            currency: provider.currency.clone(),
            in_flight: InFlight::new(),
            state: StateTracker::new(),
        }
    }

    /// Watch the flow's state.
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FlowState {
        self.state.current()
    }

    /// Whether the trigger is currently disabled by an attempt in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Handle one activation of the payment control.
    pub async fn handle_click(&self, control: &PaymentControl) -> CheckoutResult<PaymentOutcome> {
        let Some(_guard) = self.in_flight.try_acquire() else {
            tracing::debug!("Payment attempt already in flight, ignoring click");
            metrics::record_attempt("busy");
            return Ok(PaymentOutcome::Busy);
        };

        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!("payment_attempt", %attempt_id, email = %control.email);
        let result = self.attempt(control).instrument(span).await;

        metrics::record_attempt(match &result {
            Ok(PaymentOutcome::Completed { .. }) => "completed",
            Ok(PaymentOutcome::Cancelled) => "cancelled",
            Ok(PaymentOutcome::Busy) => "busy",
            Err(CheckoutError::InvalidAmount(_)) => "invalid_amount",
            Err(_) => "failed",
        });
        result
    }

    async fn attempt(&self, control: &PaymentControl) -> CheckoutResult<PaymentOutcome> {
        self.state.transition(FlowState::Validating);

        let (display, minor) = match parse_display_amount(control.amount.as_deref())
            .and_then(|display| Ok((display, to_minor_units(display)?)))
        {
            Ok(amounts) => amounts,
            Err(e) => {
                self.reject_amount(&e);
                return Err(e);
            }
        };
        let value = analytics_value(display);

        let request = PaymentRequest {
            amount: minor,
            email: control.email.clone(),
        };

        let mut indicator =
            ProcessingIndicator::show(self.host.notifier.clone(), PROCESSING_MESSAGE);
        self.state.transition(FlowState::Processing);

        let initiation = match self.api.initiate(&control.initiate_url, &request).await {
            Ok(initiation) => initiation,
            Err(e) => {
                indicator.dismiss();
                self.report_failure(&e, value);
                return Err(e);
            }
        };
        indicator.dismiss();

        tracing::info!(
            reference = %initiation.reference,
            amount = %initiation.amount,
            "Payment initiated"
        );
        self.host.analytics.track(
            EVENT_INITIATED,
            self.payment_properties("Payment initiated", value).build(),
        );

        let popup = PopupConfig::for_initiation(self.provider_key.as_str(), initiation);
        self.state.transition(FlowState::PopupOpen {
            reference: popup.reference.clone(),
        });

        match self.host.popup.open(popup).await {
            Ok(PopupOutcome::Cancelled) => {
                tracing::info!("Payment popup closed without payment");
                self.host.analytics.track(
                    EVENT_ABANDONED,
                    self.payment_properties("Popup closed without payment", value).build(),
                );
                self.host
                    .notifier
                    .show_toast(NoticeKind::Info, "Interrupted", INTERRUPTED_MESSAGE);
                self.state.transition(FlowState::Cancelled);
                Ok(PaymentOutcome::Cancelled)
            }
            Ok(PopupOutcome::Completed { reference }) => {
                tracing::info!(reference = %reference, "Payment completed");
                self.host.analytics.track(
                    EVENT_SUCCESS,
                    self.payment_properties("Payment completed", value)
                        .with("transaction_id", reference.as_str())
                        .build(),
                );
                self.host.notifier.show_toast(
                    NoticeKind::Success,
                    "Success!",
                    &format!("Payment was successful. Reference: {}", reference),
                );
                self.state.transition(FlowState::Success {
                    reference: reference.clone(),
                });
                self.host.navigator.reload();
                Ok(PaymentOutcome::Completed { reference })
            }
            Err(e) => {
                self.report_popup_failure(&e, value);
                Err(e)
            }
        }
    }

    fn reject_amount(&self, error: &CheckoutError) {
        tracing::warn!(error = %error, "Rejected payment amount");
        self.host.analytics.track(
            EVENT_INVALID_AMOUNT,
            Properties::new("payment_error", "Invalid amount entered").build(),
        );
        self.host
            .notifier
            .show_toast(NoticeKind::Warning, "Error", INVALID_AMOUNT_MESSAGE);
        self.state.transition(FlowState::Idle);
    }

    fn report_failure(&self, error: &CheckoutError, value: f64) {
        tracing::error!(error = %error, kind = error.kind(), "Payment initiation failed");
        self.host.analytics.track(
            EVENT_API_ERROR,
            Properties::new("payment_error", "Initiation API failed")
                .with("value", value)
                .with("error_kind", error.kind())
                .build(),
        );
        self.state.transition(FlowState::Failed { kind: error.kind() });
        self.host.notifier.alert(INITIATION_FAILED_MESSAGE);
    }

    fn report_popup_failure(&self, error: &CheckoutError, value: f64) {
        tracing::error!(error = %error, kind = error.kind(), "Payment popup failed to open");
        self.host.analytics.track(
            EVENT_POPUP_ERROR,
            self.payment_properties("Payment popup failed", value)
                .with("error_kind", error.kind())
                .build(),
        );
        self.state.transition(FlowState::Failed { kind: error.kind() });
        self.host.notifier.alert(POPUP_FAILED_MESSAGE);
    }

    fn payment_properties(&self, label: &str, value: f64) -> Properties {
        Properties::new("payment", label)
            .with("value", value)
            .with("currency", self.currency.as_str())
    }
}
