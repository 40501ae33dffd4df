//! Client-side checkout flows for a Paystack-backed billing dashboard.
//!
//! # Architecture Overview
//!
//! ```text
//!   payment control ──▶ payments::flow ──▶ http::client ──▶ initiation endpoint
//!                            │
//!                            ├──▶ ui::Notifier   (toasts, processing indicator, alerts)
//!                            ├──▶ ui::PaymentPopup (provider-hosted checkout)
//!                            ├──▶ ui::Navigator  (reload / navigate)
//!                            └──▶ observability::Analytics
//!
//!   extend / invoice ──▶ redirect::flow ──▶ ui::Navigator
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod payments;
pub mod redirect;
pub mod ui;

pub use config::CheckoutConfig;
pub use error::{CheckoutError, CheckoutResult};
pub use payments::{PaymentControl, PaymentFlow, PaymentOutcome};
pub use redirect::RedirectFlow;
