//! Host capabilities the checkout flows drive.
//!
//! # Data Flow
//! ```text
//! PaymentFlow / RedirectFlow
//!     → Notifier (toasts, blocking indicator, alerts)
//!     → PaymentPopup (provider-hosted checkout)
//!     → Navigator (reload, full navigation)
//! ```
//!
//! # Design Decisions
//! - Capabilities are injected as trait objects, never reached through globals
//! - The popup resolves to a single awaited outcome instead of callback hooks
//! - The blocking indicator is owned by a guard so every exit path dismisses it

pub mod console;
pub mod indicator;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CheckoutResult;
use crate::observability::Analytics;
use crate::payments::types::{PopupConfig, PopupOutcome};

pub use indicator::ProcessingIndicator;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }
}

/// Toast and modal notifications.
pub trait Notifier: Send + Sync {
    /// Non-blocking notification.
    fn show_toast(&self, kind: NoticeKind, title: &str, message: &str);

    /// Blocking, non-dismissable modal that stays up until [`Notifier::dismiss`].
    fn show_blocking(&self, message: &str);

    /// Close the current modal, if any.
    fn dismiss(&self);

    /// Basic blocking alert.
    fn alert(&self, message: &str);
}

/// Provider-hosted payment popup.
#[async_trait]
pub trait PaymentPopup: Send + Sync {
    /// Open the popup and wait until the user completes or closes it.
    async fn open(&self, config: PopupConfig) -> CheckoutResult<PopupOutcome>;
}

/// Browser navigation.
pub trait Navigator: Send + Sync {
    fn reload(&self);

    fn navigate(&self, url: &str);
}

/// Everything a flow needs from its host page.
#[derive(Clone)]
pub struct Host {
    pub notifier: Arc<dyn Notifier>,
    pub popup: Arc<dyn PaymentPopup>,
    pub navigator: Arc<dyn Navigator>,
    pub analytics: Arc<dyn Analytics>,
}
