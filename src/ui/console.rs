//! Terminal host for the checkout flows.
//!
//! Notifications go to stderr, navigations to stdout, and the payment popup is a
//! prompt that waits for the reference the provider issued once the customer paid.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::error::{CheckoutError, CheckoutResult};
use crate::payments::types::{PopupConfig, PopupOutcome};
use crate::ui::{Navigator, NoticeKind, Notifier, PaymentPopup};

/// Prints notifications to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_toast(&self, kind: NoticeKind, title: &str, message: &str) {
        eprintln!("[{}] {}: {}", kind.as_str(), title, message);
    }

    fn show_blocking(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn dismiss(&self) {}

    fn alert(&self, message: &str) {
        eprintln!("ALERT: {}", message);
    }
}

/// Prints navigations to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn reload(&self) {
        tracing::info!("Page reload requested");
        println!("reload");
    }

    fn navigate(&self, url: &str) {
        tracing::info!(url, "Navigating");
        println!("{}", url);
    }
}

/// Popup stand-in that reads the completed transaction reference from a line of input.
///
/// An empty line or end of input counts as closing the popup.
pub struct ConsolePopup<R> {
    input: Mutex<R>,
}

impl ConsolePopup<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> ConsolePopup<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

#[async_trait]
impl<R> PaymentPopup for ConsolePopup<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn open(&self, config: PopupConfig) -> CheckoutResult<PopupOutcome> {
        eprintln!("Checkout opened");
        eprintln!("  key:       {}", config.key);
        eprintln!("  email:     {}", config.email);
        eprintln!("  amount:    {}", config.amount);
        eprintln!("  reference: {}", config.reference);
        eprintln!("Enter the transaction reference once paid (empty line to close):");

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| CheckoutError::Popup(e.to_string()))?;

        let reference = line.trim();
        if read == 0 || reference.is_empty() {
            return Ok(PopupOutcome::Cancelled);
        }

        Ok(PopupOutcome::Completed {
            reference: reference.to_string(),
        })
    }
}
