//! Observable state of the payment flow.
//!
//! # State Transitions
//! ```text
//! Idle → Validating: control activated
//! Validating → Idle: amount rejected
//! Validating → Processing: request sent, indicator up
//! Processing → PopupOpen: initiation accepted
//! Processing → Failed: transport, status or malformed response
//! PopupOpen → Success | Cancelled
//! PopupOpen → Failed: popup could not be opened
//! ```

use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    Processing,
    PopupOpen { reference: String },
    Success { reference: String },
    Cancelled,
    Failed { kind: &'static str },
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::Validating => "validating",
            FlowState::Processing => "processing",
            FlowState::PopupOpen { .. } => "popup_open",
            FlowState::Success { .. } => "success",
            FlowState::Cancelled => "cancelled",
            FlowState::Failed { .. } => "failed",
        }
    }
}

/// Publishes state changes to any number of watchers.
#[derive(Debug)]
pub struct StateTracker {
    tx: watch::Sender<FlowState>,
}

impl StateTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(FlowState::Idle);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> FlowState {
        self.tx.borrow().clone()
    }

    pub fn transition(&self, next: FlowState) {
        let previous = self.tx.send_replace(next.clone());
        tracing::debug!(from = previous.name(), to = next.name(), "Flow state changed");
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}
