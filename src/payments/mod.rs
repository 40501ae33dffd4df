//! Payment initiation subsystem.

pub mod amount;
pub mod flow;
pub mod guard;
pub mod state;
pub mod types;

pub use flow::PaymentFlow;
pub use state::FlowState;
pub use types::{PaymentControl, PaymentOutcome};
