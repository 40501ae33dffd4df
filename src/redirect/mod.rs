//! Navigation-only checkout flows.
//!
//! These flows hand the browser to a dashboard page that starts a hosted checkout
//! server-side. They validate the selection, raise the loading indicator and
//! navigate; there is no response to handle.

pub mod flow;
pub mod target;

pub use flow::RedirectFlow;
pub use target::RedirectTarget;
