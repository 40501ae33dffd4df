//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Flows produce:
//!     → analytics.rs (product events, fire-and-forget)
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Analytics is an injected capability, not a global tag function
//! - Every attempt carries an `attempt_id` span field
//! - Metrics are cheap and optional

pub mod analytics;
pub mod logging;
pub mod metrics;

pub use analytics::{Analytics, EventProperties, MetricsAnalytics, NoopAnalytics};
