//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckoutConfig (validated, immutable)
//!     → handed to the flows at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::CheckoutConfig;
pub use schema::EndpointConfig;
pub use schema::HttpConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ProviderConfig;
