//! HTTP subsystem.
//!
//! Outbound only: the initiation request is the single network call a checkout makes.

pub mod client;

pub use client::{HttpInitiationClient, InitiationApi};
