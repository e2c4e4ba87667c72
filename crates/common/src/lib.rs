//! Shared types used across the ticket fulfillment crates.

pub mod types;

pub use types::RequestId;
