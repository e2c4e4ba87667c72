//! Fulfillment error types.

use domain::PurchaseError;
use thiserror::Error;

/// Errors surfaced by a purchase call.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// The purchase request failed validation; the rejection carries the
    /// caller-facing message unchanged.
    #[error(transparent)]
    Rejected(#[from] PurchaseError),

    /// Seat reservation service error.
    #[error("Seat reservation error: {0}")]
    SeatReservation(String),

    /// Payment service error.
    #[error("Payment error: {0}")]
    Payment(String),
}

/// Convenience type alias for fulfillment results.
pub type Result<T> = std::result::Result<T, FulfillmentError>;
