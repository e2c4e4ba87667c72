//! Ticket domain for the purchase fulfillment system.
//!
//! This crate provides the pure domain layer:
//! - Ticket categories and raw request lines with recognition checks
//! - Per-call tally aggregation and the business limits on it
//! - Per-category pricing with environment overrides
//! - The purchase rejection taxonomy

pub mod ticket;

pub use ticket::{
    AccountId, MAX_TICKETS_PER_PURCHASE, Money, PriceSchedule, PurchaseError, TicketCategory,
    TicketTally, TicketTypeRequest,
};
