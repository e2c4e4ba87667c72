//! Purchase fulfillment for attraction tickets.
//!
//! This crate orchestrates one ticket purchase end to end: the ordered
//! validation pipeline over the raw request, then seat reservation and
//! payment collection through capability traits injected at construction.
//! Every step outcome is logged with a per-call correlation id. In-memory
//! implementations of both collaborators are provided for tests and for
//! hosts without real reservation or payment backends.

pub mod coordinator;
pub mod error;
pub mod services;

pub use coordinator::PurchaseCoordinator;
pub use error::{FulfillmentError, Result};
pub use services::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, SeatReservationService,
    TicketPaymentService,
};
