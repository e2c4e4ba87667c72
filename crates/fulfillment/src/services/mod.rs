//! External collaborator traits and in-memory implementations.

pub mod payment;
pub mod reservation;

pub use payment::{InMemoryTicketPaymentService, TicketPaymentService};
pub use reservation::{InMemorySeatReservationService, SeatReservationService};
