//! Ticket purchase domain: categories, request lines, tallies, pricing.

mod pricing;
mod tally;
mod value_objects;

pub use pricing::PriceSchedule;
pub use tally::{MAX_TICKETS_PER_PURCHASE, TicketTally};
pub use value_objects::{AccountId, Money, TicketCategory, TicketTypeRequest};

use thiserror::Error;

/// Reasons a purchase request is rejected.
///
/// `Display` carries the caller-facing message; [`PurchaseError::log_message`]
/// carries the internal description recorded in the rejection log entry.
/// Both wordings are kept stable for callers and downstream log consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Account id was zero or negative.
    #[error("Account Id must be a positive integer.")]
    InvalidAccountId,

    /// The request list was empty.
    #[error("A least one ticket type must be requested.")]
    MissingTicketRequest,

    /// An element of the request list was not a well-formed ticket request.
    #[error("Ticket type request is not recognised.")]
    UnrecognizedTicketRequest,

    /// The aggregated request contained no adult ticket.
    #[error("A minimum of one adult ticket is required.")]
    NoAdultTicket,

    /// The aggregated request contained more infants than adults.
    #[error("A minimum of one adult ticket per infant ticket is required.")]
    InfantAdultRatio,

    /// The aggregated request exceeded the ticket maximum.
    #[error("A maximum of 25 tickets are permitted.")]
    TooManyTickets,
}

impl PurchaseError {
    /// Internal description attached to the log entry emitted when a
    /// purchase is rejected.
    pub fn log_message(&self) -> &'static str {
        match self {
            Self::InvalidAccountId => "Account Id provided was not an integer greater than 0.",
            Self::MissingTicketRequest => "Ticket type request is missing.",
            Self::UnrecognizedTicketRequest => {
                "Ticket type request is not of type ticketTypeRequest."
            }
            Self::NoAdultTicket => "No adult ticket was requested.",
            Self::InfantAdultRatio => "More adults than infants were requested.",
            Self::TooManyTickets => "More than 25 tickets were requested.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PurchaseError;

    #[test]
    fn rejection_messages_are_stable() {
        let cases = [
            (
                PurchaseError::InvalidAccountId,
                "Account Id must be a positive integer.",
                "Account Id provided was not an integer greater than 0.",
            ),
            (
                PurchaseError::MissingTicketRequest,
                "A least one ticket type must be requested.",
                "Ticket type request is missing.",
            ),
            (
                PurchaseError::UnrecognizedTicketRequest,
                "Ticket type request is not recognised.",
                "Ticket type request is not of type ticketTypeRequest.",
            ),
            (
                PurchaseError::NoAdultTicket,
                "A minimum of one adult ticket is required.",
                "No adult ticket was requested.",
            ),
            (
                PurchaseError::InfantAdultRatio,
                "A minimum of one adult ticket per infant ticket is required.",
                "More adults than infants were requested.",
            ),
            (
                PurchaseError::TooManyTickets,
                "A maximum of 25 tickets are permitted.",
                "More than 25 tickets were requested.",
            ),
        ];

        for (error, message, log_message) in cases {
            assert_eq!(error.to_string(), message);
            assert_eq!(error.log_message(), log_message);
        }
    }
}
