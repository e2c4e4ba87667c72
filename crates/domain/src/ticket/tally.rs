//! Per-call aggregation of ticket requests.

use super::PurchaseError;
use super::value_objects::{TicketCategory, TicketTypeRequest};

/// Maximum number of tickets, across all categories, in one purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Aggregate ticket counts per category for one purchase call.
///
/// Built fresh per call; categories absent from the input stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    adult: u32,
    child: u32,
    infant: u32,
}

impl TicketTally {
    /// Aggregates a request list into per-category totals.
    ///
    /// The list is scanned in order and the first element that is not a
    /// well-formed ticket request rejects the whole list; later elements
    /// are never inspected. An empty list is rejected before any element
    /// is looked at.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Result<Self, PurchaseError> {
        if requests.is_empty() {
            return Err(PurchaseError::MissingTicketRequest);
        }

        let mut tally = Self::default();
        for request in requests {
            let (category, count) = request
                .recognize()
                .ok_or(PurchaseError::UnrecognizedTicketRequest)?;
            tally.add(category, count);
        }
        Ok(tally)
    }

    fn add(&mut self, category: TicketCategory, count: u32) {
        match category {
            TicketCategory::Adult => self.adult += count,
            TicketCategory::Child => self.child += count,
            TicketCategory::Infant => self.infant += count,
        }
    }

    /// Returns the total for a category.
    pub fn count(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Returns the total number of tickets across all categories.
    ///
    /// Infants hold a ticket and occupy a seat, so they count here even
    /// though they are free under the standard rates.
    pub fn total_tickets(&self) -> u32 {
        self.adult + self.child + self.infant
    }

    /// Checks the business limits on the aggregate, in order: at least one
    /// adult, at least one adult per infant, and no more than
    /// [`MAX_TICKETS_PER_PURCHASE`] tickets in total. Only the first
    /// violated limit is reported.
    pub fn check_limits(&self) -> Result<(), PurchaseError> {
        if self.adult < 1 {
            return Err(PurchaseError::NoAdultTicket);
        }
        if self.adult < self.infant {
            return Err(PurchaseError::InfantAdultRatio);
        }
        if self.total_tickets() > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets);
        }
        Ok(())
    }
}
