//! Per-category ticket pricing.

use super::tally::TicketTally;
use super::value_objects::{Money, TicketCategory};

/// Per-category ticket rates.
///
/// Rates can be overridden through environment variables, falling back to
/// the standard rates:
/// - `TICKET_COST_ADULT` — whole-pound adult rate (default: 25)
/// - `TICKET_COST_CHILD` — whole-pound child rate (default: 15)
/// - `TICKET_COST_INFANT` — whole-pound infant rate (default: 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSchedule {
    adult: Money,
    child: Money,
    infant: Money,
}

impl PriceSchedule {
    /// Creates a schedule with explicit per-category rates.
    pub fn new(adult: Money, child: Money, infant: Money) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Loads the schedule from environment variables, falling back to the
    /// standard rates for unset or unparseable values.
    pub fn from_env() -> Self {
        let standard = Self::default();
        Self {
            adult: env_rate("TICKET_COST_ADULT").unwrap_or(standard.adult),
            child: env_rate("TICKET_COST_CHILD").unwrap_or(standard.child),
            infant: env_rate("TICKET_COST_INFANT").unwrap_or(standard.infant),
        }
    }

    /// Returns the rate for a category.
    pub fn rate(&self, category: TicketCategory) -> Money {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Total cost of a tally: rate times count, summed over every category.
    ///
    /// Infants are free under the standard rates; an overridden infant
    /// rate participates in the sum like any other.
    pub fn total_cost(&self, tally: &TicketTally) -> Money {
        TicketCategory::ALL
            .iter()
            .fold(Money::zero(), |total, &category| {
                total + self.rate(category).multiply(tally.count(category))
            })
    }
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            adult: Money::from_pounds(25),
            child: Money::from_pounds(15),
            infant: Money::zero(),
        }
    }
}

fn env_rate(var: &str) -> Option<Money> {
    std::env::var(var)
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .map(Money::from_pounds)
}
