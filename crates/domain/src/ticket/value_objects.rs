//! Value objects for the ticket domain.

use serde::{Deserialize, Serialize};

use super::PurchaseError;

/// Ticket category, the unit of pricing and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories, in pricing order.
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Parses a canonical category code.
    ///
    /// Codes are case-sensitive: `"ADULT"`, `"CHILD"`, `"INFANT"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADULT" => Some(Self::Adult),
            "CHILD" => Some(Self::Child),
            "INFANT" => Some(Self::Infant),
            _ => None,
        }
    }

    /// Returns the canonical category code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Account identifier for the purchasing account.
///
/// Wraps the raw id supplied by the caller once it has passed the
/// positivity check; zero and negative values are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Validates a raw account id, which must be strictly greater than zero.
    pub fn new(id: i64) -> Result<Self, PurchaseError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(PurchaseError::InvalidAccountId)
        }
    }

    /// Returns the raw id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in whole pounds.
///
/// Ticket rates are flat integer amounts per category, so no fractional
/// component is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    pounds: i64,
}

impl Money {
    /// Creates a new Money amount from whole pounds.
    pub const fn from_pounds(pounds: i64) -> Self {
        Self { pounds }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { pounds: 0 }
    }

    /// Returns the amount in whole pounds.
    pub fn pounds(&self) -> i64 {
        self.pounds
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            pounds: self.pounds * i64::from(quantity),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pounds < 0 {
            write!(f, "-£{}", self.pounds.unsigned_abs())
        } else {
            write!(f, "£{}", self.pounds)
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            pounds: self.pounds + rhs.pounds,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.pounds += rhs.pounds;
    }
}

/// One line of a purchase request: a category code and a ticket count as
/// supplied by the caller.
///
/// The raw values are not checked at construction; [`Self::recognize`]
/// performs the check when the purchase pipeline scans the request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    category: String,
    count: i64,
}

impl TicketTypeRequest {
    /// Creates a request line from raw caller input.
    pub fn new(category: impl Into<String>, count: i64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }

    /// Creates a request line for a known category.
    pub fn for_category(category: TicketCategory, count: u32) -> Self {
        Self {
            category: category.code().to_string(),
            count: i64::from(count),
        }
    }

    /// Returns the raw category code.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the raw ticket count.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Returns the typed category and count when this line is a
    /// well-formed ticket request: a known category code and a count of
    /// at least one.
    pub fn recognize(&self) -> Option<(TicketCategory, u32)> {
        let category = TicketCategory::from_code(&self.category)?;
        let count = u32::try_from(self.count).ok().filter(|&count| count > 0)?;
        Some((category, count))
    }
}
