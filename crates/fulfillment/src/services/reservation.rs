//! Seat reservation trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::AccountId;

use crate::error::FulfillmentError;

/// Trait for seat reservation operations.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves seats for an account.
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), FulfillmentError>;
}

#[derive(Debug, Default)]
struct InMemoryReservationState {
    reservations: Vec<(AccountId, u32)>,
    fail_on_reserve: bool,
}

/// In-memory seat reservation service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemoryReservationState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on the next reserve call.
    pub fn set_fail_on_reserve(&self, fail: bool) {
        self.state.write().unwrap().fail_on_reserve = fail;
    }

    /// Returns the number of recorded reservations.
    pub fn reservation_count(&self) -> usize {
        self.state.read().unwrap().reservations.len()
    }

    /// Returns the recorded reservations in call order.
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.state.read().unwrap().reservations.clone()
    }

    /// Returns the most recent reservation, if any.
    pub fn last_reservation(&self) -> Option<(AccountId, u32)> {
        self.state.read().unwrap().reservations.last().copied()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), FulfillmentError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_reserve {
            return Err(FulfillmentError::SeatReservation(
                "Seat booking unavailable".to_string(),
            ));
        }

        state.reservations.push((account_id, seat_count));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reserve_records_the_call() {
        let service = InMemorySeatReservationService::new();
        let account = AccountId::new(7).unwrap();

        service.reserve_seats(account, 4).await.unwrap();

        assert_eq!(service.reservation_count(), 1);
        assert_eq!(service.last_reservation(), Some((account, 4)));
    }

    #[tokio::test]
    async fn fail_on_reserve_records_nothing() {
        let service = InMemorySeatReservationService::new();
        service.set_fail_on_reserve(true);

        let result = service
            .reserve_seats(AccountId::new(7).unwrap(), 4)
            .await;

        assert!(matches!(result, Err(FulfillmentError::SeatReservation(_))));
        assert_eq!(service.reservation_count(), 0);
    }
}
