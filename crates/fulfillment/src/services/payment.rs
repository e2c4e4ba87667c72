//! Ticket payment trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::{AccountId, Money};

use crate::error::FulfillmentError;

/// Trait for payment collection operations.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Collects a payment from an account.
    async fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<(), FulfillmentError>;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<(AccountId, Money)>,
    fail_on_payment: bool,
}

/// In-memory payment service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryTicketPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on the next payment call.
    pub fn set_fail_on_payment(&self, fail: bool) {
        self.state.write().unwrap().fail_on_payment = fail;
    }

    /// Returns the number of recorded payments.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().payments.len()
    }

    /// Returns the recorded payments in call order.
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.state.read().unwrap().payments.clone()
    }

    /// Returns the most recent payment, if any.
    pub fn last_payment(&self) -> Option<(AccountId, Money)> {
        self.state.read().unwrap().payments.last().copied()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryTicketPaymentService {
    async fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<(), FulfillmentError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_payment {
            return Err(FulfillmentError::Payment("Payment declined".to_string()));
        }

        state.payments.push((account_id, amount));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn make_payment_records_the_call() {
        let service = InMemoryTicketPaymentService::new();
        let account = AccountId::new(7).unwrap();

        service
            .make_payment(account, Money::from_pounds(65))
            .await
            .unwrap();

        assert_eq!(service.payment_count(), 1);
        assert_eq!(
            service.last_payment(),
            Some((account, Money::from_pounds(65)))
        );
    }

    #[tokio::test]
    async fn fail_on_payment_records_nothing() {
        let service = InMemoryTicketPaymentService::new();
        service.set_fail_on_payment(true);

        let result = service
            .make_payment(AccountId::new(7).unwrap(), Money::from_pounds(65))
            .await;

        assert!(matches!(result, Err(FulfillmentError::Payment(_))));
        assert_eq!(service.payment_count(), 0);
    }
}
