//! Purchase coordinator orchestrating validation, reservation, and payment.

use std::time::Instant;

use common::RequestId;
use domain::{AccountId, PriceSchedule, PurchaseError, TicketTally, TicketTypeRequest};

use crate::error::FulfillmentError;
use crate::services::payment::TicketPaymentService;
use crate::services::reservation::SeatReservationService;

/// Orchestrates one ticket purchase end to end.
///
/// Runs the ordered validation pipeline over the raw request, then reserves
/// seats and collects payment through the injected collaborators, in that
/// order. Each call is self-contained: a fresh correlation id tags every
/// log entry the call emits, and no state is shared between calls.
pub struct PurchaseCoordinator<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    reservation: R,
    payment: P,
    prices: PriceSchedule,
}

impl<R, P> PurchaseCoordinator<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// Creates a coordinator with rates loaded from the environment.
    pub fn new(reservation: R, payment: P) -> Self {
        Self::with_prices(reservation, payment, PriceSchedule::from_env())
    }

    /// Creates a coordinator with an explicit price schedule.
    pub fn with_prices(reservation: R, payment: P, prices: PriceSchedule) -> Self {
        Self {
            reservation,
            payment,
            prices,
        }
    }

    /// Validates and fulfills one ticket purchase.
    ///
    /// Validation is strictly ordered and stops at the first violation:
    /// account id, non-empty request list, element recognition, adult
    /// minimum, infant/adult ratio, ticket maximum. Each rejection is
    /// logged exactly once and no seats are reserved and no payment is
    /// taken unless every check passes. Collaborator failures propagate
    /// unchanged, and a payment failure does not undo the reservation
    /// made before it.
    #[tracing::instrument(skip(self, requests))]
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), FulfillmentError> {
        metrics::counter!("ticket_purchases_total").increment(1);
        let started = Instant::now();
        let request_id = RequestId::new();

        let outcome = self.fulfill(&request_id, account_id, requests).await;

        metrics::histogram!("ticket_purchase_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        match &outcome {
            Ok(()) => metrics::counter!("ticket_purchases_completed").increment(1),
            Err(_) => metrics::counter!("ticket_purchases_failed").increment(1),
        }
        outcome
    }

    async fn fulfill(
        &self,
        request_id: &RequestId,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), FulfillmentError> {
        let account =
            AccountId::new(account_id).map_err(|rejection| self.reject(request_id, rejection))?;
        let tally = TicketTally::from_requests(requests)
            .map_err(|rejection| self.reject(request_id, rejection))?;
        tally
            .check_limits()
            .map_err(|rejection| self.reject(request_id, rejection))?;

        let seats = tally.total_tickets();
        self.reservation.reserve_seats(account, seats).await?;
        tracing::info!(request_id = %request_id, seats_reserved = seats, "Seats reserved.");

        let cost = self.prices.total_cost(&tally);
        self.payment.make_payment(account, cost).await?;
        tracing::info!(request_id = %request_id, cost = cost.pounds(), "Payment made.");

        Ok(())
    }

    /// Records the single rejection log entry for a failed validation step.
    fn reject(&self, request_id: &RequestId, rejection: PurchaseError) -> FulfillmentError {
        tracing::error!(request_id = %request_id, "{}", rejection.log_message());
        rejection.into()
    }
}
