//! Ticket purchase validation and pricing.
//!
//! The service checks a purchase against the [`PurchaseRules`], prices it,
//! then charges the account and reserves seats, in that order. A rejected
//! purchase never reaches either collaborator.

use serde::Serialize;
use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::model::{AccountId, PurchaseAttempt, TicketRequest, TicketType};
use crate::rules::PurchaseRules;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};

mod counts;
pub use counts::TicketCounts;

mod error;
pub use error::InvalidPurchase;

/// Outcome of a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub account_id: AccountId,
    /// Amount charged to the account.
    pub amount: Amount,
    /// Seats reserved for the account.
    pub seats: u32,
    pub counts: TicketCounts,
}

/// Tally of a [`TicketService::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub completed: usize,
    pub rejected: usize,
}

/// Validates and prices purchases, delegating payment and seat allocation.
///
/// Holds no per-purchase state, so one service can serve any number of
/// independent purchases.
pub struct TicketService<P, S> {
    payment: P,
    reservation: S,
    rules: PurchaseRules,
}

/// Public API
impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment: P, reservation: S) -> Self {
        Self::with_rules(payment, reservation, PurchaseRules::default())
    }

    pub fn with_rules(payment: P, reservation: S, rules: PurchaseRules) -> Self {
        Self {
            payment,
            reservation,
            rules,
        }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Purchase `requests` for `account_id`.
    ///
    /// On success the account has been charged, then seats reserved, each
    /// exactly once. On failure neither call was made.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<Receipt, InvalidPurchase> {
        self.process(Some(account_id), requests.iter().map(Some))
    }

    /// Same as [`purchase_tickets`](Self::purchase_tickets) for input that may
    /// be missing its account or some of its requests.
    pub fn purchase(&self, attempt: &PurchaseAttempt) -> Result<Receipt, InvalidPurchase> {
        self.process(attempt.account_id, attempt.requests.iter().map(Option::as_ref))
    }

    /// Process a stream of purchases one after the other.
    /// A rejected purchase does not stop the run.
    pub async fn run(&self, mut stream: impl Stream<Item = PurchaseAttempt> + Unpin) -> RunSummary {
        let mut summary = RunSummary::default();
        while let Some(attempt) = stream.next().await {
            // outcome already logged by `purchase`
            match self.purchase(&attempt) {
                Ok(_) => summary.completed += 1,
                Err(_) => summary.rejected += 1,
            }
        }
        summary
    }
}

/// Private API
impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    fn process<'a>(
        &self,
        account_id: Option<AccountId>,
        requests: impl IntoIterator<Item = Option<&'a TicketRequest>>,
    ) -> Result<Receipt, InvalidPurchase> {
        let receipt = match self.validate(account_id, requests) {
            Ok(receipt) => receipt,
            Err(e) => {
                info!(account = ?account_id, reason = %e, "purchase skipped");
                return Err(e);
            }
        };

        // payment strictly before reservation
        self.payment.make_payment(receipt.account_id, receipt.amount);
        self.reservation
            .reserve_seat(receipt.account_id, receipt.seats);

        info!(
            account = receipt.account_id,
            amount = %receipt.amount,
            seats = receipt.seats,
            "purchase applied"
        );
        Ok(receipt)
    }

    /// Run every rule in order and price the purchase. The first broken rule
    /// wins.
    fn validate<'a>(
        &self,
        account_id: Option<AccountId>,
        requests: impl IntoIterator<Item = Option<&'a TicketRequest>>,
    ) -> Result<Receipt, InvalidPurchase> {
        let account_id = match account_id {
            Some(id) if id > 0 => id,
            other => return Err(InvalidPurchase::InvalidAccount(other)),
        };

        let max = self.rules.max_tickets;
        let too_many = |requested| InvalidPurchase::TooManyTickets { requested, max };

        // `None` once the per-type sums no longer fit
        let counts = Self::aggregate(requests)?.ok_or(too_many(u64::MAX))?;

        let total = counts.total().ok_or(too_many(u64::MAX))?;
        if total == 0 {
            return Err(InvalidPurchase::ZeroTickets);
        }
        if total > u64::from(max) {
            return Err(too_many(total));
        }

        if counts.adults == 0 && (counts.children > 0 || counts.infants > 0) {
            return Err(InvalidPurchase::DependentsWithoutAdult);
        }
        if counts.infants > counts.adults {
            return Err(InvalidPurchase::TooManyInfants {
                infants: counts.infants,
                adults: counts.adults,
            });
        }

        let amount = self.price(&counts).ok_or(InvalidPurchase::AmountOverflow)?;
        // bounded by `max`, which is a u32
        let seats = counts
            .seats()
            .and_then(|seats| u32::try_from(seats).ok())
            .ok_or(too_many(total))?;

        Ok(Receipt {
            account_id,
            amount,
            seats,
            counts,
        })
    }

    /// Sum requested tickets per type, rejecting an empty list, a missing
    /// request or a zero quantity. Every element is checked even after the
    /// sums overflow, which yields `Ok(None)`.
    fn aggregate<'a>(
        requests: impl IntoIterator<Item = Option<&'a TicketRequest>>,
    ) -> Result<Option<TicketCounts>, InvalidPurchase> {
        let mut requests = requests.into_iter().peekable();
        if requests.peek().is_none() {
            return Err(InvalidPurchase::EmptyRequest);
        }

        let mut counts = Some(TicketCounts::default());
        for (index, request) in requests.enumerate() {
            let request = request.ok_or(InvalidPurchase::NullRequest { index })?;
            // unreachable through TicketRequest::new, checked anyway
            if request.count() == 0 {
                return Err(InvalidPurchase::NonPositiveQuantity { index });
            }
            counts = counts.and_then(|c| c.checked_add(request.ticket_type(), request.count()));
        }
        Ok(counts)
    }

    /// Sum of price times count over every ticket type, `None` on overflow.
    fn price(&self, counts: &TicketCounts) -> Option<Amount> {
        TicketType::ALL.into_iter().try_fold(Amount::ZERO, |acc, t| {
            acc.checked_add(self.rules.price(t).checked_mul(counts.get(t))?)
        })
    }
}
