//! External collaborators charged with payment and seat allocation.
//!
//! Both are assumed to always succeed: they return nothing and a failure on
//! their side is theirs to handle.

use std::sync::Arc;
use tracing::info;

use crate::Amount;
use crate::model::AccountId;

/// Charges an account for a purchase.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Amount);
}

/// Allocates physical seats to an account.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: Amount) {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: Amount) {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats)
    }
}

/// Payment stand-in that only records the charge in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Amount) {
        info!(account = account_id, amount = %amount, "payment taken");
    }
}

/// Reservation stand-in that only records the allocation in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        info!(account = account_id, seats, "seats reserved");
    }
}
