//! Purchase rejection reasons.

use thiserror::Error;

use crate::model::AccountId;

/// Why a purchase was rejected. Returned by
/// [`TicketService::purchase`](super::TicketService::purchase) before any
/// collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    #[error("account id must be a positive number, got {}", display_account(.0))]
    InvalidAccount(Option<AccountId>),

    #[error("at least one ticket type must be requested")]
    EmptyRequest,

    #[error("ticket request at position {index} is missing")]
    NullRequest { index: usize },

    #[error("ticket request at position {index} has a non-positive quantity")]
    NonPositiveQuantity { index: usize },

    #[error("total tickets cannot be zero")]
    ZeroTickets,

    #[error("cannot purchase more than {max} tickets in one transaction, requested {requested}")]
    TooManyTickets { requested: u64, max: u32 },

    #[error("child and infant tickets require at least one adult ticket")]
    DependentsWithoutAdult,

    #[error("each infant must sit with an adult: {infants} infants for {adults} adults")]
    TooManyInfants { infants: u64, adults: u64 },

    #[error("purchase price does not fit in an amount")]
    AmountOverflow,
}

fn display_account(account: &Option<AccountId>) -> String {
    match account {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    }
}
