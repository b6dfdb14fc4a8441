//! Purchase limits and the price table.

use serde::{Deserialize, Serialize};

use crate::Amount;
use crate::model::TicketType;

/// Tunable rules applied to every purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseRules {
    /// Maximum number of tickets, of all types, in one purchase.
    pub max_tickets: u32,
    pub adult_price: Amount,
    pub child_price: Amount,
    pub infant_price: Amount,
}

impl PurchaseRules {
    pub const DEFAULT_MAX_TICKETS: u32 = 25;

    pub fn price(&self, ticket_type: TicketType) -> Amount {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets: Self::DEFAULT_MAX_TICKETS,
            adult_price: Amount::new(25),
            child_price: Amount::new(15),
            infant_price: Amount::ZERO,
        }
    }
}
