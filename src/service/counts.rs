use serde::Serialize;

use crate::model::TicketType;

/// Per-type ticket totals for one purchase.
///
/// Each total is the exact sum of its requests; arithmetic that would not
/// fit returns `None` instead of wrapping or clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TicketCounts {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketCounts {
    /// Counts with `count` more tickets of `ticket_type`, or `None` on overflow.
    pub fn checked_add(mut self, ticket_type: TicketType, count: u32) -> Option<Self> {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adults,
            TicketType::Child => &mut self.children,
            TicketType::Infant => &mut self.infants,
        };
        *slot = slot.checked_add(u64::from(count))?;
        Some(self)
    }

    pub fn get(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total(&self) -> Option<u64> {
        self.adults
            .checked_add(self.children)?
            .checked_add(self.infants)
    }

    /// Tickets that need a seat of their own.
    pub fn seats(&self) -> Option<u64> {
        TicketType::ALL
            .into_iter()
            .filter(|t| t.occupies_seat())
            .try_fold(0u64, |acc, t| acc.checked_add(self.get(t)))
    }
}
