pub mod amount;
pub mod model;
pub mod rules;
pub mod service;
pub mod thirdparty;

pub use amount::Amount;
pub use model::{AccountId, PurchaseAttempt, TicketRequest, TicketRequestError, TicketType};
pub use rules::PurchaseRules;
pub use service::{InvalidPurchase, Receipt, RunSummary, TicketCounts, TicketService};
pub use thirdparty::{SeatReservationService, TicketPaymentService};
