//! Core domain types for ticket purchases.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Account identifier. Only strictly positive ids are valid for a purchase.
pub type AccountId = i64;

/// Kind of ticket; determines price and seat allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap: no seat of its own.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Whether this ticket type is allocated a physical seat.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        };
        f.write_str(name)
    }
}

/// Rejection raised when building a [`TicketRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketRequestError {
    #[error("ticket count must be positive, got {0}")]
    NonPositiveCount(i64),
    #[error("ticket count {0} is out of range")]
    CountOutOfRange(i64),
}

/// A request for `count` tickets of one type. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest", into = "RawTicketRequest")]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, TicketRequestError> {
        if count == 0 {
            return Err(TicketRequestError::NonPositiveCount(0));
        }
        Ok(Self { ticket_type, count })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Wire form of a [`TicketRequest`], before the count is checked.
#[derive(Debug, Serialize, Deserialize)]
struct RawTicketRequest {
    r#type: TicketType,
    count: i64,
}

impl TryFrom<RawTicketRequest> for TicketRequest {
    type Error = TicketRequestError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        if raw.count <= 0 {
            return Err(TicketRequestError::NonPositiveCount(raw.count));
        }
        let count =
            u32::try_from(raw.count).map_err(|_| TicketRequestError::CountOutOfRange(raw.count))?;
        TicketRequest::new(raw.r#type, count)
    }
}

impl From<TicketRequest> for RawTicketRequest {
    fn from(request: TicketRequest) -> Self {
        Self {
            r#type: request.ticket_type,
            count: i64::from(request.count),
        }
    }
}

/// A purchase as supplied from outside, where the account or any request
/// may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseAttempt {
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub requests: Vec<Option<TicketRequest>>,
}

impl PurchaseAttempt {
    /// Build an attempt where the account and every request are present.
    pub fn new(account_id: AccountId, requests: impl IntoIterator<Item = TicketRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            requests: requests.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_count() {
        assert_eq!(
            TicketRequest::new(TicketType::Adult, 0),
            Err(TicketRequestError::NonPositiveCount(0))
        );
    }

    #[test]
    fn new_keeps_type_and_count() {
        let request = TicketRequest::new(TicketType::Child, 3).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Child);
        assert_eq!(request.count(), 3);
    }

    #[test]
    fn only_infants_have_no_seat() {
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(!TicketType::Infant.occupies_seat());
    }

    #[test]
    fn ticket_type_display_matches_wire_name() {
        for ticket_type in TicketType::ALL {
            let json = serde_json::to_string(&ticket_type).unwrap();
            assert_eq!(json, format!("\"{ticket_type}\""));
        }
    }

    #[test]
    fn deserialize_request() {
        let request: TicketRequest =
            serde_json::from_str(r#"{"type":"INFANT","count":2}"#).unwrap();
        assert_eq!(request, TicketRequest::new(TicketType::Infant, 2).unwrap());
    }

    #[test]
    fn request_survives_json_round_trip() {
        let request = TicketRequest::new(TicketType::Child, 3).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"type":"CHILD","count":3}"#);
        assert_eq!(serde_json::from_str::<TicketRequest>(&json).unwrap(), request);
    }

    #[test]
    fn deserialize_rejects_non_positive_count() {
        let err = serde_json::from_str::<TicketRequest>(r#"{"type":"ADULT","count":-1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        assert!(serde_json::from_str::<TicketRequest>(r#"{"type":"ADULT","count":0}"#).is_err());
    }

    #[test]
    fn deserialize_rejects_huge_count() {
        let err = serde_json::from_str::<TicketRequest>(r#"{"type":"ADULT","count":5000000000}"#)
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn deserialize_rejects_missing_or_null_type() {
        assert!(serde_json::from_str::<TicketRequest>(r#"{"count":1}"#).is_err());
        assert!(serde_json::from_str::<TicketRequest>(r#"{"type":null,"count":1}"#).is_err());
        assert!(serde_json::from_str::<TicketRequest>(r#"{"type":"SENIOR","count":1}"#).is_err());
    }

    #[test]
    fn attempt_keeps_null_elements() {
        let attempt: PurchaseAttempt = serde_json::from_str(
            r#"{"account_id":5,"requests":[{"type":"ADULT","count":1},null]}"#,
        )
        .unwrap();
        assert_eq!(attempt.account_id, Some(5));
        assert_eq!(attempt.requests.len(), 2);
        assert!(attempt.requests[1].is_none());
    }

    #[test]
    fn attempt_missing_fields_default_to_absent() {
        let attempt: PurchaseAttempt = serde_json::from_str("{}").unwrap();
        assert_eq!(attempt, PurchaseAttempt::default());
    }

    #[test]
    fn attempt_new_wraps_every_request() {
        let adult = TicketRequest::new(TicketType::Adult, 1).unwrap();
        let attempt = PurchaseAttempt::new(9, [adult, adult]);
        assert_eq!(attempt.account_id, Some(9));
        assert_eq!(attempt.requests, vec![Some(adult), Some(adult)]);
    }
}
