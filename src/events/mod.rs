mod classify;
mod validator_filter;

use serde::{Deserialize, Serialize};

use crate::{units::GnoNewtype, validators::ValidatorIndex};

pub use classify::{classify_events, ClassifiedEvents, Incident, IncidentKind};
pub use validator_filter::ValidatorFilter;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Deposit,
    PartialWithdrawal,
    FullWithdrawal,
    Inactive,
    BlockProposed,
    SyncCommittee,
    Slashed,
    Attestation,
    Consolidation,
    /// Any type this version does not know about. Kept so one odd event does not fail the whole
    /// snapshot.
    #[serde(other)]
    Unknown,
}

/// The tabs the event feed is split into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Incidents,
    Consolidations,
    Blocks,
    Deposits,
    Withdrawals,
}

impl EventKind {
    /// Attestations, sync committee duties and unknown kinds have no tab.
    pub fn category(self) -> Option<EventCategory> {
        match self {
            EventKind::Inactive | EventKind::Slashed => Some(EventCategory::Incidents),
            EventKind::Consolidation => Some(EventCategory::Consolidations),
            EventKind::BlockProposed => Some(EventCategory::Blocks),
            EventKind::Deposit => Some(EventCategory::Deposits),
            EventKind::PartialWithdrawal | EventKind::FullWithdrawal => {
                Some(EventCategory::Withdrawals)
            }
            EventKind::Attestation | EventKind::SyncCommittee | EventKind::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub validator_index: ValidatorIndex,
    /// ISO-8601 text, kept as it came in. Incidents are keyed on this exact text.
    pub timestamp: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<GnoNewtype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_event_test() {
        let src = r#"{
            "id": "evt-1",
            "type": "partial_withdrawal",
            "validatorIndex": 123456,
            "timestamp": "2024-01-15T10:30:00Z",
            "details": "Partial withdrawal of rewards",
            "amount": 0.0152
        }"#;
        let event = serde_json::from_str::<ValidatorEvent>(src).unwrap();
        assert_eq!(event.kind, EventKind::PartialWithdrawal);
        assert_eq!(event.amount, Some(GnoNewtype(0.0152)));
        assert_eq!(event.block_number, None);
        assert_eq!(event.timestamp, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn timestamp_without_offset_test() {
        let src = r#"{
            "id": "evt-2",
            "type": "deposit",
            "validatorIndex": 7,
            "timestamp": "2024-01-15T10:30:00",
            "details": "Initial deposit"
        }"#;
        let event = serde_json::from_str::<ValidatorEvent>(src).unwrap();
        assert_eq!(event.timestamp, "2024-01-15T10:30:00");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["timestamp"], "2024-01-15T10:30:00");
    }

    #[test]
    fn unknown_kind_test() {
        let kind = serde_json::from_str::<EventKind>(r#""voluntary_exit""#).unwrap();
        assert_eq!(kind, EventKind::Unknown);
        assert_eq!(kind.category(), None);
    }

    #[test]
    fn category_mapping_test() {
        assert_eq!(
            EventKind::FullWithdrawal.category(),
            Some(EventCategory::Withdrawals)
        );
        assert_eq!(EventKind::Slashed.category(), Some(EventCategory::Incidents));
        assert_eq!(EventKind::Attestation.category(), None);
        assert_eq!(EventKind::SyncCommittee.category(), None);
    }
}
