use std::collections::HashMap;

use serde::Serialize;

use crate::{
    units::{GnoNewtype, UsdNewtype},
    validators::ValidatorIndex,
};

use super::{EventCategory, EventKind, ValidatorEvent, ValidatorFilter};

/// Estimated cost of an incident, per affected validator.
pub const INCIDENT_COST_PER_VALIDATOR: GnoNewtype = GnoNewtype(0.05);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Inactive,
    Slashed,
}

impl IncidentKind {
    fn from_event_kind(kind: EventKind) -> Option<Self> {
        match kind {
            EventKind::Inactive => Some(IncidentKind::Inactive),
            EventKind::Slashed => Some(IncidentKind::Slashed),
            _ => None,
        }
    }
}

/// Inactivity or slashing events that happened at the same moment, merged into one entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: IncidentKind,
    /// One entry per event, in the order the events came in. Duplicates are kept.
    pub validators: Vec<ValidatorIndex>,
    pub details: String,
}

impl Incident {
    pub fn estimated_cost(&self) -> GnoNewtype {
        INCIDENT_COST_PER_VALIDATOR * self.validators.len() as f64
    }

    pub fn estimated_cost_usd(&self, gno_price: f64) -> UsdNewtype {
        self.estimated_cost().to_usd(gno_price)
    }
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ClassifiedEvents<'a> {
    pub incidents: Vec<Incident>,
    pub consolidations: Vec<&'a ValidatorEvent>,
    pub blocks: Vec<&'a ValidatorEvent>,
    pub deposits: Vec<&'a ValidatorEvent>,
    pub withdrawals: Vec<&'a ValidatorEvent>,
}

/// Splits events into the feed's tabs. The validator filter narrows every tab except incidents,
/// which always show every affected validator. Events keep their input order within a tab,
/// incidents are ordered by their first event.
pub fn classify_events<'a>(
    events: &'a [ValidatorEvent],
    validator_filter: Option<&ValidatorFilter>,
) -> ClassifiedEvents<'a> {
    let mut classified = ClassifiedEvents::default();
    let mut incident_positions: HashMap<(String, IncidentKind), usize> = HashMap::new();

    let allows = |event: &ValidatorEvent| {
        validator_filter.map_or(true, |filter| filter.allows(event.validator_index))
    };

    for event in events {
        let Some(category) = event.kind.category() else {
            continue;
        };

        match category {
            EventCategory::Incidents => {
                let Some(kind) = IncidentKind::from_event_kind(event.kind) else {
                    continue;
                };
                let position = *incident_positions
                    .entry((event.timestamp.clone(), kind))
                    .or_insert_with(|| {
                        classified.incidents.push(Incident {
                            timestamp: event.timestamp.clone(),
                            kind,
                            validators: vec![],
                            details: event.details.clone(),
                        });
                        classified.incidents.len() - 1
                    });
                classified.incidents[position]
                    .validators
                    .push(event.validator_index);
            }
            EventCategory::Consolidations if allows(event) => classified.consolidations.push(event),
            EventCategory::Blocks if allows(event) => classified.blocks.push(event),
            EventCategory::Deposits if allows(event) => classified.deposits.push(event),
            EventCategory::Withdrawals if allows(event) => classified.withdrawals.push(event),
            _ => {}
        }
    }

    classified
}
