use serde::{Deserialize, Serialize};

use crate::units::GnoNewtype;

pub type ValidatorIndex = u64;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorStatus {
    Active,
    Inactive,
    Pending,
    Exited,
    Slashed,
    ActiveExiting,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    pub id: String,
    pub index: ValidatorIndex,
    pub pubkey: String,
    pub status: ValidatorStatus,
    pub balance: GnoNewtype,
    pub effective_balance: GnoNewtype,
    /// Percentage in [0, 100].
    pub performance: f64,
    pub missed_attestations: u64,
    pub group_id: String,
}

/// How many validators of a group are in each status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    pub exited: usize,
    pub slashed: usize,
    pub active_exiting: usize,
}

impl StatusCounts {
    pub fn from_validators<'a>(validators: impl IntoIterator<Item = &'a Validator>) -> Self {
        validators
            .into_iter()
            .fold(StatusCounts::default(), |mut counts, validator| {
                match validator.status {
                    ValidatorStatus::Active => counts.active += 1,
                    ValidatorStatus::Inactive => counts.inactive += 1,
                    ValidatorStatus::Pending => counts.pending += 1,
                    ValidatorStatus::Exited => counts.exited += 1,
                    ValidatorStatus::Slashed => counts.slashed += 1,
                    ValidatorStatus::ActiveExiting => counts.active_exiting += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.active + self.inactive + self.pending + self.exited + self.slashed + self.active_exiting
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    pub fn make_validator(
        index: ValidatorIndex,
        group_id: &str,
        status: ValidatorStatus,
        balance: f64,
        performance: f64,
    ) -> Validator {
        Validator {
            id: format!("val-{index}"),
            index,
            pubkey: format!("0x{index:096x}"),
            status,
            balance: GnoNewtype(balance),
            effective_balance: GnoNewtype(balance.min(1.0)),
            performance,
            missed_attestations: 0,
            group_id: group_id.to_string(),
        }
    }
}
