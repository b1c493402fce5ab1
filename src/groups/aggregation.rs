use serde::Serialize;
use thiserror::Error;

use crate::units::GnoNewtype;

use super::{Group, GroupFilter, ALL_GROUPS_ID, ALL_GROUPS_NAME};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectGroupError {
    #[error("no groups to select from")]
    NoGroups,
}

/// The group a filter resolved to, and how it got there.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "selection", rename_all = "snake_case")]
pub enum GroupSelection {
    Aggregated { group: Group },
    Found { group: Group },
    /// The requested id matched nothing, the first group is shown instead.
    FellBackToFirst { requested: String, group: Group },
}

impl GroupSelection {
    pub fn group(&self) -> &Group {
        match self {
            GroupSelection::Aggregated { group }
            | GroupSelection::Found { group }
            | GroupSelection::FellBackToFirst { group, .. } => group,
        }
    }

    pub fn into_group(self) -> Group {
        match self {
            GroupSelection::Aggregated { group }
            | GroupSelection::Found { group }
            | GroupSelection::FellBackToFirst { group, .. } => group,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GroupSelection::FellBackToFirst { .. })
    }
}

/// Synthesizes the "All Groups" group. Totals are summed over the groups, performance is the mean
/// of the per-group performances rather than of every validator. An existing entry with the
/// aggregate id is skipped, the aggregate is always derived fresh.
fn aggregate_groups(groups: &[Group]) -> Result<Group, SelectGroupError> {
    let real_groups: Vec<&Group> = groups.iter().filter(|group| !group.is_all_groups()).collect();

    if real_groups.is_empty() {
        return Err(SelectGroupError::NoGroups);
    }

    let validators = real_groups
        .iter()
        .flat_map(|group| group.validators.iter().cloned())
        .collect();
    let total_balance: GnoNewtype = real_groups.iter().map(|group| group.total_balance).sum();
    let total_effective_balance: GnoNewtype = real_groups
        .iter()
        .map(|group| group.total_effective_balance)
        .sum();
    let claimable_rewards: GnoNewtype = real_groups
        .iter()
        .map(|group| group.claimable_rewards)
        .sum();
    let performance_sum: f64 = real_groups.iter().map(|group| group.performance).sum();
    let performance = performance_sum / real_groups.len() as f64;

    Ok(Group {
        id: ALL_GROUPS_ID.to_string(),
        name: ALL_GROUPS_NAME.to_string(),
        withdrawal_addresses: vec![],
        fee_recipient_address: "-".to_string(),
        validator_indices: vec![],
        validators,
        total_balance,
        total_effective_balance,
        claimable_rewards,
        performance,
    })
}

pub fn select_group_view(
    groups: &[Group],
    filter: &GroupFilter,
) -> Result<GroupSelection, SelectGroupError> {
    match filter {
        GroupFilter::All => aggregate_groups(groups).map(|group| GroupSelection::Aggregated { group }),
        GroupFilter::Group(group_id) => {
            match groups.iter().find(|group| &group.id == group_id) {
                Some(group) => Ok(GroupSelection::Found {
                    group: group.clone(),
                }),
                None => groups
                    .iter()
                    .find(|group| !group.is_all_groups())
                    .map(|group| GroupSelection::FellBackToFirst {
                        requested: group_id.clone(),
                        group: group.clone(),
                    })
                    .ok_or(SelectGroupError::NoGroups),
            }
        }
    }
}
