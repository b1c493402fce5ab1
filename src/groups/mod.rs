//! Groups of validators sharing a fee recipient and withdrawal configuration, plus the filter the
//! dashboard uses to pick one of them (or all of them).

mod aggregation;
mod draft;

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    units::GnoNewtype,
    validators::{StatusCounts, Validator, ValidatorIndex},
};

pub use aggregation::{select_group_view, GroupSelection, SelectGroupError};
pub use draft::{DraftError, GroupDraft, MemberInput};

pub const ALL_GROUPS_ID: &str = "all";
pub const ALL_GROUPS_NAME: &str = "All Groups";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub withdrawal_addresses: Vec<String>,
    pub fee_recipient_address: String,
    pub validator_indices: Vec<ValidatorIndex>,
    pub validators: Vec<Validator>,
    pub total_balance: GnoNewtype,
    pub total_effective_balance: GnoNewtype,
    pub claimable_rewards: GnoNewtype,
    pub performance: f64,
}

/// The aggregates a group carries that are fully determined by its validators. Claimable rewards
/// are not part of this, validators carry no claimable amount.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatorTotals {
    pub total_balance: GnoNewtype,
    pub total_effective_balance: GnoNewtype,
    /// None when there are no validators to average over.
    pub performance: Option<f64>,
}

impl ValidatorTotals {
    pub fn from_validators(validators: &[Validator]) -> Self {
        let total_balance = validators.iter().map(|validator| validator.balance).sum();
        let total_effective_balance = validators
            .iter()
            .map(|validator| validator.effective_balance)
            .sum();
        let performance = if validators.is_empty() {
            None
        } else {
            let sum: f64 = validators.iter().map(|validator| validator.performance).sum();
            Some(sum / validators.len() as f64)
        };

        Self {
            total_balance,
            total_effective_balance,
            performance,
        }
    }
}

impl Group {
    /// Builds a group with its derived fields computed from `validators`. A group without
    /// validators gets a performance of zero.
    pub fn from_validators(
        id: impl Into<String>,
        name: impl Into<String>,
        validators: Vec<Validator>,
        claimable_rewards: GnoNewtype,
    ) -> Self {
        let totals = ValidatorTotals::from_validators(&validators);
        Self {
            id: id.into(),
            name: name.into(),
            withdrawal_addresses: vec![],
            fee_recipient_address: String::new(),
            validator_indices: vec![],
            validators,
            total_balance: totals.total_balance,
            total_effective_balance: totals.total_effective_balance,
            claimable_rewards,
            performance: totals.performance.unwrap_or(0.0),
        }
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::from_validators(&self.validators)
    }

    pub fn is_all_groups(&self) -> bool {
        self.id == ALL_GROUPS_ID
    }
}

/// Which group the dashboard is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GroupFilter {
    #[default]
    All,
    Group(String),
}

impl From<&str> for GroupFilter {
    fn from(s: &str) -> Self {
        match s.trim() {
            ALL_GROUPS_ID => GroupFilter::All,
            group_id => GroupFilter::Group(group_id.to_string()),
        }
    }
}

impl FromStr for GroupFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GroupFilter::from(s))
    }
}

impl Display for GroupFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupFilter::All => write!(f, "{ALL_GROUPS_ID}"),
            GroupFilter::Group(group_id) => write!(f, "{group_id}"),
        }
    }
}

impl Serialize for GroupFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GroupFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(GroupFilter::from(s.as_str()))
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::make_group;
    use super::*;

    #[test]
    fn parse_group_filter_test() {
        assert_eq!("all".parse::<GroupFilter>(), Ok(GroupFilter::All));
        assert_eq!(
            "group-1".parse::<GroupFilter>(),
            Ok(GroupFilter::Group("group-1".to_string()))
        );
    }

    #[test]
    fn group_filter_display_round_trip_test() {
        let filter = GroupFilter::Group("alpha".to_string());
        assert_eq!(filter.to_string().parse::<GroupFilter>(), Ok(filter));
        assert_eq!(GroupFilter::All.to_string(), "all");
    }

    #[test]
    fn from_validators_derives_totals_test() {
        let group = make_group("a", &[100.0, 90.0, 80.0]);
        assert_eq!(group.total_balance, GnoNewtype(3.0));
        assert_eq!(group.total_effective_balance, GnoNewtype(3.0));
        assert_eq!(group.performance, 90.0);
        assert_eq!(group.claimable_rewards, GnoNewtype(0.25));
    }

    #[test]
    fn empty_group_performance_test() {
        let group = make_group("empty", &[]);
        assert_eq!(group.performance, 0.0);
        assert_eq!(ValidatorTotals::from_validators(&[]).performance, None);
    }

    #[test]
    fn deserialize_group_test() {
        let src = r#"{
            "id": "group-1",
            "name": "Alpha",
            "withdrawalAddresses": ["0xabc"],
            "feeRecipientAddress": "0xdef",
            "validatorIndices": [1, 2],
            "validators": [],
            "totalBalance": 0,
            "totalEffectiveBalance": 0,
            "claimableRewards": 0.5,
            "performance": 0
        }"#;
        let group = serde_json::from_str::<Group>(src).unwrap();
        assert_eq!(group.withdrawal_addresses, vec!["0xabc".to_string()]);
        assert_eq!(group.validator_indices, vec![1, 2]);
        assert_eq!(group.claimable_rewards, GnoNewtype(0.5));
        assert!(!group.is_all_groups());
    }
}
