use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    groups::{Group, GroupFilter},
    units::{GnoNewtype, UsdNewtype},
};

/// Operator level performance and reward stats as shown on the dashboard.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(rename = "performance1h")]
    pub performance_1h: f64,
    pub balance: GnoNewtype,
    pub balance_usd: f64,
    pub claimable: GnoNewtype,
    pub claimable_usd: f64,
    pub apy_day: f64,
    pub apy_week: f64,
    pub apy_month: f64,
    pub gno_day: GnoNewtype,
    pub gno_week: GnoNewtype,
    pub gno_month: GnoNewtype,
    pub xdai_day: f64,
    pub xdai_week: f64,
    pub xdai_month: f64,
    pub missed_day: GnoNewtype,
    pub missed_week: GnoNewtype,
    pub missed_month: GnoNewtype,
    pub total_day: f64,
    pub total_week: f64,
    pub total_month: f64,
    pub gno_price: f64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Stats {
    pub fn to_usd(&self, amount: GnoNewtype) -> UsdNewtype {
        amount.to_usd(self.gno_price)
    }
}

/// Stats for the selected group. Only the one hour performance is known per group, everything
/// else stays operator wide. An unknown group id leaves the stats untouched.
pub fn stats_for_filter(stats: &Stats, groups: &[Group], filter: &GroupFilter) -> Stats {
    match filter {
        GroupFilter::All => stats.clone(),
        GroupFilter::Group(group_id) => match groups.iter().find(|group| &group.id == group_id) {
            Some(group) => Stats {
                performance_1h: group.performance,
                ..stats.clone()
            },
            None => stats.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::test_utils::make_group;

    fn stats() -> Stats {
        Stats {
            performance_1h: 99.2,
            gno_price: 150.0,
            ..Stats::default()
        }
    }

    #[test]
    fn all_keeps_stats_test() {
        let groups = vec![make_group("a", &[50.0])];
        assert_eq!(stats_for_filter(&stats(), &groups, &GroupFilter::All), stats());
    }

    #[test]
    fn group_overrides_performance_test() {
        let groups = vec![make_group("a", &[50.0]), make_group("b", &[70.0])];
        let filtered = stats_for_filter(&stats(), &groups, &GroupFilter::Group("b".to_string()));
        assert_eq!(filtered.performance_1h, 70.0);
        assert_eq!(filtered.gno_price, 150.0);
    }

    #[test]
    fn unknown_group_keeps_stats_test() {
        let groups = vec![make_group("a", &[50.0])];
        let filtered = stats_for_filter(&stats(), &groups, &GroupFilter::Group("z".to_string()));
        assert_eq!(filtered, stats());
    }

    #[test]
    fn deserialize_stats_test() {
        let src = r#"{
            "performance1h": 98.5, "balance": 64.2, "balanceUsd": 9630, "claimable": 0.42,
            "claimableUsd": 63, "apyDay": 11.2, "apyWeek": 10.9, "apyMonth": 10.5,
            "gnoDay": 0.02, "gnoWeek": 0.13, "gnoMonth": 0.55, "xdaiDay": 0.4, "xdaiWeek": 2.8,
            "xdaiMonth": 12.1, "missedDay": 0.001, "missedWeek": 0.004, "missedMonth": 0.02,
            "totalDay": 3.4, "totalWeek": 22.3, "totalMonth": 94.6, "gnoPrice": 150,
            "lastUpdated": "2024-01-15T12:00:00Z"
        }"#;
        let stats = serde_json::from_str::<Stats>(src).unwrap();
        assert_eq!(stats.performance_1h, 98.5);
        assert_eq!(stats.to_usd(stats.claimable), UsdNewtype(0.42 * 150.0));
        assert!(stats.last_updated.is_some());
    }
}
