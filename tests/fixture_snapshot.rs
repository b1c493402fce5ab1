use chrono::{TimeZone, Utc};
use validator_dashboard::{
    attestations::missed_attestations_chart,
    classify_events,
    events::EventKind,
    select_group_view,
    stats::stats_for_filter,
    time_frames::TimeRange,
    GroupFilter, GroupSelection, Snapshot, ValidatorFilter,
};

const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/validator-mock.json");

fn load_fixture() -> Snapshot {
    Snapshot::from_path(FIXTURE_PATH).unwrap()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn fixture_is_consistent() {
    let snapshot = load_fixture();
    assert_eq!(snapshot.groups.len(), 3);
    assert_eq!(snapshot.inconsistencies(), vec![]);
}

#[test]
fn fixture_all_groups_view() {
    let snapshot = load_fixture();
    let selection = select_group_view(&snapshot.groups, &GroupFilter::All).unwrap();
    assert!(matches!(selection, GroupSelection::Aggregated { .. }));

    let group = selection.into_group();
    assert_eq!(group.id, "all");
    assert_eq!(group.validators.len(), 8);
    assert!(approx_eq(group.total_balance.0, 7.0481));
    assert!(approx_eq(group.total_effective_balance.0, 6.9375));
    assert!(approx_eq(group.claimable_rewards.0, 0.2307));

    let counts = group.status_counts();
    assert_eq!(counts.active, 3);
    assert_eq!(counts.inactive, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.exited, 1);
    assert_eq!(counts.slashed, 1);
    assert_eq!(counts.active_exiting, 1);
    assert_eq!(counts.total(), 8);
}

#[test]
fn fixture_single_group_views() {
    let snapshot = load_fixture();

    let selection =
        select_group_view(&snapshot.groups, &GroupFilter::from("group-beta")).unwrap();
    assert!(matches!(selection, GroupSelection::Found { .. }));
    assert_eq!(selection.group().name, "Beta");

    let selection = select_group_view(&snapshot.groups, &GroupFilter::from("nope")).unwrap();
    assert!(selection.is_fallback());
    assert_eq!(selection.group().id, "group-alpha");

    let stats = stats_for_filter(
        &snapshot.stats,
        &snapshot.groups,
        &GroupFilter::from("group-gamma"),
    );
    assert!(approx_eq(stats.performance_1h, 95.0));
    assert_eq!(stats.balance, snapshot.stats.balance);
}

#[test]
fn fixture_event_tabs() {
    let snapshot = load_fixture();
    assert_eq!(
        snapshot
            .events
            .iter()
            .filter(|event| event.kind == EventKind::Unknown)
            .count(),
        2
    );

    let classified = classify_events(&snapshot.events, None);
    assert_eq!(classified.incidents.len(), 2);
    assert_eq!(classified.incidents[0].validators, vec![512003]);
    assert_eq!(classified.incidents[1].timestamp, "2024-01-15T09:30:00Z");
    assert_eq!(classified.incidents[1].validators, vec![401236, 512002]);
    assert!(approx_eq(classified.incidents[1].estimated_cost().0, 0.1));
    assert_eq!(classified.consolidations.len(), 1);
    assert_eq!(classified.blocks.len(), 2);
    assert_eq!(classified.deposits.len(), 1);
    assert_eq!(classified.withdrawals.len(), 2);

    let filter = ValidatorFilter::from("512001");
    let classified = classify_events(&snapshot.events, Some(&filter));
    assert_eq!(classified.incidents.len(), 2);
    assert_eq!(classified.consolidations.len(), 1);
    assert_eq!(classified.blocks.len(), 1);
    assert_eq!(classified.deposits.len(), 0);
    assert_eq!(classified.withdrawals.len(), 0);
}

#[test]
fn fixture_missed_attestations_chart() {
    let snapshot = load_fixture();
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

    let chart = missed_attestations_chart(&snapshot.missed_attestations, TimeRange::Hour24, now);
    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.summary.total_missed, 17);
    assert_eq!(chart.summary.max_validators, 2);

    let chart = missed_attestations_chart(&snapshot.missed_attestations, TimeRange::Day7, now);
    assert_eq!(chart.points.len(), 4);
    assert_eq!(chart.summary.total_missed, 20);
}
