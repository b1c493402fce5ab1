//! Missed attestation samples and the chart points derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_frames::TimeRange;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedAttestation {
    pub timestamp: DateTime<Utc>,
    /// Attestations missed at this time.
    pub count: u64,
    /// Validators that missed them.
    pub validator_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub value: u64,
    pub slot: u64,
    pub validators: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub total_missed: u64,
    pub max_validators: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedAttestationsChart {
    pub time_range: TimeRange,
    pub points: Vec<ChartPoint>,
    pub summary: ChartSummary,
}

/// Samples inside `time_range`, in input order. An empty result stays empty.
pub fn chart_points(
    samples: &[MissedAttestation],
    time_range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<ChartPoint> {
    samples
        .iter()
        .filter(|sample| time_range.contains(sample.timestamp, now))
        .map(|sample| ChartPoint {
            timestamp: sample.timestamp,
            value: sample.count * sample.validator_count,
            slot: sample.count,
            validators: sample.validator_count,
        })
        .collect()
}

pub fn summarize(points: &[ChartPoint]) -> ChartSummary {
    ChartSummary {
        total_missed: points.iter().map(|point| point.slot).sum(),
        max_validators: points
            .iter()
            .map(|point| point.validators)
            .max()
            .unwrap_or(0),
    }
}

pub fn missed_attestations_chart(
    samples: &[MissedAttestation],
    time_range: TimeRange,
    now: DateTime<Utc>,
) -> MissedAttestationsChart {
    let points = chart_points(samples, time_range, now);
    let summary = summarize(&points);
    MissedAttestationsChart {
        time_range,
        points,
        summary,
    }
}
