//! The static dataset the dashboard runs on. Loaded once at startup, read-only after that.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    alerts::AlertConfig,
    attestations::MissedAttestation,
    events::ValidatorEvent,
    groups::{Group, ValidatorTotals},
    stats::Stats,
    units::GnoNewtype,
};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub groups: Vec<Group>,
    pub events: Vec<ValidatorEvent>,
    #[serde(default)]
    pub alert_config: AlertConfig,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub missed_attestations: Vec<MissedAttestation>,
}

/// A way in which a group in the snapshot disagrees with its own validators.
#[derive(Clone, Debug, PartialEq)]
pub enum Inconsistency {
    TotalBalance {
        group_id: String,
        stored: GnoNewtype,
        derived: GnoNewtype,
    },
    TotalEffectiveBalance {
        group_id: String,
        stored: GnoNewtype,
        derived: GnoNewtype,
    },
    Performance {
        group_id: String,
        stored: f64,
        derived: f64,
    },
    ValidatorGroupId {
        group_id: String,
        validator_id: String,
        claimed_group_id: String,
    },
}

// Fixture amounts are rounded to a few decimals.
const TOLERANCE: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot = serde_json::from_str::<Snapshot>(json)?;
        debug!(
            groups = snapshot.groups.len(),
            events = snapshot.events.len(),
            "parsed snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every group's derived fields against its validators, and every validator's group
    /// back-reference against the group listing it.
    pub fn inconsistencies(&self) -> Vec<Inconsistency> {
        let mut inconsistencies = vec![];

        for group in &self.groups {
            let derived = ValidatorTotals::from_validators(&group.validators);

            if !approx_eq(group.total_balance.0, derived.total_balance.0) {
                inconsistencies.push(Inconsistency::TotalBalance {
                    group_id: group.id.clone(),
                    stored: group.total_balance,
                    derived: derived.total_balance,
                });
            }

            if !approx_eq(
                group.total_effective_balance.0,
                derived.total_effective_balance.0,
            ) {
                inconsistencies.push(Inconsistency::TotalEffectiveBalance {
                    group_id: group.id.clone(),
                    stored: group.total_effective_balance,
                    derived: derived.total_effective_balance,
                });
            }

            if let Some(performance) = derived.performance {
                if !approx_eq(group.performance, performance) {
                    inconsistencies.push(Inconsistency::Performance {
                        group_id: group.id.clone(),
                        stored: group.performance,
                        derived: performance,
                    });
                }
            }

            for validator in &group.validators {
                if validator.group_id != group.id {
                    inconsistencies.push(Inconsistency::ValidatorGroupId {
                        group_id: group.id.clone(),
                        validator_id: validator.id.clone(),
                        claimed_group_id: validator.group_id.clone(),
                    });
                }
            }
        }

        inconsistencies
    }

    /// Logs every inconsistency as a warning. Returns how many there were.
    pub fn warn_on_inconsistencies(&self) -> usize {
        let inconsistencies = self.inconsistencies();
        for inconsistency in &inconsistencies {
            warn!(?inconsistency, "snapshot group disagrees with its validators");
        }
        inconsistencies.len()
    }
}
