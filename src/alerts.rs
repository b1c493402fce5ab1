use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::GnoNewtype;

pub const MIN_PERFORMANCE_THRESHOLD: f64 = 90.0;
pub const MAX_PERFORMANCE_THRESHOLD: f64 = 100.0;
pub const PERFORMANCE_THRESHOLD_STEP: f64 = 0.5;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertToggles {
    pub sync_committee_participation: bool,
    pub withdrawals: bool,
    pub block_proposer: bool,
}

impl Default for AlertToggles {
    fn default() -> Self {
        Self {
            sync_committee_participation: true,
            withdrawals: true,
            block_proposer: true,
        }
    }
}

/// When an operator wants to be alerted. Delivering the alerts is someone else's job.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfig {
    /// Percentage below which a validator is considered underperforming.
    pub performance_threshold: f64,
    /// Slots without duties before a validator is considered inactive.
    pub inactivity_slots: u32,
    pub reward_threshold: GnoNewtype,
    /// Minutes between repeated alerts.
    pub alert_frequency: u32,
    pub alerts: AlertToggles,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            performance_threshold: 95.0,
            inactivity_slots: 3,
            reward_threshold: GnoNewtype(1.0),
            alert_frequency: 60,
            alerts: AlertToggles::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AlertConfigError {
    #[error("performance threshold {0} must be between 90 and 100 in steps of 0.5")]
    PerformanceThreshold(f64),
    #[error("inactivity slots must be at least one")]
    InactivitySlots,
    #[error("reward threshold {0} must not be negative")]
    RewardThreshold(f64),
    #[error("alert frequency must be at least one minute")]
    AlertFrequency,
}

impl AlertConfig {
    pub fn validate(&self) -> Result<(), AlertConfigError> {
        let threshold = self.performance_threshold;
        let in_range =
            (MIN_PERFORMANCE_THRESHOLD..=MAX_PERFORMANCE_THRESHOLD).contains(&threshold);
        let on_step = (threshold / PERFORMANCE_THRESHOLD_STEP).fract() == 0.0;
        if !in_range || !on_step {
            return Err(AlertConfigError::PerformanceThreshold(threshold));
        }

        if self.inactivity_slots == 0 {
            return Err(AlertConfigError::InactivitySlots);
        }

        let GnoNewtype(reward_threshold) = self.reward_threshold;
        if reward_threshold.is_nan() || reward_threshold < 0.0 {
            return Err(AlertConfigError::RewardThreshold(reward_threshold));
        }

        if self.alert_frequency == 0 {
            return Err(AlertConfigError::AlertFrequency);
        }

        Ok(())
    }
}
