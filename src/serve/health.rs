use chrono::{DateTime, Utc};

use crate::health::{HealthCheckable, HealthStatus};

pub struct ServeHealth {
    group_count: usize,
    loaded_on: DateTime<Utc>,
}

impl ServeHealth {
    pub fn new(group_count: usize, loaded_on: DateTime<Utc>) -> Self {
        Self {
            group_count,
            loaded_on,
        }
    }
}

impl HealthCheckable for ServeHealth {
    // Nothing changes after startup, a snapshot without groups stays useless.
    fn health_status(&self) -> HealthStatus {
        if self.group_count == 0 {
            HealthStatus::Unhealthy(Some(format!(
                "snapshot loaded on {} has no groups",
                self.loaded_on.to_rfc3339()
            )))
        } else {
            HealthStatus::Healthy
        }
    }
}
