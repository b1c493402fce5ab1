use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{alerts::AlertConfig, groups::GroupDraft};

/// Where operator edits would be persisted.
#[automock]
#[async_trait]
pub trait DashboardStore {
    async fn create_group(&self, draft: &GroupDraft) -> anyhow::Result<()>;
    async fn update_group(&self, group_id: &str, draft: &GroupDraft) -> anyhow::Result<()>;
    async fn delete_group(&self, group_id: &str) -> anyhow::Result<()>;
    async fn save_alert_config(&self, config: &AlertConfig) -> anyhow::Result<()>;
}

/// Accepts every edit, logs it, and keeps nothing. The snapshot is the only source of data.
#[derive(Debug, Default)]
pub struct DashboardStoreDiscard;

#[async_trait]
impl DashboardStore for DashboardStoreDiscard {
    async fn create_group(&self, draft: &GroupDraft) -> anyhow::Result<()> {
        info!(name = %draft.name, members = draft.members.len(), "discarding new group");
        Ok(())
    }

    async fn update_group(&self, group_id: &str, draft: &GroupDraft) -> anyhow::Result<()> {
        info!(
            group_id,
            name = %draft.name,
            members = draft.members.len(),
            "discarding group update"
        );
        Ok(())
    }

    async fn delete_group(&self, group_id: &str) -> anyhow::Result<()> {
        info!(group_id, "discarding group deletion");
        Ok(())
    }

    async fn save_alert_config(&self, config: &AlertConfig) -> anyhow::Result<()> {
        info!(?config, "discarding alert configuration");
        Ok(())
    }
}
