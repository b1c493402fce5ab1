use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use validator_dashboard::{
    attestations::missed_attestations_chart, classify_events, env::ENV_CONFIG, log,
    select_group_view, time_frames::TimeRange, GroupFilter, Snapshot, ValidatorFilter,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot to read. Defaults to SNAPSHOT_PATH, or the bundled fixture.
    #[clap(long)]
    snapshot: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the group view for a filter, "all" or a group id.
    GroupView {
        #[clap(long, default_value = "all")]
        filter: GroupFilter,
    },
    /// Prints the event feed split into tabs.
    Events {
        /// Comma separated validator indices, e.g. "123, 456".
        #[clap(long)]
        validators: Option<ValidatorFilter>,
    },
    /// Prints missed attestation chart points for 1h, 24h or 7d.
    MissedAttestations {
        #[clap(long, default_value = "24h")]
        range: TimeRange,
    },
    /// Checks every group's totals against its validators.
    CheckSnapshot,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    log::init();

    let cli = Cli::parse();
    let path = cli
        .snapshot
        .unwrap_or_else(|| ENV_CONFIG.snapshot_path.clone());
    let snapshot =
        Snapshot::from_path(&path).with_context(|| format!("loading snapshot from {path}"))?;

    match cli.command {
        Commands::GroupView { filter } => {
            let selection = select_group_view(&snapshot.groups, &filter)?;
            if selection.is_fallback() {
                warn!(%filter, "unknown group, showing first group");
            }
            print_json(&selection)
        }
        Commands::Events { validators } => {
            let classified = classify_events(&snapshot.events, validators.as_ref());
            print_json(&classified)
        }
        Commands::MissedAttestations { range } => {
            let chart = missed_attestations_chart(&snapshot.missed_attestations, range, Utc::now());
            print_json(&chart)
        }
        Commands::CheckSnapshot => {
            let inconsistencies = snapshot.warn_on_inconsistencies();
            if inconsistencies > 0 {
                anyhow::bail!("snapshot has {inconsistencies} inconsistencies");
            }
            info!(groups = snapshot.groups.len(), "snapshot is consistent");
            Ok(())
        }
    }
}
