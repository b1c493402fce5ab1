pub mod alerts;
pub mod attestations;
pub mod env;
pub mod events;
pub mod groups;
mod health;
pub mod log;
mod serve;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod time_frames;
pub mod units;
pub mod validators;

pub use events::{classify_events, ClassifiedEvents, Incident, ValidatorEvent, ValidatorFilter};
pub use groups::{select_group_view, Group, GroupFilter, GroupSelection, SelectGroupError};
pub use serve::start_server;
pub use snapshot::{Snapshot, SnapshotError};
