use std::fmt::Display;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::{
    alerts::AlertConfig,
    attestations::missed_attestations_chart,
    events::{classify_events, ValidatorFilter},
    groups::{select_group_view, GroupDraft, GroupFilter, GroupSelection},
    stats::stats_for_filter,
    time_frames::TimeRange,
    validators::StatusCounts,
};

use super::StateExtension;

fn error_response(status: StatusCode, message: impl Display) -> Response {
    (status, Json(json!({ "message": message.to_string() }))).into_response()
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    filter: Option<String>,
}

impl FilterParams {
    fn group_filter(&self) -> GroupFilter {
        self.filter
            .as_deref()
            .map(GroupFilter::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct EventsParams {
    validators: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    range: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupViewResponse {
    selection: GroupSelection,
    status_counts: StatusCounts,
}

pub async fn groups(state: StateExtension) -> impl IntoResponse {
    Json(state.snapshot.groups.clone())
}

pub async fn group_view(
    state: StateExtension,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let filter = params.group_filter();

    match select_group_view(&state.snapshot.groups, &filter) {
        Ok(selection) => {
            if let GroupSelection::FellBackToFirst { requested, group } = &selection {
                warn!(
                    requested = %requested,
                    fallback = %group.id,
                    "unknown group requested, showing first group"
                );
            }
            let status_counts = selection.group().status_counts();
            Json(GroupViewResponse {
                selection,
                status_counts,
            })
            .into_response()
        }
        Err(err) => error_response(StatusCode::NOT_FOUND, err),
    }
}

pub async fn stats(state: StateExtension, Query(params): Query<FilterParams>) -> impl IntoResponse {
    let filter = params.group_filter();
    Json(stats_for_filter(
        &state.snapshot.stats,
        &state.snapshot.groups,
        &filter,
    ))
}

pub async fn events(state: StateExtension, Query(params): Query<EventsParams>) -> Response {
    let validator_filter = params.validators.as_deref().map(ValidatorFilter::from);

    if let Some(validator_filter) = &validator_filter {
        if !validator_filter.unmatched_tokens().is_empty() {
            debug!(
                unmatched = ?validator_filter.unmatched_tokens(),
                "validator filter has tokens matching no index"
            );
        }
    }

    let classified = classify_events(&state.snapshot.events, validator_filter.as_ref());
    Json(classified).into_response()
}

pub async fn missed_attestations(
    state: StateExtension,
    Query(params): Query<RangeParams>,
) -> Response {
    let time_range = match params.range.as_deref().map(str::parse::<TimeRange>) {
        None => TimeRange::default(),
        Some(Ok(time_range)) => time_range,
        Some(Err(err)) => return error_response(StatusCode::BAD_REQUEST, err),
    };

    Json(missed_attestations_chart(
        &state.snapshot.missed_attestations,
        time_range,
        Utc::now(),
    ))
    .into_response()
}

pub async fn alert_config(state: StateExtension) -> impl IntoResponse {
    Json(state.snapshot.alert_config.clone())
}

pub async fn save_alert_config(
    state: StateExtension,
    Json(config): Json<AlertConfig>,
) -> Response {
    if let Err(err) = config.validate() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, err);
    }

    match state.store.save_alert_config(&config).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => {
            error!(%err, "failed to save alert configuration");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn create_group(state: StateExtension, Json(draft): Json<GroupDraft>) -> Response {
    if let Err(err) = draft.validate() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, err);
    }

    match state.store.create_group(&draft).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => {
            error!(%err, "failed to create group");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn has_group(state: &StateExtension, group_id: &str) -> bool {
    state
        .snapshot
        .groups
        .iter()
        .any(|group| group.id == group_id)
}

pub async fn update_group(
    state: StateExtension,
    Path(group_id): Path<String>,
    Json(draft): Json<GroupDraft>,
) -> Response {
    if !has_group(&state, &group_id) {
        return error_response(StatusCode::NOT_FOUND, format!("unknown group {group_id}"));
    }

    if let Err(err) = draft.validate() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, err);
    }

    match state.store.update_group(&group_id, &draft).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => {
            error!(%err, group_id = %group_id, "failed to update group");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn delete_group(state: StateExtension, Path(group_id): Path<String>) -> Response {
    if !has_group(&state, &group_id) {
        return error_response(StatusCode::NOT_FOUND, format!("unknown group {group_id}"));
    }

    match state.store.delete_group(&group_id).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => {
            error!(%err, group_id = %group_id, "failed to delete group");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
