mod health;
mod routes;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    response::IntoResponse,
    routing::{get, put},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tracing::{debug, info};

use crate::{
    env::ENV_CONFIG,
    health::HealthCheckable,
    log,
    snapshot::Snapshot,
    store::{DashboardStore, DashboardStoreDiscard},
};

use self::health::ServeHealth;

pub type StateExtension = Extension<Arc<State>>;

pub struct State {
    pub health: ServeHealth,
    pub snapshot: Snapshot,
    pub store: Box<dyn DashboardStore + Send + Sync>,
}

impl State {
    pub fn new(snapshot: Snapshot, store: Box<dyn DashboardStore + Send + Sync>) -> Self {
        let health = ServeHealth::new(snapshot.groups.len(), chrono::Utc::now());
        Self {
            health,
            snapshot,
            store,
        }
    }
}

pub fn router(shared_state: Arc<State>) -> Router {
    Router::new()
        .route(
            "/api/v1/alert-config",
            get(routes::alert_config).put(routes::save_alert_config),
        )
        .route("/api/v1/events", get(routes::events))
        .route("/api/v1/group-view", get(routes::group_view))
        .route(
            "/api/v1/groups",
            get(routes::groups).post(routes::create_group),
        )
        .route(
            "/api/v1/groups/:group_id",
            put(routes::update_group).delete(routes::delete_group),
        )
        .route(
            "/api/v1/missed-attestations",
            get(routes::missed_attestations),
        )
        .route("/api/v1/stats", get(routes::stats))
        .route(
            "/healthz",
            get(|state: StateExtension| async move {
                state.health.health_status().into_response()
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(Extension(shared_state)),
        )
}

pub async fn start_server() -> anyhow::Result<()> {
    log::init();

    debug!(path = %ENV_CONFIG.snapshot_path, "loading snapshot");

    let snapshot = Snapshot::from_path(&ENV_CONFIG.snapshot_path)?;
    let inconsistencies = snapshot.warn_on_inconsistencies();

    info!(
        groups = snapshot.groups.len(),
        events = snapshot.events.len(),
        inconsistencies,
        "snapshot ready"
    );

    let shared_state = Arc::new(State::new(snapshot, Box::new(DashboardStoreDiscard)));
    let app = router(shared_state);

    let socket_addr: SocketAddr = ENV_CONFIG.bind_address().parse()?;

    info!(%socket_addr, "server listening");
    axum::Server::bind(&socket_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
