//! synthmon server binary.
//!
//! Mock telemetry backend for frontend and integration testing: every
//! metric is a uniformly random integer regenerated once per second and
//! served over plain-text HTTP endpoints. Nothing is collected from the
//! host.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use synthmon_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Missing file falls back to defaults (8080, 1 s tick, capacity 10).
    let cfg = config::load_or_default("synthmon.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "synthmon-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
