//! Service entry-point: loads settings, wires the users API adapter into the
//! aggregation service, and serves the REST endpoint with OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use department_stats::domain::DepartmentStatsService;
use department_stats::inbound::http::health::HealthState;
use department_stats::outbound::users_api::UsersApiSource;
use department_stats::settings::AppSettings;
use server::{ServerConfig, create_server, fail_liveness_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let upstream_base = settings.upstream_base().map_err(std::io::Error::other)?;

    let source = UsersApiSource::new(&upstream_base, settings.upstream_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build users API client: {e}")))?
        .with_page_size(settings.page_size());
    info!(users_url = %source.users_url(), "upstream users API configured");
    let service = DepartmentStatsService::new(Arc::new(source));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(service)),
    )?;
    fail_liveness_on(health_state, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "shutdown signal listener failed");
            std::future::pending::<()>().await;
        }
    });

    info!("Server running on http://{bind_addr}");
    info!("Transformed data endpoint: http://{bind_addr}/api/users");
    server.await
}
