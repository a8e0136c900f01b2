//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use department_stats::Trace;
#[cfg(debug_assertions)]
use department_stats::doc::ApiDoc;
use department_stats::inbound::http::department_stats::get_department_stats;
use department_stats::inbound::http::health::{HealthState, live, ready};
use department_stats::inbound::http::state::HttpState;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api").service(get_department_stats);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        department_stats,
    } = config;
    let http_state = web::Data::new(HttpState::new(department_stats));

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail the liveness check once `shutdown` resolves.
pub fn fail_liveness_on<F>(health_state: web::Data<HealthState>, shutdown: F)
where
    F: Future<Output = ()> + 'static,
{
    actix_web::rt::spawn(async move {
        shutdown.await;
        health_state.mark_unhealthy();
        info!("shutdown requested; liveness check now failing");
    });
}
