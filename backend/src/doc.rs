//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the department statistics endpoint, the health
//! probes, and the schema wrappers from [`crate::inbound::http::schemas`].
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{DepartmentAggregateSchema, DepartmentStatsSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Department stats API",
        description = "Per-department statistics aggregated from the upstream users API."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::department_stats::get_department_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(DepartmentStatsSchema, DepartmentAggregateSchema, ErrorSchema)),
    tags(
        (name = "users", description = "Department statistics derived from users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
