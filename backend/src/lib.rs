//! Per-department user statistics service.
//!
//! The library pulls every page from the upstream users API, folds the
//! records into per-department aggregates, and serves them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
