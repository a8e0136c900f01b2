//! Department statistics endpoint.
//!
//! ```text
//! GET /api/users
//! ```
//!
//! Every request runs a fresh aggregation over the whole upstream dataset;
//! nothing is cached between requests.

use std::panic::AssertUnwindSafe;

use actix_web::{get, web};
use futures_util::FutureExt;
use tracing::error;

use crate::domain::{AggregateMap, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::UNKNOWN_ERROR_MESSAGE;
use crate::inbound::http::schemas::{DepartmentStatsSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Aggregate all upstream users into per-department statistics.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use department_stats::inbound::http::department_stats::get_department_stats;
/// use department_stats::inbound::http::state::HttpState;
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(web::scope("/api").service(get_department_stats));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    description = "Fetch every upstream user page and return gender counts, age range, hair colour histogram and name-to-postal-code map per department.",
    responses(
        (status = 200, description = "Statistics keyed by department name", body = DepartmentStatsSchema),
        (status = 500, description = "Aggregation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getDepartmentStats"
)]
#[get("/users")]
pub async fn get_department_stats(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AggregateMap>> {
    // A panic inside the aggregation carries no domain error to report.
    let outcome = AssertUnwindSafe(async { state.department_stats.department_stats().await })
        .catch_unwind()
        .await;
    match outcome {
        Ok(stats) => Ok(web::Json(stats?)),
        Err(_) => {
            error!("department aggregation panicked");
            Err(Error::internal(UNKNOWN_ERROR_MESSAGE))
        }
    }
}
