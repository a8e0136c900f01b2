//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape for documentation only.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// Error envelope returned with `500 Internal Server Error`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable description of the failure.
    #[schema(example = "failed to fetch users at offset 30: users API timed out")]
    message: String,
}

/// Statistics for one department.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DepartmentAggregateSchema {
    /// Number of male users.
    #[schema(example = 1)]
    male: u64,
    /// Number of female users.
    #[schema(example = 1)]
    female: u64,
    /// Youngest and oldest age as `min-max`; empty when no ages were seen.
    #[schema(example = "25-30")]
    age_range: String,
    /// Occurrences of each hair colour.
    #[schema(example = json!({ "Black": 1, "Blonde": 1 }))]
    hair: BTreeMap<String, u64>,
    /// Postal code keyed by first name followed by last name.
    #[schema(example = json!({ "JohnDoe": "12345", "JaneSmith": "54321" }))]
    address_user: BTreeMap<String, String>,
}

/// Department name to its statistics.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DepartmentStatsSchema(BTreeMap<String, DepartmentAggregateSchema>);
