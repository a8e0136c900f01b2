//! Domain primitives and services for department statistics.
//!
//! Purpose: turn pages of upstream user records into per-department
//! summaries. Everything here is transport agnostic; adapters live under
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - AgeRange / merge_age: `"min-max"` codec with an empty sentinel.
//! - UserRecord / Gender: the fields of an upstream user the aggregation reads.
//! - DepartmentAggregate / AggregateMap: per-department accumulators.
//! - process_batch: folds one batch of records into an AggregateMap.
//! - DepartmentStatsService: the pagination driver behind the HTTP endpoint.
//! - Error / ErrorCode: transport-agnostic failure type.

pub mod age_range;
mod department;
mod department_stats_service;
pub mod error;
pub mod ports;
mod reducer;
mod trace_id;
mod user_record;

pub use self::age_range::{AgeRange, ParseAgeRangeError, merge_age};
pub use self::department::{AggregateMap, DepartmentAggregate};
pub use self::department_stats_service::DepartmentStatsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::reducer::process_batch;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_record::{Gender, ParseGenderError, UserRecord};
