//! Domain ports for the hexagonal boundary.
//!
//! - [`UserSource`] is driven by the aggregation and implemented by outbound
//!   adapters that talk to the upstream users API.
//! - [`DepartmentStatsQuery`] drives the aggregation and is called by inbound
//!   adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod department_stats_query;
mod user_source;

#[cfg(test)]
pub use department_stats_query::MockDepartmentStatsQuery;
pub use department_stats_query::{DepartmentStatsQuery, FixtureDepartmentStatsQuery};
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserPage, UserSource, UserSourceError};
