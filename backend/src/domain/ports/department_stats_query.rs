//! Driving port for the department statistics use-case.
//!
//! Inbound adapters call this port to run one aggregation; they never see the
//! upstream source or the pagination loop behind it.

use async_trait::async_trait;

use crate::domain::{AggregateMap, Error};

/// Domain use-case port producing per-department statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentStatsQuery: Send + Sync {
    /// Run one full aggregation over every upstream user.
    async fn department_stats(&self) -> Result<AggregateMap, Error>;
}

/// Fixture query returning no departments.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDepartmentStatsQuery;

#[async_trait]
impl DepartmentStatsQuery for FixtureDepartmentStatsQuery {
    async fn department_stats(&self) -> Result<AggregateMap, Error> {
        Ok(AggregateMap::new())
    }
}
