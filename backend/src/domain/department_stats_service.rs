//! Pagination driver producing department statistics.
//!
//! One run walks the upstream collection strictly in order: the page at
//! offset N+1 is requested only after page N has been folded, because the
//! next offset depends on how many records the previous page carried. Each
//! run owns its [`AggregateMap`], so concurrent runs never share state.
//!
//! A failed page fetch aborts the run with a typed error; the driver never
//! substitutes an empty page for a failure.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Advance, OffsetCursor};
use tracing::{debug, info, warn};

use super::department::AggregateMap;
use super::error::Error;
use super::ports::{DepartmentStatsQuery, UserSource, UserSourceError};
use super::reducer::process_batch;

/// Domain service running paginated aggregation over a [`UserSource`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use department_stats::domain::DepartmentStatsService;
/// use department_stats::domain::ports::FixtureUserSource;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let service = DepartmentStatsService::new(Arc::new(FixtureUserSource::default()));
/// let stats = service.run_aggregation().await.expect("aggregation");
/// assert!(stats.is_empty());
/// # });
/// ```
#[derive(Clone)]
pub struct DepartmentStatsService {
    source: Arc<dyn UserSource>,
}

impl DepartmentStatsService {
    /// Build the service around an upstream source.
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    /// Fetch every upstream page and fold it into a fresh aggregate map.
    ///
    /// The walk stops once the offset reaches the most recently reported
    /// total, or as soon as a page covers no upstream records.
    ///
    /// # Errors
    /// Returns [`Error`] with [`super::ErrorCode::UpstreamUnavailable`] or
    /// [`super::ErrorCode::UpstreamInvalidResponse`] when any page fetch
    /// fails; partial results are discarded.
    pub async fn run_aggregation(&self) -> Result<AggregateMap, Error> {
        let mut cursor = OffsetCursor::new();
        let mut map = AggregateMap::new();
        let mut pages = 0_u64;

        while cursor.has_more() {
            let skip = cursor.offset();
            let page = self.source.fetch_page(skip).await.map_err(|error| {
                warn!(%error, skip, pages, "user page fetch failed; aborting aggregation");
                map_source_error(skip, &error)
            })?;
            pages += 1;
            debug!(
                skip,
                fetched = page.len(),
                dropped = page.dropped,
                total = page.total,
                "fetched user page"
            );

            let advance = cursor.advance(&page);
            process_batch(&page.items, &mut map);

            if advance == Advance::Exhausted
                && page.offset_delta() == 0
                && cursor.total().is_some_and(|total| cursor.offset() < total)
            {
                warn!(
                    offset = cursor.offset(),
                    total = page.total,
                    "upstream returned an empty page before the reported total"
                );
            }
        }

        info!(
            departments = map.len(),
            records = cursor.offset(),
            pages,
            "department aggregation complete"
        );
        Ok(map)
    }
}

fn map_source_error(skip: u64, error: &UserSourceError) -> Error {
    let message = format!("failed to fetch users at offset {skip}: {error}");
    match error {
        UserSourceError::Decode { .. } => Error::upstream_invalid_response(message),
        UserSourceError::Transport { .. }
        | UserSourceError::Timeout { .. }
        | UserSourceError::Status { .. } => Error::upstream_unavailable(message),
    }
}

#[async_trait]
impl DepartmentStatsQuery for DepartmentStatsService {
    async fn department_stats(&self) -> Result<AggregateMap, Error> {
        self.run_aggregation().await
    }
}
