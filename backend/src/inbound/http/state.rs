//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::{DepartmentStatsQuery, FixtureDepartmentStatsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub department_stats: Arc<dyn DepartmentStatsQuery>,
}

impl HttpState {
    /// Construct state around the department statistics use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use department_stats::domain::ports::FixtureDepartmentStatsQuery;
    /// use department_stats::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureDepartmentStatsQuery));
    /// let _stats = state.department_stats.clone();
    /// ```
    pub fn new(department_stats: Arc<dyn DepartmentStatsQuery>) -> Self {
        Self { department_stats }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureDepartmentStatsQuery))
    }
}
