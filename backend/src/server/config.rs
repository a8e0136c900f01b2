//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use department_stats::domain::ports::DepartmentStatsQuery;

/// Inputs required to build the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) department_stats: Arc<dyn DepartmentStatsQuery>,
}

impl ServerConfig {
    /// Construct a server configuration serving the given statistics query.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, department_stats: Arc<dyn DepartmentStatsQuery>) -> Self {
        Self {
            bind_addr,
            department_stats,
        }
    }
}
