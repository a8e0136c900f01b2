//! HTTP inbound adapter exposing REST endpoints.

pub mod department_stats;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
