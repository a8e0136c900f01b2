//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no aggregation logic.
//!
//! - **users_api**: reqwest client for the upstream paginated users API

pub mod users_api;
