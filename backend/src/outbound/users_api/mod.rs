//! Users API outbound adapter.
//!
//! This module provides a reqwest implementation of the `UserSource` port
//! against a dummyjson-style `GET /users?skip=N` endpoint.

mod dto;
mod http_source;

pub use http_source::UsersApiSource;
