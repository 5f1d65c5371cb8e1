//! # tp-api
//!
//! JSON API for Team Planner, mounted under `/api/v1`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::router;

#[cfg(test)]
pub(crate) mod testing;
