//! Shared axum and observability glue for Transify services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
