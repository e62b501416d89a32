//! HTTP route handlers for Commune

pub mod health;

pub use health::{health_router, HealthState};
