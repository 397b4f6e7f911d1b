//! HTTP handlers.

pub mod entrepreneur;
pub mod health;
pub mod invalidate;
pub mod metrics;
