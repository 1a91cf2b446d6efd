//! Shared HTTP plumbing for the hello workspace services.

pub mod config;
pub mod cors;
pub mod health;
pub mod middleware;
pub mod tracing;
