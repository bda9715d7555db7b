//! This crate is intended to contain code that is required to provide or
//! improve the observability of the deployer. That includes initialization
//! logic for logging and the panic hook that routes panics into the logs.
pub mod config;
pub mod tracing;

pub use config::Config;
