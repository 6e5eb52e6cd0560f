//! Commands module - CLI command implementations.

pub mod check_config;
pub mod serve;
