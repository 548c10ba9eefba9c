//! Shared constants, configuration and orbital helpers

pub mod config;
pub mod orbital;
