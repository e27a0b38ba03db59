//! Shared utilities: logging setup and timestamps.

pub mod logger;
pub mod time;
