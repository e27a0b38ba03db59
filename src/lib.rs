//! Resource synchronization layer for a hotel client interceptor.
//!
//! This library resolves the hotel's web-service endpoints from
//! configuration and reloads game-definition resources whenever the
//! interceptor attaches to a new game session: the connected host is mapped
//! to its web domain, any in-flight load for a stale session is cancelled,
//! and the endpoint table and game datasets are rebuilt for the new domain.

// layers
pub mod config;
pub mod endpoints;
pub mod error;
pub mod gamedata;
pub mod hotel;
pub mod sync;

// shared library
pub mod common;
