//! Integration test utilities for the rfap API
//!
//! This crate provides helpers for driving the router in-process against an
//! in-memory directory, and for end-to-end tests over HTTP against PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
