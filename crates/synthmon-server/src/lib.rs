//! synthmon server library entry.
//!
//! This crate wires the config loader, per-metric bounded feeds, generator
//! tasks, route handlers, and ops endpoints into the mock telemetry server.
//! It is intended to be consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod feeds;
pub mod gen;
pub mod obs;
pub mod ops;
pub mod router;
pub mod routes;
