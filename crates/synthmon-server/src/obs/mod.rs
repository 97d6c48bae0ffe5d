//! Lightweight in-process metrics (dependency-free rendering).
//!
//! Counters are stored as atomics behind `DashMap` and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod metrics;
