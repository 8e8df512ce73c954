//! eKill background core — badge-state synchronization for the element-killer extension.
//!
//! This library crate exposes all modules for use by the demo binary and integration tests.

pub mod coordinator;
pub mod host;
pub mod services;
pub mod types;
