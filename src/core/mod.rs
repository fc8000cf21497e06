//! Core library components.
//!
//! Configuration loading, store gateways and the sync policies that decide
//! what gets written where.

pub mod config;
pub mod constants;
pub mod names;
pub mod password;
pub mod store;
pub mod sync;
pub mod types;
