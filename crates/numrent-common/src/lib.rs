//! # numrent-common
//!
//! Shared types, configuration, error handling, and utilities used across all
//! numrent crates. This is the foundation layer — no business logic, just
//! primitives and contracts.

pub mod any_row;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod validation;
