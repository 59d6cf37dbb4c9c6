//! Shared utilities
//!
//! Error types and password hashing helpers used across the service.

pub mod crypto;
pub mod error;
