//! Core domain logic
//!
//! Domain models and the administrative mutation operations.

pub mod admin;
pub mod models;
