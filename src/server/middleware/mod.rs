//! HTTP middleware
//!
//! Request-level guards applied around route scopes.

pub mod admin_gate;
pub mod helpers;


pub use admin_gate::AdminGate;
