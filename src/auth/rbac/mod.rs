//! Role-based access control
//!
//! Role to permission resolution and the admin-area gate built on it.

mod system;
#[cfg(test)]
mod tests;
mod types;

pub use system::RbacSystem;
pub use types::GateDecision;
