//! # RBAC Admin
//!
//! A role-based access control service with an administrative HTTP API.
//! Users hold a single role, roles grant a set of named permissions, and
//! a configurable gate guards the management surface.
//!
//! ## Features
//!
//! - **Users, roles, permissions**: Full management API with referential
//!   integrity between the three
//! - **Admin gate**: Permission-derived access decisions on every request,
//!   with denied callers redirected rather than rejected
//! - **JWT authentication**: Stateless bearer tokens with argon2 password
//!   hashing
//! - **SQLite or Postgres**: Backed by sea-orm with embedded migrations
//! - **Bootstrap seeding**: First start provisions default permissions,
//!   roles, and an administrator account
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_admin::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Loads config/admin.yaml, falling back to environment variables
//!     server::builder::run_server().await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{AdminError, Result};
