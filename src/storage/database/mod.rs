//! Database backend built on SeaORM

pub mod entities;
pub mod migration;

mod connection;
mod permission_ops;
mod role_ops;
mod user_ops;

pub use connection::Database;
