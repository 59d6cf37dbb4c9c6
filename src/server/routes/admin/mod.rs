//! Administrative endpoints
//!
//! All routes in this scope sit behind the admin gate.

pub mod permissions;
pub mod roles;
pub mod users;

use crate::server::middleware::AdminGate;
use actix_web::web;

/// Configure the gated administrative scope
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminGate)
            .configure(users::configure_routes)
            .configure(roles::configure_routes)
            .configure(permissions::configure_routes),
    );
}
