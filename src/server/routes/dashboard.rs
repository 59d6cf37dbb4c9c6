//! Dashboard endpoint
//!
//! Available to any authenticated user. Reports whether the caller passes
//! the admin predicate; admin callers additionally get the user count.

use crate::server::AppState;
use crate::server::middleware::helpers::authenticate;
use crate::server::routes::{ApiResponse, error_response};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard));
}

/// Dashboard response
#[derive(Debug, Serialize)]
struct DashboardData {
    is_admin: bool,
    /// Only present for admin callers
    #[serde(skip_serializing_if = "Option::is_none")]
    user_count: Option<u64>,
}

/// Dashboard handler
async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = authenticate(&state, &req).await?;

    let is_admin = match state.auth.rbac().is_admin(&user).await {
        Ok(value) => value,
        Err(e) => return Ok(error_response(&e)),
    };

    // The site figures stay admin-only
    let user_count = if is_admin {
        match state.admin.count_users().await {
            Ok(value) => Some(value),
            Err(e) => return Ok(error_response(&e)),
        }
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(DashboardData {
        is_admin,
        user_count,
    })))
}
