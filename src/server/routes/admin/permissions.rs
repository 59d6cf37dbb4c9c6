//! Permission management endpoints

use crate::server::AppState;
use crate::server::routes::{ApiResponse, error_response, see_other};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Configure permission management routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/permissions", web::get().to(list_permissions))
        .route("/permissions", web::post().to(create_permission))
        .route("/permissions/{id}", web::delete().to(delete_permission));
}

/// Permission creation request
#[derive(Debug, Deserialize)]
struct CreatePermissionRequest {
    name: String,
}

/// List all permissions
async fn list_permissions(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.admin.list_permissions().await {
        Ok(permissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(permissions))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Create a permission
async fn create_permission(
    state: web::Data<AppState>,
    request: web::Json<CreatePermissionRequest>,
) -> ActixResult<HttpResponse> {
    match state.admin.create_permission(&request.name).await {
        Ok(permission) => {
            info!("Permission created: {}", permission.name);
            Ok(see_other("/admin/permissions"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Delete a permission that no role grants
async fn delete_permission(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let permission_id = path.into_inner();

    match state.admin.delete_permission(permission_id).await {
        Ok(()) => {
            info!("Permission deleted: {}", permission_id);
            Ok(see_other("/admin/permissions"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
