//! Role management endpoints

use crate::core::models::{Permission, RoleWithPermissions};
use crate::server::AppState;
use crate::server::routes::{ApiResponse, error_response, see_other};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Configure role management routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/roles", web::get().to(list_roles))
        .route("/roles", web::post().to(create_role))
        .route("/roles/{id}", web::put().to(update_role))
        .route("/roles/{id}", web::delete().to(delete_role));
}

/// Role creation or update request
#[derive(Debug, Deserialize)]
struct RoleRequest {
    name: String,
    permission_ids: Vec<Uuid>,
}

/// Listing payload: roles plus the permissions available for granting
#[derive(Debug, Serialize)]
struct RoleListing {
    roles: Vec<RoleWithPermissions>,
    permissions: Vec<Permission>,
}

/// List roles together with their granted permissions
async fn list_roles(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let roles = match state.admin.list_roles_with_permissions().await {
        Ok(roles) => roles,
        Err(e) => return Ok(error_response(&e)),
    };
    let permissions = match state.admin.list_permissions().await {
        Ok(permissions) => permissions,
        Err(e) => return Ok(error_response(&e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(RoleListing { roles, permissions })))
}

/// Create a role with its permission set
async fn create_role(
    state: web::Data<AppState>,
    request: web::Json<RoleRequest>,
) -> ActixResult<HttpResponse> {
    match state
        .admin
        .create_role(&request.name, &request.permission_ids)
        .await
    {
        Ok(role) => {
            info!("Role created: {}", role.name);
            Ok(see_other("/admin/roles"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Rename a role and replace its permission set
async fn update_role(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<RoleRequest>,
) -> ActixResult<HttpResponse> {
    let role_id = path.into_inner();

    match state
        .admin
        .update_role(role_id, &request.name, &request.permission_ids)
        .await
    {
        Ok(()) => {
            info!("Role updated: {}", role_id);
            Ok(see_other("/admin/roles"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Delete a role that no user references
async fn delete_role(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let role_id = path.into_inner();

    match state.admin.delete_role(role_id).await {
        Ok(()) => {
            info!("Role deleted: {}", role_id);
            Ok(see_other("/admin/roles"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
