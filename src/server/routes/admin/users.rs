//! User management endpoints

use crate::core::admin::users::NewUser;
use crate::core::models::{Role, UserWithRole};
use crate::server::AppState;
use crate::server::middleware::helpers::gated_user;
use crate::server::routes::{ApiResponse, error_response, see_other};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Configure user management routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}/role", web::put().to(assign_role))
        .route("/users/{id}", web::delete().to(delete_user));
}

/// User creation request
#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
    role_id: Uuid,
}

/// Role assignment request
#[derive(Debug, Deserialize)]
struct AssignRoleRequest {
    role_id: Uuid,
}

/// Listing payload: users plus the roles available for assignment
#[derive(Debug, Serialize)]
struct UserListing {
    users: Vec<UserWithRole>,
    roles: Vec<Role>,
}

/// List users together with their roles
async fn list_users(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let users = match state.admin.list_users().await {
        Ok(users) => users,
        Err(e) => return Ok(error_response(&e)),
    };
    let roles = match state.admin.list_roles().await {
        Ok(roles) => roles,
        Err(e) => return Ok(error_response(&e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserListing { users, roles })))
}

/// Create a user and redirect to the listing
async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let new_user = NewUser {
        name: request.name,
        email: request.email,
        password: request.password,
        password_confirmation: request.password_confirmation,
        role_id: request.role_id,
    };

    match state.admin.create_user(new_user).await {
        Ok(user) => {
            info!("User created: {}", user.email);
            Ok(see_other("/admin/users"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Move a user to a different role
async fn assign_role(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<AssignRoleRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    match state.admin.reassign_role(user_id, request.role_id).await {
        Ok(()) => {
            info!("User {} reassigned to role {}", user_id, request.role_id);
            Ok(see_other("/admin/users"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Delete a user, refusing self-deletion
async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let acting = gated_user(&req)?;
    let target_id = path.into_inner();

    match state.admin.delete_user(&acting, target_id).await {
        Ok(()) => {
            info!("User deleted: {}", target_id);
            Ok(see_other("/admin/users"))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
