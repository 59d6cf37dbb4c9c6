//! Authentication endpoints

use crate::core::models::User;
use crate::server::AppState;
use crate::server::middleware::helpers::authenticate;
use crate::server::routes::ApiResponse;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(get_current_user)),
    );
}

/// User login request
#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Login response with access token
#[derive(Debug, Serialize)]
struct LoginResponse {
    user: UserInfo,
    access_token: String,
    expires_in: u64,
}

/// Public view of a user
#[derive(Debug, Serialize)]
struct UserInfo {
    id: uuid::Uuid,
    name: String,
    email: String,
    role_id: Option<uuid::Uuid>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role_id: user.role_id,
        }
    }
}

/// User login endpoint
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    match state.auth.login(&request.email, &request.password).await {
        Ok((user, token)) => {
            info!("User logged in: {}", user.email);
            let response = LoginResponse {
                user: UserInfo::from(&user),
                access_token: token,
                expires_in: state.auth.config().jwt_expiration,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
        }
        Err(e) => {
            warn!("Login failed for {}: {}", request.email, e);
            // A single message for both unknown email and wrong password
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error(
                "Invalid email or password".to_string(),
            )))
        }
    }
}

/// Current user endpoint
async fn get_current_user(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = authenticate(&state, &req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserInfo::from(&user))))
}
