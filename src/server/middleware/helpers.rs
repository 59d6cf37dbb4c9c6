//! Helper functions for middleware and handlers

use crate::core::models::User;
use crate::server::AppState;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest, web};

/// Extract a bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Resolve the authenticated user for a request, or fail with 401
pub async fn authenticate(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<User, actix_web::Error> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing bearer token"))?;

    state
        .auth
        .authenticate_token(&token)
        .await
        .map_err(|_| actix_web::error::ErrorUnauthorized("Invalid or expired token"))
}

/// Read the user placed in request extensions by the admin gate
pub fn gated_user(req: &HttpRequest) -> Result<User, actix_web::Error> {
    req.extensions()
        .get::<User>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Missing request principal"))
}
