//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;

use crate::utils::error::AdminError;
use actix_web::http::header;
use actix_web::HttpResponse;
use tracing::error;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Map a service error to its HTTP response
pub(crate) fn error_response(err: &AdminError) -> HttpResponse {
    match err {
        AdminError::Validation(_) => {
            HttpResponse::BadRequest().json(ApiResponse::error(err.to_string()))
        }
        AdminError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::error(err.to_string()))
        }
        AdminError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::error(err.to_string()))
        }
        AdminError::Auth(_) => {
            HttpResponse::Unauthorized().json(ApiResponse::error(err.to_string()))
        }
        AdminError::Forbidden(_) => {
            HttpResponse::Forbidden().json(ApiResponse::error(err.to_string()))
        }
        _ => {
            error!("Request failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error("Internal server error".to_string()))
        }
    }
}

/// Successful mutations answer with a redirect to the listing route
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
