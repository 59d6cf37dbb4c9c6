//! Health check endpoint

use crate::server::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    database: &'static str,
    version: &'static str,
}

/// Health check handler
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let database = match state.storage.health_check().await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    let status = HealthStatus {
        status: if database == "up" { "healthy" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    };

    if database == "up" {
        Ok(HttpResponse::Ok().json(status))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(status))
    }
}
