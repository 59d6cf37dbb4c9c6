//! Tests for the HTTP surface

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::core::admin::AdminService;
use crate::server::builder::ServerBuilder;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use std::sync::Arc;

const TEST_ADMIN_EMAIL: &str = "admin@example.com";
const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

async fn test_state() -> web::Data<AppState> {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();
    config.database.max_connections = 1;
    config.seed.admin_email = TEST_ADMIN_EMAIL.to_string();
    config.seed.admin_password = TEST_ADMIN_PASSWORD.to_string();

    let storage = Arc::new(StorageLayer::new(&config.database).await.unwrap());
    let auth = AuthSystem::new(&config.auth, storage.clone());
    let admin = AdminService::new(storage.clone());
    admin.bootstrap(&config.seed).await.unwrap();

    web::Data::new(AppState::new(config, auth, admin, storage))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .route(
                    "/health",
                    web::get().to(routes::health::health_check),
                )
                .configure(routes::auth::configure_routes)
                .configure(routes::dashboard::configure_routes)
                .configure(routes::admin::configure_routes),
        )
        .await
    };
}

macro_rules! login_token {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": TEST_ADMIN_EMAIL,
                "password": TEST_ADMIN_PASSWORD,
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&$app, req).await;
        body["data"]["access_token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_server_builder() {
    let builder = ServerBuilder::new();
    // Building without a config is refused
    assert!(builder.build().await.is_err());
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": TEST_ADMIN_EMAIL,
            "password": "wrong",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_scope_redirects_anonymous() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/admin/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, "/dashboard");
}

#[actix_web::test]
async fn test_admin_scope_allows_seeded_admin() {
    let state = test_state().await;
    let app = test_app!(state);
    let token = login_token!(app);

    let req = test::TestRequest::get()
        .uri("/admin/permissions")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_user_listing_includes_assignable_roles() {
    let state = test_state().await;
    let app = test_app!(state);
    let token = login_token!(app);

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 1);
    // The seeded admin and user roles ride along for the assignment form
    assert_eq!(body["data"]["roles"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_role_listing_includes_grantable_permissions() {
    let state = test_state().await;
    let app = test_app!(state);
    let token = login_token!(app);

    let req = test::TestRequest::get()
        .uri("/admin/roles")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let roles = body["data"]["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    let admin_role = roles.iter().find(|r| r["name"] == "admin").unwrap();
    assert_eq!(admin_role["permissions"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["permissions"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_role_creation_redirects_to_listing() {
    let state = test_state().await;
    let app = test_app!(state);
    let token = login_token!(app);

    let req = test::TestRequest::get()
        .uri("/admin/permissions")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let permission_id = body["data"][0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/admin/roles")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "name": "auditor",
            "permission_ids": [permission_id],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, "/admin/roles");
}

#[actix_web::test]
async fn test_dashboard_requires_authentication() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_dashboard_hides_user_count_from_non_admin() {
    let state = test_state().await;
    let app = test_app!(state);

    let user_role = state
        .admin
        .list_roles()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.name == "user")
        .unwrap();
    state
        .admin
        .create_user(crate::core::admin::NewUser {
            name: "Plain".to_string(),
            email: "plain@example.com".to_string(),
            password: "plain-password".to_string(),
            password_confirmation: "plain-password".to_string(),
            role_id: user_role.id,
        })
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "plain@example.com",
            "password": "plain-password",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let token = body["data"]["access_token"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["is_admin"], false);
    assert!(body["data"].get("user_count").is_none());
}

#[actix_web::test]
async fn test_dashboard_reports_admin_flag() {
    let state = test_state().await;
    let app = test_app!(state);
    let token = login_token!(app);

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["is_admin"], true);
    assert_eq!(body["data"]["user_count"], 1);
}
