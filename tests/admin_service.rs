//! Integration test for the public crate API

use rbac_admin::auth::{AuthSystem, RbacSystem};
use rbac_admin::config::{AuthConfig, DatabaseConfig, SeedConfig};
use rbac_admin::core::admin::AdminService;
use rbac_admin::storage::StorageLayer;
use std::sync::Arc;

async fn in_memory_storage() -> Arc<StorageLayer> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    };
    Arc::new(StorageLayer::new(&config).await.unwrap())
}

#[tokio::test]
async fn test_bootstrap_then_login_and_authorize() {
    let storage = in_memory_storage().await;
    let admin = AdminService::new(storage.clone());

    let seed = SeedConfig {
        enabled: true,
        admin_name: "Administrator".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "integration-test-pw".to_string(),
    };
    admin.bootstrap(&seed).await.unwrap();

    let auth_config = AuthConfig::default();
    let auth = AuthSystem::new(&auth_config, storage.clone());
    let (user, token) = auth
        .login("admin@example.com", "integration-test-pw")
        .await
        .unwrap();

    let resolved = auth.authenticate_token(&token).await.unwrap();
    assert_eq!(resolved.id, user.id);

    let rbac = RbacSystem::new(&auth_config, storage);
    assert!(rbac.is_admin(&user).await.unwrap());
    for permission in rbac_admin::core::admin::SEED_PERMISSIONS {
        assert!(rbac.user_has_permission(&user, permission).await.unwrap());
    }
}

#[tokio::test]
async fn test_storage_health_check() {
    let storage = in_memory_storage().await;
    storage.health_check().await.unwrap();
}
