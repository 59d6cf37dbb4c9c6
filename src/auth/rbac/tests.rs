//! Tests for role-based access control

use crate::auth::rbac::{GateDecision, RbacSystem};
use crate::config::{AuthConfig, DatabaseConfig};
use crate::core::models::{Permission, Role, User};
use crate::storage::StorageLayer;
use std::sync::Arc;
use uuid::Uuid;

async fn create_test_rbac(admin_permissions: &[&str]) -> (RbacSystem, Arc<StorageLayer>) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    };
    let storage = Arc::new(StorageLayer::new(&config).await.unwrap());

    let auth_config = AuthConfig {
        admin_permissions: admin_permissions.iter().map(|s| s.to_string()).collect(),
        ..AuthConfig::default()
    };

    (
        RbacSystem::new(&auth_config, storage.clone()),
        storage,
    )
}

async fn create_role_with(storage: &StorageLayer, role_name: &str, perms: &[&str]) -> Uuid {
    let mut ids = Vec::new();
    for name in perms {
        // Reuse a permission from an earlier role in the same test
        let permission = match storage.db().find_permission_by_name(name).await.unwrap() {
            Some(existing) => existing,
            None => storage
                .db()
                .create_permission(&Permission::new(name.to_string()))
                .await
                .unwrap(),
        };
        ids.push(permission.id);
    }
    let role = storage
        .db()
        .create_role(&Role::new(role_name.to_string()), &ids)
        .await
        .unwrap();
    role.id
}

fn user_with_role(role_id: Option<Uuid>) -> User {
    User::new(
        "Test".to_string(),
        "test@example.com".to_string(),
        "irrelevant-hash".to_string(),
        role_id,
    )
}

#[test]
fn test_gate_decision_is_allowed() {
    assert!(GateDecision::Allow.is_allowed());
    assert!(!GateDecision::Deny.is_allowed());
}

#[tokio::test]
async fn test_permission_lookup_matches_grants() {
    let (rbac, storage) = create_test_rbac(&["create", "edit"]).await;
    let role_id = create_role_with(&storage, "editor", &["view", "edit"]).await;
    let user = user_with_role(Some(role_id));

    assert!(rbac.user_has_permission(&user, "view").await.unwrap());
    assert!(rbac.user_has_permission(&user, "edit").await.unwrap());
    assert!(!rbac.user_has_permission(&user, "create").await.unwrap());
}

#[tokio::test]
async fn test_is_admin_requires_every_configured_permission() {
    let (rbac, storage) = create_test_rbac(&["create", "edit"]).await;

    let editor = create_role_with(&storage, "editor", &["edit"]).await;
    assert!(!rbac.is_admin(&user_with_role(Some(editor))).await.unwrap());

    let full = create_role_with(&storage, "admin", &["create", "edit"]).await;
    assert!(rbac.is_admin(&user_with_role(Some(full))).await.unwrap());
}

#[tokio::test]
async fn test_gate_denies_anonymous() {
    let (rbac, _storage) = create_test_rbac(&["create", "edit"]).await;

    let decision = rbac.check_admin_access(None).await.unwrap();
    assert_eq!(decision, GateDecision::Deny);
}

#[tokio::test]
async fn test_gate_denies_user_without_role() {
    let (rbac, _storage) = create_test_rbac(&["create", "edit"]).await;

    let user = user_with_role(None);
    let decision = rbac.check_admin_access(Some(&user)).await.unwrap();
    assert_eq!(decision, GateDecision::Deny);
}

#[tokio::test]
async fn test_gate_denies_dangling_role_reference() {
    let (rbac, _storage) = create_test_rbac(&["create", "edit"]).await;

    let user = user_with_role(Some(Uuid::new_v4()));
    let decision = rbac.check_admin_access(Some(&user)).await.unwrap();
    assert_eq!(decision, GateDecision::Deny);
}

#[tokio::test]
async fn test_gate_allows_admin_role() {
    let (rbac, storage) = create_test_rbac(&["create", "edit"]).await;
    let role_id = create_role_with(&storage, "admin", &["view", "create", "edit"]).await;

    let user = user_with_role(Some(role_id));
    let decision = rbac.check_admin_access(Some(&user)).await.unwrap();
    assert_eq!(decision, GateDecision::Allow);
}

#[tokio::test]
async fn test_custom_admin_permission_set() {
    let (rbac, storage) = create_test_rbac(&["publish"]).await;

    let publisher = create_role_with(&storage, "publisher", &["publish"]).await;
    let user = user_with_role(Some(publisher));
    assert!(rbac.is_admin(&user).await.unwrap());
    assert_eq!(rbac.admin_permissions(), &["publish".to_string()]);
}
