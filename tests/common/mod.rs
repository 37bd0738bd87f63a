//! Test helpers for Web API tests.

use std::sync::Arc;

use axum_test::TestServer;
use maskcalc::web::handlers::AppState;
use maskcalc::web::create_router;
use maskcalc::{salted_hash, CredentialRecord, CredentialRepository, Database, TokenAuthority};

/// Signing secret used by the test server.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Password for the seeded viewer account.
pub const BOB_PASSWORD: &str = "thisIsNotAPasswordBob";

/// Create a test server backed by an in-memory store seeded with users.
///
/// Seeded accounts: `bob` (role `viewer`) and `alice` (role `admin`).
pub async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    {
        let repo = CredentialRepository::new(db.pool());
        seed_user(&repo, "bob", BOB_PASSWORD, "bobsalt", "viewer").await;
        seed_user(&repo, "alice", "alicePassword123", "alicesalt", "admin").await;
    }

    let tokens = Arc::new(TokenAuthority::new(TEST_SECRET));
    let app_state = Arc::new(AppState::new(db, tokens));
    let router = create_router(app_state, &[]);

    TestServer::new(router).expect("Failed to create test server")
}

async fn seed_user(
    repo: &CredentialRepository<'_>,
    username: &str,
    password: &str,
    salt: &str,
    role: &str,
) {
    repo.insert(&CredentialRecord {
        username: username.to_string(),
        password_hash: salted_hash(password, salt),
        salt: salt.to_string(),
        role: role.to_string(),
    })
    .await
    .expect("Failed to seed test user");
}

/// Login and return the issued token.
pub async fn login_token(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "username": username,
            "password": password
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}
