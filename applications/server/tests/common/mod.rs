//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use postbox_core::Store;
use postbox_server::{api, services::password::MIN_COST, AppState, PasswordService};
use postbox_storage::SqliteStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router plus handles kept alive for the duration of a test
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn Store>,
    pub passwords: PasswordService,
    _temp_dir: TempDir,
}

/// Create an app backed by a fresh SQLite file with the schema applied
pub async fn create_test_app() -> Result<TestApp> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = postbox_storage::create_pool(&db_url).await?;
    postbox_storage::init_schema(&pool).await?;
    let store: Arc<dyn Store> = Arc::new(SqliteStore::new(pool));

    // Cheapest cost keeps the suite fast
    let passwords = PasswordService::new(MIN_COST);

    let router = api::router(AppState::new(Arc::clone(&store), passwords));

    Ok(TestApp {
        router,
        store,
        passwords,
        _temp_dir: temp_dir,
    })
}

impl TestApp {
    /// Send one request and return status plus JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body_bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, json)
    }

    /// Register through the API and return the new id
    pub async fn register(&self, username: &str, password: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/user/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": format!("{}@x.com", username),
                    "password": password,
                    "role": "user"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    /// Log in through the API and return the status
    pub async fn login(&self, id: i64, password: &str) -> StatusCode {
        let (status, _) = self
            .send(
                Method::POST,
                "/api/user/login",
                Some(serde_json::json!({ "id": id, "password": password })),
            )
            .await;
        status
    }
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "a";
    pub const TEST_PASSWORD: &str = "secret";
    pub const NEW_PASSWORD: &str = "n3w-secret";
}
