use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tourist_guide::router::init_router;
use tourist_guide::state::AppState;
use tourist_guide::tourist_auth::{create_access_token, create_access_token_at};
use tourist_guide::tourist_config::{CorsConfig, JwtConfig, ServerConfig};
use tourist_guide::tourist_db::{Collection, DocumentStore, MemoryDocumentStore};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryDocumentStore>,
}

impl TestApp {
    /// Sends `request` and returns the status with the body parsed as JSON,
    /// or as a JSON string when it is not JSON.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn seed_user(&self, email: &str, role: Option<&str>) -> Uuid {
        let mut user = serde_json::json!({ "email": email, "name": "Test User" });
        if let Some(role) = role {
            user["role"] = Value::String(role.to_string());
        }
        self.seed(Collection::Users, user).await
    }

    pub async fn seed(&self, collection: Collection, document: Value) -> Uuid {
        self.store
            .insert_one(collection, document.as_object().cloned().unwrap())
            .await
            .unwrap()
            .inserted_id
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState::new(
        store.clone(),
        jwt_config(),
        CorsConfig::from_vars(|_| None),
        ServerConfig::from_vars(|_| None).unwrap(),
    );

    TestApp {
        router: init_router(state),
        store,
    }
}

pub fn token_for(email: &str) -> String {
    create_access_token(email, &jwt_config()).unwrap()
}

pub fn token_issued_at(email: &str, issued_at: DateTime<Utc>) -> String {
    create_access_token_at(email, issued_at, &jwt_config()).unwrap()
}

pub fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
