//! Common test utilities for in-process API testing.
//!
//! The fixture runs the full router with an in-memory catalog and issues
//! requests through `tower::ServiceExt::oneshot` - no sockets involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use lectern_core::{
    create_authenticator, AuthConfig, AuthMethod, Config, DatabaseConfig, ServerConfig,
    SqliteCatalog, VideoCatalog,
};
use lectern_server::api::create_router;
use lectern_server::state::AppState;

pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with no authentication and an empty catalog.
    pub fn new() -> Self {
        Self::with_auth(AuthConfig {
            method: AuthMethod::None,
            tokens: None,
        })
    }

    /// Create a fixture with the given auth configuration.
    pub fn with_auth(auth: AuthConfig) -> Self {
        let authenticator = Arc::from(
            create_authenticator(&auth).expect("Failed to create authenticator"),
        );
        let catalog: Arc<dyn VideoCatalog> =
            Arc::new(SqliteCatalog::in_memory().expect("Failed to create catalog"));

        let config = Config {
            auth,
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            database: DatabaseConfig::default(),
        };

        let state = Arc::new(AppState::new(config, authenticator, catalog));

        Self {
            router: create_router(state),
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, None).await
    }

    /// Send a GET request with a bearer token.
    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        self.request("GET", path, None, Some(token)).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body), None).await
    }

    /// Send a POST request with JSON body and a bearer token.
    pub async fn post_with_token(&self, path: &str, body: Value, token: &str) -> TestResponse {
        self.request("POST", path, Some(body), Some(token)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None, None).await
    }

    /// Send a request to the test server.
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
