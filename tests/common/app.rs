//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use shades::models::AppConfig;
use shades::server::{build_router, create_app_state, AppState};

/// Seed used by default so generated shades are reproducible
pub const TEST_SEED: u64 = 1;

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application with the default test seed
    pub fn new() -> Self {
        Self::with_seed(TEST_SEED)
    }

    /// Create a test application whose random source uses `seed`
    pub fn with_seed(seed: u64) -> Self {
        let state = Self::create_state(seed);

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router }
    }

    /// Create application state for custom router configuration
    pub fn create_state(seed: u64) -> AppState {
        let config = AppConfig {
            seed: Some(seed),
            ..AppConfig::default()
        };
        create_app_state(&config).expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a form-encoded `color` field
    pub async fn post_color(&self, path: &str, color: &str) -> TestResponse {
        let body = format!("color={}", color.replace('#', "%23"));
        self.post_form(path, &body).await
    }

    /// Make a POST request with no body and no Content-Type
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw form-encoded body
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get the Content-Type header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}
