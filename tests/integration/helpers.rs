//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use menuhub_api::router::build_router;
use menuhub_api::{AppState, build_state};
use menuhub_auth::password::PasswordHasher;
use menuhub_core::config::{AppConfig, DatabaseBackend};
use menuhub_database::{Repositories, UserRepository as _};
use menuhub_entity::user::{CreateUser, UserRole};

/// Default password of users created through [`TestApp::create_user`].
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct repository access
    pub state: AppState,
}

/// Tokens handed out by a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer access token
    pub access_token: String,
    /// Value of the `refreshToken` cookie
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application over fresh in-memory storage
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let state = build_state(config, Repositories::memory());
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Create a verified user and return their ID
    pub async fn create_user(
        &self,
        name: &str,
        permissions: &[&str],
        role: UserRole,
    ) -> Uuid {
        let password_hash = PasswordHasher::new()
            .hash(PASSWORD.to_string())
            .await
            .expect("Failed to hash password");

        self.state
            .repositories
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: format!("{name}@menuhub.test"),
                password_hash,
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
                role,
                is_verified: true,
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Create an administrator allowed on every admin page
    pub async fn create_admin(&self, name: &str) -> Uuid {
        self.create_user(name, menuhub_entity::user::ADMIN_PAGES, UserRole::Admin)
            .await
    }

    /// Login and return the issued tokens
    pub async fn login(&self, name: &str) -> Session {
        let response = self
            .request(
                "POST",
                "/admin/login",
                Some(serde_json::json!({
                    "email": format!("{name}@menuhub.test"),
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Login failed: {:?}",
            response.body
        );

        Session {
            access_token: response.body["accessToken"]
                .as_str()
                .expect("No accessToken in login response")
                .to_string(),
            refresh_token: response
                .refresh_cookie()
                .expect("No refreshToken cookie in login response"),
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.call(method, path, body, token, None).await
    }

    /// POST /admin/refresh-token with the given cookie value
    pub async fn refresh(&self, refresh_token: Option<&str>) -> TestResponse {
        self.call("POST", "/admin/refresh-token", None, None, refresh_token)
            .await
    }

    /// GET a page with the given cookie value
    pub async fn page(&self, path: &str, refresh_token: Option<&str>) -> TestResponse {
        self.call("GET", path, None, None, refresh_token).await
    }

    /// Make an HTTP request with optional bearer token and refresh cookie
    pub async fn call(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(refresh_token) = refresh_token {
            req = req.header(COOKIE, format!("refreshToken={refresh_token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Test response wrapper
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as JSON, `Null` when not JSON
    pub body: Value,
    /// Raw response body
    pub text: String,
}

impl TestResponse {
    /// The full `Set-Cookie` header for `refreshToken`, if set
    pub fn refresh_cookie_header(&self) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("refreshToken="))
            .map(str::to_string)
    }

    /// Value of the `refreshToken` cookie, if set
    pub fn refresh_cookie(&self) -> Option<String> {
        let header = self.refresh_cookie_header()?;
        let pair = header.split(';').next()?;
        pair.strip_prefix("refreshToken=").map(str::to_string)
    }

    /// The `message` field of a JSON body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
