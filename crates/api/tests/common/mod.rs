//! Shared harness for API tests: the real router over the in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tillbook_api::{AppState, create_router};
use tillbook_core::InMemoryStore;
use tillbook_shared::{JwtConfig, JwtService};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "root@tillbook.test";
pub const ADMIN_SECRET: &str = "admin-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub jwt: JwtService,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let jwt = JwtService::new(JwtConfig {
            secret: "api-test-secret".to_string(),
            ..JwtConfig::default()
        });

        let state = AppState::new(store.clone(), store.clone(), jwt.clone());
        state
            .directory
            .ensure_admin("Root", ADMIN_EMAIL, ADMIN_SECRET)
            .await
            .expect("admin provisioned");

        Self {
            router: create_router(state),
            store,
            jwt,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("/api/v1{uri}"));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn login(&self, role: &str, email: &str, secret: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            &format!("/auth/login/{role}"),
            None,
            Some(json!({ "email": email, "secret": secret })),
        )
        .await
    }

    pub async fn admin_token(&self) -> String {
        let (status, body) = self.login("admin", ADMIN_EMAIL, ADMIN_SECRET).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().expect("token").to_string()
    }

    /// Creates a cashier through the API and logs in. Returns (id, token).
    pub async fn cashier(&self, name: &str, email: &str, secret: &str) -> (String, String) {
        let admin = self.admin_token().await;
        let (status, created) = self
            .request(
                Method::POST,
                "/cashiers",
                Some(&admin),
                Some(json!({ "name": name, "email": email, "secret": secret })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{created}");

        let (status, session) = self.login("cashier", email, secret).await;
        assert_eq!(status, StatusCode::OK, "{session}");

        (
            created["id"].as_str().expect("id").to_string(),
            session["token"].as_str().expect("token").to_string(),
        )
    }

    pub async fn record(&self, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, "/transactions", Some(token), Some(body))
            .await
    }
}
