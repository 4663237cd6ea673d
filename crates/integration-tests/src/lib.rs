//! Integration tests for the Chrono Royale storefront.
//!
//! Tests drive the full router in-process (middleware, sessions, templates)
//! with `tower::ServiceExt::oneshot`; no server or network is involved.
//!
//! ```bash
//! cargo test -p chrono-royale-integration-tests
//! ```
//!
//! [`TestApp`] plays one visitor: it keeps the session cookie between
//! requests the way a browser would.

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use chrono_royale_storefront::{AppState, StorefrontConfig, build_router};
use tower::ServiceExt;
use tower_sessions::cookie::Cookie;

/// Session cookie set by the storefront.
pub const SESSION_COOKIE: &str = "chrono_session";

/// One visitor talking to one storefront instance.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// A response header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `Location` of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION.as_str())
    }

    /// The `HX-Trigger` header decoded as JSON.
    #[must_use]
    pub fn hx_trigger(&self) -> Option<serde_json::Value> {
        self.header("hx-trigger")
            .map(|raw| serde_json::from_str(raw).unwrap())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// A fresh storefront with its own session store.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
            ..StorefrontConfig::default()
        };
        Self {
            router: build_router(AppState::new(config)),
            cookie: None,
        }
    }

    /// Another visitor on the same storefront (no cookie).
    #[must_use]
    pub fn stranger(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Whether the storefront has issued this visitor a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request("GET", path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Plain form post, as a browser without JavaScript would send it.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.send(request).await
    }

    /// Form post issued by HTMX.
    pub async fn htmx_post(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("hx-request", "true")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie.as_str()),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();

        for value in headers.get_all(header::SET_COOKIE) {
            let Ok(cookie) = Cookie::parse(value.to_str().unwrap()) else {
                continue;
            };
            if cookie.name() == SESSION_COOKIE {
                self.cookie = Some(cookie.stripped().to_string());
            }
        }

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// `application/x-www-form-urlencoded` encoding.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}
