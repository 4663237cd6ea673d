//! Chrono Royale storefront library.
//!
//! A luxury-watch catalog where pieces are not sold online: visitors browse,
//! filter, collect pieces in a cart and send an availability inquiry.
//!
//! # Layout
//!
//! - [`catalog`] - Immutable product data
//! - [`storage`] - Per-visitor key-value store with JSON records
//! - [`models`] - Cart, filter and simulated-login records
//! - [`services`] - State managers and form flows over the store
//! - [`routes`] - Axum handlers and Askama templates
//! - [`middleware`] - Sessions, request ids, CSP nonce, security headers
//! - [`redirect`] - Same-site `return_to` targets
//!
//! The router is built by [`app::build_router`]; the binary adds the
//! listener, tracing and Sentry.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod notice;
pub mod redirect;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

pub use app::build_router;
pub use config::StorefrontConfig;
pub use state::AppState;
