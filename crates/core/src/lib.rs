//! Chrono Royale Core - Shared domain types.
//!
//! This crate provides the value types used by the storefront:
//! product identifiers, prices, cart quantities and email addresses.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps the state managers in the storefront crate testable
//! without a running server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices, quantities and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
