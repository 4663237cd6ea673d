//! Core types for Chrono Royale.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{CurrencyCode, Price};
pub use quantity::Quantity;
