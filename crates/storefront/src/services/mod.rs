//! State managers and form flows.
//!
//! Each manager borrows the visitor's [`LocalStore`](crate::storage::LocalStore),
//! reads its record with a safe default, and persists immediately after
//! every mutation. None of them knows about HTTP or templates.
//!
//! # Services
//!
//! - [`cart`] - Cart lines, quantities and totals
//! - [`filters`] - Catalog brand/price filter
//! - [`session`] - Simulated login
//! - [`inquiry`] - Availability inquiry built from the cart
//! - [`contact`] - Contact page form
//! - [`forms`] - Required-field validation shared by the forms

pub mod cart;
pub mod contact;
pub mod filters;
pub mod forms;
pub mod inquiry;
pub mod session;

pub use cart::CartService;
pub use contact::ContactForm;
pub use filters::FilterService;
pub use forms::{Field, Validation};
pub use inquiry::{InquiryForm, InquiryLine, InquirySummary};
pub use session::{LoginError, SessionService};
