//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span carrying `request_id`)
//! 3. Request ID (reuse or generate `x-request-id`)
//! 4. CSP nonce (per-request nonce for inline scripts)
//! 5. Security headers (CSP built from the nonce, framing, sniffing)
//! 6. Session layer (tower-sessions, in-memory store)
//!
//! The [`Visitor`] extractor sits on top of the session and hands handlers
//! the visitor's storage snapshot.

pub mod csp;
pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod visitor;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::{make_request_span, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use visitor::Visitor;
