//! Session middleware configuration.
//!
//! Each visitor gets a cookie-identified session in an in-memory
//! tower-sessions store. The session holds the visitor's storage snapshot
//! (see [`super::visitor`]); restarting the process forgets it.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time::Duration};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "chrono_session";

/// Create the session layer.
///
/// Sessions expire after `config.session_days` of inactivity.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(i64::from(
            config.session_days,
        ))))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
