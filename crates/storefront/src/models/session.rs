//! Simulated login record.
//!
//! Persisted under [`crate::storage::keys::SESSION`] as
//! `{"isLogged": bool, "userEmail": string}`. This is not an identity: no
//! credential is checked or stored.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether the visitor has "logged in", and as whom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    #[serde(rename = "isLogged")]
    pub is_logged_in: bool,
    /// Empty when logged out.
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// Stored shape; missing fields read as logged out.
#[derive(Default, Deserialize)]
#[serde(default)]
struct StoredSession {
    #[serde(rename = "isLogged")]
    is_logged_in: bool,
    #[serde(rename = "userEmail")]
    user_email: String,
}

impl<'de> Deserialize<'de> for SessionState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored: StoredSession = super::from_object(deserializer)?;
        Ok(Self {
            is_logged_in: stored.is_logged_in,
            user_email: stored.user_email,
        })
    }
}

impl SessionState {
    /// A logged-in session for `email`.
    #[must_use]
    pub fn logged_in(email: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            user_email: email.into(),
        }
    }

    /// The logged-out default.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Title for the account button in the navigation bar.
    #[must_use]
    pub fn user_button_title(&self) -> String {
        if self.is_logged_in {
            format!("Sesión: {} (clic para gestionar)", self.user_email)
        } else {
            "Login".to_string()
        }
    }
}
