//! Simulated login state manager.
//!
//! There is no account store: any non-empty email/user and password
//! "log in". The password is only checked for presence and is never
//! persisted or logged.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::models::SessionState;
use crate::storage::{LocalStore, Storage, keys};

/// Reasons a login attempt is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Email/user or password is blank.
    #[error("email/user and password are required")]
    MissingCredentials,
}

/// Reads and replaces the visitor's simulated login.
pub struct SessionService<'a, S> {
    store: &'a mut LocalStore<S>,
}

impl<'a, S: Storage> SessionService<'a, S> {
    pub const fn new(store: &'a mut LocalStore<S>) -> Self {
        Self { store }
    }

    /// The stored session, or logged out.
    #[must_use]
    pub fn get_session(&self) -> SessionState {
        self.store.read(keys::SESSION, SessionState::logged_out())
    }

    /// Log in as `email` if both fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingCredentials`] when either field is blank;
    /// the stored session is left untouched.
    pub fn login(
        &mut self,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionState, LoginError> {
        let email = email.trim();
        if email.is_empty() || password.expose_secret().trim().is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let session = SessionState::logged_in(email);
        self.store.write(keys::SESSION, &session);
        Ok(session)
    }

    /// Reset to logged out by dropping the stored record.
    pub fn logout(&mut self) {
        self.store.remove(keys::SESSION);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_empty_password_stays_logged_out() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut sessions = SessionService::new(&mut store);

        let result = sessions.login("a@b.com", &secret(""));
        assert_eq!(result, Err(LoginError::MissingCredentials));
        assert!(!sessions.get_session().is_logged_in);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut sessions = SessionService::new(&mut store);
        assert!(sessions.login("   ", &secret("pw")).is_err());
        assert!(sessions.login("a@b.com", &secret("   ")).is_err());
    }

    #[test]
    fn test_login_stores_trimmed_email() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut sessions = SessionService::new(&mut store);

        let session = sessions.login(" a@b.com ", &secret("hunter2")).unwrap();
        assert_eq!(session, SessionState::logged_in("a@b.com"));
        assert_eq!(sessions.get_session(), session);
    }

    #[test]
    fn test_any_username_is_accepted() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut sessions = SessionService::new(&mut store);
        let session = sessions.login("coleccionista", &secret("x")).unwrap();
        assert_eq!(session.user_email, "coleccionista");
    }

    #[test]
    fn test_password_is_not_persisted() {
        let mut store = LocalStore::new(MemoryStorage::new());
        SessionService::new(&mut store)
            .login("a@b.com", &secret("s3cr3t-value"))
            .unwrap();

        let raw = store.storage().get_item(keys::SESSION).unwrap();
        assert!(!raw.contains("s3cr3t-value"));
    }

    #[test]
    fn test_logout_resets() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut sessions = SessionService::new(&mut store);
        sessions.login("a@b.com", &secret("pw")).unwrap();

        sessions.logout();
        assert_eq!(sessions.get_session(), SessionState::logged_out());
        assert!(store.storage().get_item(keys::SESSION).is_none());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_array_shaped_record_reads_as_logged_out() {
        let mut store = LocalStore::new(MemoryStorage::new());
        store
            .storage_mut()
            .set_item(keys::SESSION, r#"[true,"x@y.z"]"#.to_string());
        assert_eq!(
            SessionService::new(&mut store).get_session(),
            SessionState::logged_out()
        );
    }

    #[test]
    fn test_corrupt_record_reads_as_logged_out() {
        let mut store = LocalStore::new(MemoryStorage::new());
        store
            .storage_mut()
            .set_item(keys::SESSION, "{\"isLogged\": \"yes\"}".to_string());
        assert_eq!(
            SessionService::new(&mut store).get_session(),
            SessionState::logged_out()
        );
    }
}
