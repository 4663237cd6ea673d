//! Visitor storage extractor.
//!
//! The visitor's [`MemoryStorage`] lives in their HTTP session under
//! [`VISITOR_STORAGE_KEY`]. [`Visitor`] loads it when a handler asks for it,
//! hands the state managers a [`LocalStore`] over it, and writes it back on
//! [`Visitor::commit`] only when something changed.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{Cart, FilterState, SessionState};
use crate::services::{CartService, FilterService, SessionService};
use crate::storage::{LocalStore, MemoryStorage};

/// Session key holding the visitor's storage snapshot.
pub const VISITOR_STORAGE_KEY: &str = "visitor.storage";

/// A visitor's storage snapshot for the current request.
pub struct Visitor {
    session: Session,
    store: LocalStore<MemoryStorage>,
}

impl Visitor {
    /// Load the snapshot from `session`, starting empty for new visitors.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn load(session: Session) -> Result<Self, AppError> {
        let storage = session
            .get::<MemoryStorage>(VISITOR_STORAGE_KEY)
            .await?
            .unwrap_or_default();
        Ok(Self {
            session,
            store: LocalStore::new(storage),
        })
    }

    /// Cart state manager over this visitor's store.
    pub const fn cart_service(&mut self) -> CartService<'_, MemoryStorage> {
        CartService::new(&mut self.store)
    }

    /// Filter state manager over this visitor's store.
    pub const fn filter_service(&mut self) -> FilterService<'_, MemoryStorage> {
        FilterService::new(&mut self.store)
    }

    /// Simulated-login state manager over this visitor's store.
    pub const fn session_service(&mut self) -> SessionService<'_, MemoryStorage> {
        SessionService::new(&mut self.store)
    }

    #[must_use]
    pub fn cart(&mut self) -> Cart {
        self.cart_service().get_cart()
    }

    #[must_use]
    pub fn filters(&mut self) -> FilterState {
        self.filter_service().get_filters()
    }

    #[must_use]
    pub fn login_state(&mut self) -> SessionState {
        self.session_service().get_session()
    }

    /// Persist the snapshot if any manager wrote to it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn commit(self) -> Result<(), AppError> {
        if self.store.is_dirty() {
            self.session
                .insert(VISITOR_STORAGE_KEY, self.store.into_inner())
                .await?;
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;
        Self::load(session).await
    }
}
