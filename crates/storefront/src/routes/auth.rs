//! Simulated login route handlers.
//!
//! There is no account system: logging in only records the entered email in
//! the visitor's store. The password is required but never kept.

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use super::{redirect_with_notice, safe_return_to};
use crate::error::Result;
use crate::middleware::Visitor;
use crate::notice::Notice;
use crate::services::LoginError;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub return_to: Option<String>,
}

/// Logout form data.
#[derive(Debug, Deserialize)]
pub struct LogoutForm {
    pub return_to: Option<String>,
}

/// Log in and go back to `return_to`.
#[instrument(skip_all)]
pub async fn login(mut visitor: Visitor, Form(form): Form<LoginForm>) -> Result<Response> {
    let target = safe_return_to(form.return_to.as_deref());
    let password = SecretString::from(form.password);

    match visitor.session_service().login(&form.email, &password) {
        Ok(session) => {
            visitor.commit().await?;
            tracing::info!(email = %session.user_email, "Visitor logged in");
            Ok(redirect_with_notice(&target, Notice::LoggedIn).into_response())
        }
        Err(LoginError::MissingCredentials) => {
            Ok(redirect_with_notice(&target, Notice::LoginIncomplete).into_response())
        }
    }
}

/// Log out and go back to `return_to`.
#[instrument(skip(visitor))]
pub async fn logout(mut visitor: Visitor, Form(form): Form<LogoutForm>) -> Result<Response> {
    visitor.session_service().logout();
    visitor.commit().await?;

    let target = safe_return_to(form.return_to.as_deref());
    Ok(redirect_with_notice(&target, Notice::LoggedOut).into_response())
}

