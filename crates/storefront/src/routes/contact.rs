//! Contact page route handlers.
//!
//! Submission is simulated: a valid message is logged and the visitor is
//! sent back to an empty form with the "message sent" toast.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use super::{PageChrome, redirect_with_notice};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::{CspNonce, Visitor};
use crate::notice::{Notice, NoticeQuery};
use crate::services::{ContactForm, Validation};
use crate::state::AppState;

const CONTACT_PATH: &str = "/contacto";

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub chrome: PageChrome,
    pub form: ContactForm,
    pub validation: Option<Validation>,
}

impl ContactTemplate {
    #[must_use]
    pub const fn was_validated(&self) -> bool {
        self.validation.is_some()
    }

    /// Whether `field` failed the last submission.
    #[must_use]
    pub fn is_invalid(&self, field: &str) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|v| v.fields().any(|f| f.as_str() == field))
    }
}

/// Display the contact page.
#[instrument(skip_all)]
pub async fn page(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    Query(query): Query<NoticeQuery>,
    mut visitor: Visitor,
) -> ContactTemplate {
    ContactTemplate {
        chrome: PageChrome::new(&mut visitor, state.catalog(), nonce, &uri, query.notice()),
        form: ContactForm::default(),
        validation: None,
    }
}

/// Submit the contact form.
#[instrument(skip(state, nonce, uri, visitor, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    mut visitor: Visitor,
    Form(form): Form<ContactForm>,
) -> Response {
    match form.validate() {
        Ok(message) => {
            tracing::info!(
                email = %message.email,
                has_phone = message.phone.is_some(),
                "Contact message received (not delivered)"
            );
            add_breadcrumb("contact", "Contact form submitted", &[]);
            redirect_with_notice(CONTACT_PATH, Notice::MessageSent).into_response()
        }
        Err(validation) => {
            let page = ContactTemplate {
                chrome: PageChrome::new(&mut visitor, state.catalog(), nonce, &uri, None),
                form,
                validation: Some(validation),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}
