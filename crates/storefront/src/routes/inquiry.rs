//! Availability inquiry route handlers.
//!
//! The inquiry modal in the cart loads its body from `GET /carrito/consulta`
//! when it opens, so the listed pieces are a snapshot of the cart at that
//! moment. Submitting is simulated: a valid inquiry is logged and answered
//! with the `consult-sent` event.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::middleware::Visitor;
use crate::notice::{HX_TRIGGER, Notice, hx_trigger};
use crate::services::{Field, InquiryForm, InquirySummary, Validation};
use crate::state::AppState;

/// Inquiry modal body (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/inquiry.html")]
pub struct InquiryTemplate {
    pub summary: InquirySummary,
    pub total: String,
    pub form: InquiryForm,
    /// Set once a submission failed, to show inline validation state.
    pub validation: Option<Validation>,
}

impl InquiryTemplate {
    fn fresh(summary: InquirySummary) -> Self {
        Self {
            total: summary.total.display(),
            form: InquiryForm {
                cart_summary: summary.summary_text.clone(),
                ..InquiryForm::default()
            },
            summary,
            validation: None,
        }
    }

    /// Whether the form was submitted and rejected.
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

/// Open the inquiry: snapshot the cart.
#[instrument(skip_all)]
pub async fn form(State(state): State<AppState>, mut visitor: Visitor) -> InquiryTemplate {
    let summary = InquirySummary::snapshot(&visitor.cart(), state.catalog());
    InquiryTemplate::fresh(summary)
}

/// Submit the inquiry.
///
/// Invalid forms come back with validation state and the entered values.
/// Valid ones fire `consult-sent` and return a reset form.
#[instrument(skip(state, visitor, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    mut visitor: Visitor,
    Form(form): Form<InquiryForm>,
) -> Response {
    let summary = InquirySummary::snapshot(&visitor.cart(), state.catalog());

    match form.validate() {
        Ok(inquiry) => {
            tracing::info!(
                email = %inquiry.email,
                pieces = %inquiry.cart_summary,
                "Availability inquiry received (not delivered)"
            );
            add_breadcrumb("inquiry", "Inquiry submitted", &[("email", inquiry.email.as_str())]);

            (
                AppendHeaders([(HX_TRIGGER, hx_trigger(false, Some(Notice::InquirySent)))]),
                InquiryTemplate::fresh(summary),
            )
                .into_response()
        }
        Err(validation) => {
            tracing::debug!(
                invalid = ?validation.fields().map(Field::as_str).collect::<Vec<_>>(),
                "Inquiry rejected"
            );
            InquiryTemplate {
                total: summary.total.display(),
                summary,
                form,
                validation: Some(validation),
            }
            .into_response()
        }
    }
}
