//! Catalog filter route handlers.
//!
//! All three store the filter and send the visitor to the collections page.

use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use super::redirect_with_notice;
use crate::error::Result;
use crate::middleware::Visitor;
use crate::models::FilterState;
use crate::notice::Notice;

const COLLECTIONS_PATH: &str = "/colecciones";

/// Filter modal form data; bounds are kept as typed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub brand: String,
    pub min: String,
    pub max: String,
}

/// Brand shortcut form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuickFilterForm {
    pub brand: String,
}

/// Apply the filter modal.
#[instrument(skip(visitor))]
pub async fn apply(mut visitor: Visitor, Form(form): Form<FilterForm>) -> Result<Response> {
    let filters = FilterState {
        brand: form.brand,
        min: form.min.into(),
        max: form.max.into(),
    };
    visitor.filter_service().set_filters(&filters);
    visitor.commit().await?;

    Ok(redirect_with_notice(COLLECTIONS_PATH, Notice::FiltersApplied).into_response())
}

/// Clear the filter.
#[instrument(skip_all)]
pub async fn clear(mut visitor: Visitor) -> Result<Response> {
    visitor.filter_service().clear_filters();
    visitor.commit().await?;

    Ok(redirect_with_notice(COLLECTIONS_PATH, Notice::FiltersCleared).into_response())
}

/// Home-page brand shortcut: brand only, no price bounds.
#[instrument(skip(visitor))]
pub async fn quick(mut visitor: Visitor, Form(form): Form<QuickFilterForm>) -> Result<Response> {
    visitor.filter_service().quick_filter(&form.brand);
    visitor.commit().await?;

    Ok(Redirect::to(COLLECTIONS_PATH).into_response())
}
