//! Catalog grid route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::Uri,
};
use tracing::instrument;

use super::{PageChrome, ProductCard};
use crate::filters;
use crate::middleware::{CspNonce, Visitor};
use crate::notice::NoticeQuery;
use crate::state::AppState;

/// Product grid page, shared by both listings.
#[derive(Template, WebTemplate)]
#[template(path = "collections.html")]
pub struct CollectionsTemplate {
    pub chrome: PageChrome,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub products: Vec<ProductCard>,
    /// Bootstrap column classes for each card.
    pub column_class: &'static str,
    /// Whether the stored filter applies (and its summary is shown).
    pub filtered: bool,
}

impl CollectionsTemplate {
    /// `"{n} producto(s)"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} producto(s)", self.products.len())
    }
}

/// Catalog filtered by the visitor's stored filter.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    Query(query): Query<NoticeQuery>,
    mut visitor: Visitor,
) -> CollectionsTemplate {
    let catalog = state.catalog();
    let products: Vec<ProductCard> = visitor
        .filter_service()
        .filtered_products(catalog)
        .into_iter()
        .map(ProductCard::from)
        .collect();
    tracing::debug!(count = products.len(), "Rendering filtered catalog");

    CollectionsTemplate {
        chrome: PageChrome::new(&mut visitor, catalog, nonce, &uri, query.notice()),
        title: "Colecciones",
        subtitle: "Relojes de alta gama seleccionados por nuestro equipo.",
        products,
        column_class: "col-12 col-md-6 col-lg-4",
        filtered: true,
    }
}

/// The curated new collection, unfiltered, one piece per row.
#[instrument(skip_all)]
pub async fn new_collection(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    Query(query): Query<NoticeQuery>,
    mut visitor: Visitor,
) -> CollectionsTemplate {
    let catalog = state.catalog();

    CollectionsTemplate {
        chrome: PageChrome::new(&mut visitor, catalog, nonce, &uri, query.notice()),
        title: "Nueva colección",
        subtitle: "Nautilus 7118 engastados con zafiros, rubíes y esmeraldas.",
        products: catalog
            .new_collection()
            .into_iter()
            .map(ProductCard::from)
            .collect(),
        column_class: "col-12",
        filtered: false,
    }
}
