//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use super::PageChrome;
use crate::catalog::Product;
use crate::filters::{self, static_url};
use crate::middleware::{CspNonce, Visitor};
use crate::notice::NoticeQuery;
use crate::state::AppState;

/// `?id=` on the product page.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub id: Option<String>,
}

/// Product display data for the detail page.
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub description: String,
    /// Carousel image URLs.
    pub images: Vec<String>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.display(),
            description: format!(
                "Pieza premium de {}. Consulta disponibilidad, estado y documentación con nuestro equipo.",
                product.brand
            ),
            images: product
                .images
                .iter()
                .map(|path| static_url(path))
                .filter(|url| !url.is_empty())
                .collect(),
        }
    }
}

/// Product detail page template.
///
/// `product` is `None` for an unknown id: the page then shows the
/// not-found message, no carousel, and a disabled add button.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub chrome: PageChrome,
    pub product: Option<ProductDetail>,
}

/// Display a product.
#[instrument(skip(state, nonce, uri, notice, visitor), fields(product_id = ?query.id))]
pub async fn show(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    Query(query): Query<ProductQuery>,
    Query(notice): Query<NoticeQuery>,
    mut visitor: Visitor,
) -> Response {
    let catalog = state.catalog();
    let product = query
        .id
        .as_deref()
        .and_then(|id| catalog.get(id))
        .map(ProductDetail::from);
    let chrome = PageChrome::new(&mut visitor, catalog, nonce, &uri, notice.notice());

    if product.is_none() {
        tracing::debug!("Product not found");
        let page = ProductTemplate {
            chrome,
            product: None,
        };
        return (StatusCode::NOT_FOUND, page).into_response();
    }

    ProductTemplate { chrome, product }.into_response()
}
