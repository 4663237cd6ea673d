//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (brand shortcuts, new collection)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /colecciones            - Catalog grid, filtered by the stored filter
//! GET  /nueva-coleccion        - New-collection grid
//! GET  /producto?id=...        - Product detail
//!
//! # Filters (redirect to /colecciones)
//! POST /filtros                - Apply brand/price filter
//! POST /filtros/limpiar        - Clear filter
//! POST /filtros/rapido         - Brand shortcut from the home page
//!
//! # Cart (HTMX fragments)
//! GET  /carrito                - Cart panel
//! GET  /carrito/contador       - Cart badge
//! POST /carrito/agregar        - Add one unit (returns badge)
//! POST /carrito/cantidad       - Set quantity (returns panel)
//! POST /carrito/eliminar       - Remove line (returns panel)
//! POST /carrito/vaciar         - Empty cart (returns panel)
//! GET  /carrito/consulta       - Availability inquiry form
//! POST /carrito/consulta       - Submit inquiry
//!
//! # Contact
//! GET  /contacto               - Contact page
//! POST /contacto               - Submit contact form
//!
//! # Simulated login
//! POST /auth/login             - Log in, back to `return_to`
//! POST /auth/logout            - Log out, back to `return_to`
//! ```
//!
//! Cart mutations answer HTMX requests with a fragment and an `HX-Trigger`
//! header; plain form posts get a redirect carrying a `?notice=` code.

pub mod auth;
pub mod cart;
pub mod catalog_filters;
pub mod collections;
pub mod contact;
pub mod home;
pub mod inquiry;
pub mod products;

use axum::{
    Router,
    http::{HeaderMap, Uri},
    response::Redirect,
    routing::{get, post},
};

use self::cart::CartBadge;
use crate::catalog::{Catalog, Product};
use crate::filters::static_url;
use crate::middleware::Visitor;
use crate::models::FilterState;
use crate::notice::{NOTICE_PARAM, Notice, TOAST_DELAY_MS};
use crate::redirect;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::panel))
        .route("/contador", get(cart::count))
        .route("/agregar", post(cart::add))
        .route("/cantidad", post(cart::set_quantity))
        .route("/eliminar", post(cart::remove))
        .route("/vaciar", post(cart::clear))
        .route("/consulta", get(inquiry::form).post(inquiry::submit))
}

/// Create the filter routes router.
pub fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(catalog_filters::apply))
        .route("/limpiar", post(catalog_filters::clear))
        .route("/rapido", post(catalog_filters::quick))
}

/// Create the simulated-login routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/colecciones", get(collections::index))
        .route("/nueva-coleccion", get(collections::new_collection))
        .route("/producto", get(products::show))
        .route("/contacto", get(contact::page).post(contact::submit))
        .nest("/filtros", filter_routes())
        .nest("/carrito", cart_routes())
        .nest("/auth", auth_routes())
}

// =============================================================================
// Shared View Data
// =============================================================================

/// Data every full page needs for the navigation bar, the filter and
/// login modals, the cart offcanvas and the toasts.
pub struct PageChrome {
    pub nonce: String,
    /// Path of the current page, for the active nav link.
    pub path: String,
    /// Path and query to come back to after login/logout.
    pub return_to: String,
    pub cart_badge: CartBadge,
    pub logged_in: bool,
    pub user_title: String,
    pub filters: FilterState,
    pub brands: Vec<&'static str>,
    pub notice: Option<Notice>,
    pub toast_delay_ms: u32,
}

impl PageChrome {
    /// Gather chrome data from the visitor's store. Never writes.
    pub fn new(
        visitor: &mut Visitor,
        catalog: &'static Catalog,
        nonce: String,
        uri: &Uri,
        notice: Option<Notice>,
    ) -> Self {
        let login = visitor.login_state();
        Self {
            nonce,
            path: uri.path().to_string(),
            return_to: safe_return_to(Some(&uri.to_string())),
            cart_badge: CartBadge::for_cart(&visitor.cart()),
            logged_in: login.is_logged_in,
            user_title: login.user_button_title(),
            filters: visitor.filters(),
            brands: catalog.brands(),
            notice,
            toast_delay_ms: TOAST_DELAY_MS,
        }
    }

    /// Whether `brand` is the stored filter brand, for the select box.
    #[must_use]
    pub fn is_selected_brand(&self, brand: &str) -> bool {
        self.filters.brand.trim() == brand
    }
}

/// A product as shown in a grid.
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub image_url: String,
    pub href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.display(),
            image_url: static_url(product.main_image()),
            href: format!("/producto?id={}", product.id),
        }
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Whether the request was issued by HTMX.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Accept `return_to` only as a local absolute path; anything else is `/`.
///
/// Any `notice` parameter and the fragment are dropped.
#[must_use]
pub fn safe_return_to(return_to: Option<&str>) -> String {
    return_to
        .and_then(redirect::local_url)
        .map_or_else(|| "/".to_string(), |mut url| {
            redirect::remove_query_param(&mut url, NOTICE_PARAM);
            redirect::path_and_query(&url)
        })
}

/// Redirect (303) to a local path carrying `notice`.
#[must_use]
pub fn redirect_with_notice(path: &str, notice: Notice) -> Redirect {
    Redirect::to(&notice.redirect_target(path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn test_safe_return_to_accepts_local_paths() {
        assert_eq!(safe_return_to(Some("/colecciones")), "/colecciones");
        assert_eq!(
            safe_return_to(Some("/producto?id=rm-011")),
            "/producto?id=rm-011"
        );
    }

    #[test]
    fn test_safe_return_to_rejects_foreign_targets() {
        assert_eq!(safe_return_to(None), "/");
        assert_eq!(safe_return_to(Some("")), "/");
        assert_eq!(safe_return_to(Some("https://evil.example")), "/");
        assert_eq!(safe_return_to(Some("//evil.example")), "/");
        assert_eq!(safe_return_to(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_to(Some("colecciones")), "/");
    }

    #[test]
    fn test_safe_return_to_strips_notice_and_fragment() {
        assert_eq!(safe_return_to(Some("/colecciones?notice=login")), "/colecciones");
        assert_eq!(
            safe_return_to(Some("/producto?id=rm-011&notice=logout")),
            "/producto?id=rm-011"
        );
        assert_eq!(safe_return_to(Some("/colecciones#grid")), "/colecciones");
    }

    #[test]
    fn test_redirect_with_fragment_keeps_notice_in_query() {
        let target = safe_return_to(Some("/colecciones#grid"));
        let response = redirect_with_notice(&target, Notice::LoggedIn).into_response();
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/colecciones?notice=login"
        );
    }

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }

    #[test]
    fn test_product_card() {
        let product = crate::catalog::catalog().get("rolex-submariner").unwrap();
        let card = ProductCard::from(product);
        assert_eq!(card.price, "13.900,00\u{a0}€");
        assert_eq!(card.image_url, "/static/img/rolex-submariner.jpg");
        assert_eq!(card.href, "/producto?id=rolex-submariner");
    }
}
