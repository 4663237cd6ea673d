//! Cart route handlers.
//!
//! The cart lives in the visitor's store. HTMX requests get the badge or
//! the cart panel back with an `HX-Trigger` header (`cart-updated` plus an
//! optional toast); plain form posts are redirected to `return_to`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono_royale_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use super::{is_htmx, redirect_with_notice, safe_return_to};
use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::filters::static_url;
use crate::middleware::Visitor;
use crate::models::Cart;
use crate::notice::{HX_TRIGGER, Notice, hx_trigger};
use crate::state::AppState;

/// Cart line display data for the panel.
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub unit_price: String,
    pub image_url: String,
    pub quantity: u32,
    /// Quantity requested by the minus button; the cart clamps it to 1.
    pub decrement: i64,
    pub increment: i64,
}

/// Cart panel display data.
pub struct CartPanel {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub total: String,
    /// The inquiry button is enabled only when some line resolves.
    pub can_inquire: bool,
}

impl CartPanel {
    /// Build the panel for `cart`. Lines whose product is gone are skipped.
    #[must_use]
    pub fn new(cart: &Cart, catalog: &Catalog) -> Self {
        let lines: Vec<CartLineView> = cart
            .resolved_lines(catalog)
            .into_iter()
            .map(|line| {
                let quantity = line.qty.get();
                CartLineView {
                    id: line.product.id.to_string(),
                    name: line.product.name.clone(),
                    brand: line.product.brand.clone(),
                    unit_price: line.product.price.display(),
                    image_url: static_url(line.product.main_image()),
                    quantity,
                    decrement: i64::from(quantity) - 1,
                    increment: i64::from(quantity) + 1,
                }
            })
            .collect();
        let totals = cart.totals(catalog);

        Self {
            can_inquire: !lines.is_empty(),
            lines,
            subtotal: totals.subtotal.display(),
            total: totals.total.display(),
        }
    }
}

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub panel: CartPanel,
}

/// Item count shown on the navigation bar's cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    pub count: u64,
}

impl CartBadge {
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self {
            count: cart.item_count(),
        }
    }

    /// The badge is hidden while the cart holds nothing.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.count == 0
    }
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub badge: CartBadge,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub return_to: Option<String>,
}

/// Quantity form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub id: String,
    pub qty: i64,
    pub return_to: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
    pub return_to: Option<String>,
}

/// Empty cart form data.
#[derive(Debug, Deserialize)]
pub struct ClearCartForm {
    pub return_to: Option<String>,
}

/// Cart panel (HTMX).
#[instrument(skip_all)]
pub async fn panel(State(state): State<AppState>, mut visitor: Visitor) -> CartPanelTemplate {
    CartPanelTemplate {
        panel: CartPanel::new(&visitor.cart(), state.catalog()),
    }
}

/// Cart count badge (HTMX).
#[instrument(skip_all)]
pub async fn count(mut visitor: Visitor) -> CartCountTemplate {
    CartCountTemplate {
        badge: CartBadge::for_cart(&visitor.cart()),
    }
}

/// Add one unit of a product.
///
/// Unknown product ids are rejected with 404 and leave the cart untouched.
#[instrument(skip(state, headers, visitor), fields(product_id = %form.id))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut visitor: Visitor,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    if !state.catalog().contains(&form.id) {
        return Err(AppError::NotFound(format!("producto {}", form.id)));
    }

    let cart = visitor.cart_service().add_item(&ProductId::new(form.id));
    visitor.commit().await?;

    if is_htmx(&headers) {
        return Ok((
            AppendHeaders([(HX_TRIGGER, hx_trigger(true, Some(Notice::AddedToCart)))]),
            CartCountTemplate {
                badge: CartBadge::for_cart(&cart),
            },
        )
            .into_response());
    }

    let target = safe_return_to(form.return_to.as_deref());
    Ok(redirect_with_notice(&target, Notice::AddedToCart).into_response())
}

/// Set a line's quantity; values below 1 become 1.
#[instrument(skip(state, headers, visitor), fields(product_id = %form.id, qty = form.qty))]
pub async fn set_quantity(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut visitor: Visitor,
    Form(form): Form<QuantityForm>,
) -> Result<Response> {
    let cart = visitor.cart_service().set_quantity(&form.id, form.qty);
    visitor.commit().await?;

    if is_htmx(&headers) {
        return Ok(panel_response(&cart, state.catalog(), None));
    }
    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())).into_response())
}

/// Remove a line whatever its quantity.
#[instrument(skip(state, headers, visitor), fields(product_id = %form.id))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut visitor: Visitor,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let cart = visitor.cart_service().remove_item(&form.id);
    visitor.commit().await?;

    if is_htmx(&headers) {
        return Ok(panel_response(
            &cart,
            state.catalog(),
            Some(Notice::RemovedFromCart),
        ));
    }
    let target = safe_return_to(form.return_to.as_deref());
    Ok(redirect_with_notice(&target, Notice::RemovedFromCart).into_response())
}

/// Empty the cart.
#[instrument(skip_all)]
pub async fn clear(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut visitor: Visitor,
    Form(form): Form<ClearCartForm>,
) -> Result<Response> {
    let cart = visitor.cart_service().clear();
    visitor.commit().await?;

    if is_htmx(&headers) {
        return Ok(panel_response(
            &cart,
            state.catalog(),
            Some(Notice::CartCleared),
        ));
    }
    let target = safe_return_to(form.return_to.as_deref());
    Ok(redirect_with_notice(&target, Notice::CartCleared).into_response())
}

fn panel_response(cart: &Cart, catalog: &Catalog, notice: Option<Notice>) -> Response {
    (
        AppendHeaders([(HX_TRIGGER, hx_trigger(true, notice))]),
        CartPanelTemplate {
            panel: CartPanel::new(cart, catalog),
        },
    )
        .into_response()
}
