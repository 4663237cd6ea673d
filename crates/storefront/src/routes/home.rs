//! Home page route handler.

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

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    /// Brand shortcuts, in catalog order.
    pub brands: Vec<&'static str>,
    pub featured: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
    uri: Uri,
    Query(query): Query<NoticeQuery>,
    mut visitor: Visitor,
) -> HomeTemplate {
    let catalog = state.catalog();
    let chrome = PageChrome::new(&mut visitor, catalog, nonce, &uri, query.notice());

    HomeTemplate {
        chrome,
        brands: catalog.brands(),
        featured: catalog
            .new_collection()
            .into_iter()
            .map(ProductCard::from)
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono_royale_core::ProductId;
    use tower_sessions::{MemoryStore, Session};

    use super::*;
    use crate::catalog::catalog;

    fn render(visitor: &mut Visitor) -> String {
        let uri: Uri = "/".parse().unwrap();
        HomeTemplate {
            chrome: PageChrome::new(visitor, catalog(), "n0nce".to_string(), &uri, None),
            brands: catalog().brands(),
            featured: Vec::new(),
        }
        .render()
        .unwrap()
    }

    #[tokio::test]
    async fn test_page_badge_follows_cart() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        let mut visitor = Visitor::load(session).await.unwrap();

        let html = render(&mut visitor);
        assert!(html.contains("cr-badge d-none"));
        assert!(html.contains(r#"nonce="n0nce""#));

        visitor.cart_service().add_item(&ProductId::new("rm-011"));
        let html = render(&mut visitor);
        assert!(!html.contains("cr-badge d-none"));
        assert!(html.contains(">1</span>"));
    }
}
