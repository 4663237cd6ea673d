//! User-facing notices.
//!
//! A notice is either a transient toast or the persistent consultation
//! confirmation. Full-page responses carry one as a `?notice=<code>` query
//! parameter after a redirect; HTMX fragment responses carry it in the
//! `HX-Trigger` header, picked up by `static/js/storefront.js`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::redirect;

/// Query parameter carrying a notice code across a redirect.
pub const NOTICE_PARAM: &str = "notice";

/// Auto-dismiss delay for toasts, in milliseconds.
pub const TOAST_DELAY_MS: u32 = 2400;

/// HTMX response header that fires client events.
pub const HX_TRIGGER: &str = "hx-trigger";

/// Client event telling the page the cart changed.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Every notice the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    AddedToCart,
    RemovedFromCart,
    CartCleared,
    FiltersApplied,
    FiltersCleared,
    LoggedIn,
    LoginIncomplete,
    LoggedOut,
    MessageSent,
    InquirySent,
}

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Bottom-corner toast, hidden after [`TOAST_DELAY_MS`].
    Toast,
    /// Centered confirmation with a dimmed backdrop; stays until dismissed.
    Consultation,
}

impl Notice {
    const ALL: [Self; 10] = [
        Self::AddedToCart,
        Self::RemovedFromCart,
        Self::CartCleared,
        Self::FiltersApplied,
        Self::FiltersCleared,
        Self::LoggedIn,
        Self::LoginIncomplete,
        Self::LoggedOut,
        Self::MessageSent,
        Self::InquirySent,
    ];

    /// Query-string code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AddedToCart => "cart-added",
            Self::RemovedFromCart => "cart-removed",
            Self::CartCleared => "cart-cleared",
            Self::FiltersApplied => "filters-applied",
            Self::FiltersCleared => "filters-cleared",
            Self::LoggedIn => "login",
            Self::LoginIncomplete => "login-incomplete",
            Self::LoggedOut => "logout",
            Self::MessageSent => "message-sent",
            Self::InquirySent => "inquiry-sent",
        }
    }

    /// Parse a query-string code. Unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.code() == code)
    }

    /// Text shown to the visitor.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AddedToCart => "Añadido al carrito.",
            Self::RemovedFromCart => "Producto eliminado.",
            Self::CartCleared => "Carrito vaciado.",
            Self::FiltersApplied => "Filtros aplicados.",
            Self::FiltersCleared => "Filtros limpiados.",
            Self::LoggedIn => "Sesión iniciada.",
            Self::LoginIncomplete => "Completa email/usuario y contraseña.",
            Self::LoggedOut => "Sesión cerrada.",
            Self::MessageSent => "Mensaje enviado. Te responderemos pronto.",
            Self::InquirySent => {
                "Solicitud enviada correctamente. Nuestro equipo revisará la disponibilidad \
                 de las piezas seleccionadas y se pondrá en contacto a la mayor brevedad posible."
            }
        }
    }

    #[must_use]
    pub const fn kind(self) -> NoticeKind {
        match self {
            Self::InquirySent => NoticeKind::Consultation,
            _ => NoticeKind::Toast,
        }
    }

    /// Whether this is the persistent consultation confirmation.
    #[must_use]
    pub const fn is_consultation(self) -> bool {
        matches!(self.kind(), NoticeKind::Consultation)
    }

    /// `path` with its `notice` parameter set to this notice.
    ///
    /// Paths that do not resolve locally fall back to `/`; any fragment is
    /// dropped.
    #[must_use]
    pub fn redirect_target(self, path: &str) -> String {
        let Some(mut url) = redirect::local_url(path).or_else(|| redirect::local_url("/")) else {
            return format!("/?{NOTICE_PARAM}={}", self.code());
        };
        redirect::remove_query_param(&mut url, NOTICE_PARAM);
        url.query_pairs_mut().append_pair(NOTICE_PARAM, self.code());
        redirect::path_and_query(&url)
    }
}

/// `?notice=` query parameter on full-page routes.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    /// The notice named by the query, ignoring unknown codes.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_code)
    }
}

/// Build an `HX-Trigger` header value.
///
/// `cart_updated` fires the cart refresh event; a toast notice becomes a
/// `toast` event and the consultation confirmation a `consult-sent` event,
/// both carrying the message text. Non-ASCII characters are written as JSON
/// `\u` escapes so the value is a plain ASCII header.
#[must_use]
pub fn hx_trigger(cart_updated: bool, notice: Option<Notice>) -> String {
    let mut events = Map::new();
    if cart_updated {
        events.insert(CART_UPDATED_EVENT.to_owned(), Value::Null);
    }
    if let Some(notice) = notice {
        let event = match notice.kind() {
            NoticeKind::Toast => "toast",
            NoticeKind::Consultation => "consult-sent",
        };
        events.insert(event.to_owned(), Value::String(notice.message().to_owned()));
    }
    ascii_json(&Value::Object(events).to_string())
}

fn ascii_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0_u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
