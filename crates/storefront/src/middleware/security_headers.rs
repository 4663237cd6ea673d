//! Security headers middleware.
//!
//! Adds restrictive security headers to every response. The CSP allows
//! scripts only from this origin or carrying the request's nonce, plus the
//! jsDelivr CDN that serves Bootstrap and HTMX.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Origin of the Bootstrap, Bootstrap Icons and HTMX bundles.
pub const CDN_ORIGIN: &str = "https://cdn.jsdelivr.net";

/// Build the `Content-Security-Policy` value for a nonce.
#[must_use]
pub fn content_security_policy(nonce: Option<&str>) -> String {
    let script_src = nonce.filter(|n| !n.is_empty()).map_or_else(
        || format!("'self' {CDN_ORIGIN}"),
        |n| format!("'self' 'nonce-{n}' {CDN_ORIGIN}"),
    );
    format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self' {CDN_ORIGIN}; \
         font-src 'self' {CDN_ORIGIN}; \
         img-src 'self' data:; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: same-origin`
/// - `Content-Security-Policy` from [`content_security_policy`]
/// - `Permissions-Policy` denying sensors, camera, microphone, payment
/// - `Cache-Control: no-store` on HTML, since pages embed visitor state
/// - `Cross-Origin-Opener-Policy: same-origin`
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let nonce = request.extensions().get::<CspNonce>().cloned();
    let mut response = next.run(request).await;
    let is_html = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("same-origin"));

    match HeaderValue::from_str(&content_security_policy(nonce.as_ref().map(CspNonce::value))) {
        Ok(csp) => {
            headers.insert(CONTENT_SECURITY_POLICY, csp);
        }
        Err(e) => tracing::warn!(error = %e, "Could not build CSP header"),
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             camera=(), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             payment=(), \
             usb=()",
        ),
    );

    if is_html {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_includes_nonce() {
        let csp = content_security_policy(Some("abc123"));
        assert!(csp.contains("script-src 'self' 'nonce-abc123' https://cdn.jsdelivr.net;"));
        assert!(csp.contains("frame-ancestors 'none'"));
    }

    #[test]
    fn test_csp_without_nonce() {
        let csp = content_security_policy(None);
        assert!(!csp.contains("nonce-"));
        assert_eq!(csp, content_security_policy(Some("")));
    }
}
