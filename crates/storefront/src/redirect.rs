//! Same-site redirect targets.
//!
//! Paths coming back from forms (`return_to`) are resolved against a fixed
//! placeholder origin; anything that resolves to another origin is refused.
//! Targets are written back as path and query only, never with a fragment.

use url::Url;

/// Placeholder origin used only for resolving relative paths.
const LOCAL_ORIGIN: &str = "http://storefront.invalid/";

/// Resolve `path` as a local absolute path.
///
/// Returns `None` for relative paths, other origins (`//host`, `/\host`,
/// `https://...`) and anything that does not parse.
#[must_use]
pub fn local_url(path: &str) -> Option<Url> {
    let path = path.trim();
    if !path.starts_with('/') {
        return None;
    }
    let base = Url::parse(LOCAL_ORIGIN).ok()?;
    let url = base.join(path).ok()?;
    (url.origin() == base.origin()).then_some(url)
}

/// Drop every `key` pair from the query string.
pub fn remove_query_param(url: &mut Url, key: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != key)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    if !kept.is_empty() {
        url.query_pairs_mut().extend_pairs(kept);
    }
}

/// `path?query` of `url`, without the fragment.
#[must_use]
pub fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{query}", url.path()),
        _ => url.path().to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_local_paths_resolve() {
        let url = local_url("/producto?id=rm-011#galeria").unwrap();
        assert_eq!(path_and_query(&url), "/producto?id=rm-011");
        assert_eq!(path_and_query(&local_url(" /colecciones ").unwrap()), "/colecciones");
        assert_eq!(path_and_query(&local_url("/a/../contacto").unwrap()), "/contacto");
    }

    #[test]
    fn test_foreign_targets_are_refused() {
        for target in [
            "",
            "colecciones",
            "//evil.example/",
            "/\\evil.example",
            "https://evil.example/",
            "javascript:alert(1)",
        ] {
            assert!(local_url(target).is_none(), "{target}");
        }
    }

    #[test]
    fn test_remove_query_param() {
        let mut url = local_url("/producto?notice=login&id=rm-011&notice=logout").unwrap();
        remove_query_param(&mut url, "notice");
        assert_eq!(path_and_query(&url), "/producto?id=rm-011");

        let mut url = local_url("/colecciones?notice=login").unwrap();
        remove_query_param(&mut url, "notice");
        assert_eq!(path_and_query(&url), "/colecciones");
    }
}
