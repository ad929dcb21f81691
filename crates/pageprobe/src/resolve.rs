//! Relative link resolution
//!
//! The resolver is a pure string transform: it never fails, and for bases it
//! cannot pick apart it falls back to a best-effort concatenation. This keeps
//! link extraction total even on garbage hrefs.

/// Resolve a possibly-relative href against the page it appeared on.
pub fn resolve_href(href: &str, base_url: &str) -> String {
    // Already absolute
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    // Root-relative: keep scheme + authority of the base, drop its path
    if href.starts_with('/') {
        if let Some(scheme_end) = base_url.find("://") {
            let authority_start = scheme_end + 3;
            let authority_end = base_url[authority_start..]
                .find('/')
                .map(|i| authority_start + i)
                .unwrap_or(base_url.len());
            return format!("{}{}", &base_url[..authority_end], href);
        }
        return format!("{base_url}{href}");
    }

    // Relative path
    if base_url.ends_with('/') {
        return format!("{base_url}{href}");
    }

    // Replace the last path segment, but only if the base has a path at
    // all. The slash in "https://" must not count as a path boundary, or a
    // bare-authority base would lose its host.
    let path_start = base_url.find("://").map(|i| i + 3).unwrap_or(0);
    match base_url.rfind('/') {
        Some(i) if i >= path_start => format!("{}{}", &base_url[..=i], href),
        _ => format!("{base_url}/{href}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve_href("https://other.com/x", "https://example.com"),
            "https://other.com/x"
        );
        assert_eq!(
            resolve_href("http://other.com", "https://example.com/a/b"),
            "http://other.com"
        );
    }

    #[test]
    fn test_absolute_idempotent() {
        let base = "https://example.com/blog/";
        for href in ["about", "/about", "https://example.com/about"] {
            let once = resolve_href(href, base);
            assert_eq!(resolve_href(&once, base), once);
        }
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve_href("/about", "https://example.com"),
            "https://example.com/about"
        );
        assert_eq!(
            resolve_href("/about", "https://example.com/deep/path?q=1"),
            "https://example.com/about"
        );
        assert_eq!(
            resolve_href("/a", "http://example.com/x"),
            "http://example.com/a"
        );
    }

    #[test]
    fn test_relative_with_path() {
        assert_eq!(
            resolve_href("images/a.png", "https://example.com/blog/post1"),
            "https://example.com/blog/images/a.png"
        );
        assert_eq!(
            resolve_href("page2", "https://example.com/blog/"),
            "https://example.com/blog/page2"
        );
    }

    #[test]
    fn test_relative_against_bare_authority() {
        // No path slash after the scheme: the authority boundary gets an
        // implicit slash, never a doubled or missing separator
        assert_eq!(
            resolve_href("images/a.png", "https://example.com"),
            "https://example.com/images/a.png"
        );
    }

    #[test]
    fn test_schemeless_base_best_effort() {
        assert_eq!(resolve_href("/x", "example.com"), "example.com/x");
        assert_eq!(resolve_href("x", "example.com"), "example.com/x");
    }
}
