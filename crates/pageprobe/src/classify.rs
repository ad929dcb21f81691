//! Content type classification

/// Extraction branch selected for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// JSON extractor (`application/json`)
    Json,
    /// HTML extractor (`text/html`)
    Html,
    /// Raw preview for everything else
    Other,
}

/// Select the extraction branch for a declared content type.
///
/// Pure and total: an empty or unrecognized content type routes to
/// [`ContentKind::Other`].
pub fn classify(content_type: &str) -> ContentKind {
    if content_type.contains("application/json") {
        ContentKind::Json
    } else if content_type.contains("text/html") {
        ContentKind::Html
    } else {
        ContentKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_json() {
        assert_eq!(classify("application/json"), ContentKind::Json);
        assert_eq!(
            classify("application/json; charset=utf-8"),
            ContentKind::Json
        );
    }

    #[test]
    fn test_classify_html() {
        assert_eq!(classify("text/html"), ContentKind::Html);
        assert_eq!(classify("text/html; charset=utf-8"), ContentKind::Html);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("text/plain"), ContentKind::Other);
        assert_eq!(classify("application/xml"), ContentKind::Other);
        assert_eq!(classify("image/png"), ContentKind::Other);
        assert_eq!(classify(""), ContentKind::Other);
    }
}
