//! Pipeline entry point: classify one response and render its report

use crate::classify::{classify, ContentKind};
use crate::html::{extract_page, render_page};
use crate::json::{extract_json, render_json};
use crate::options::RenderOptions;
use crate::preview::{extract_preview, render_preview};
use tracing::debug;

/// Classify a response body and render the matching summary.
///
/// Total over its inputs: malformed bodies degrade to a narrower rendering
/// but always produce some text. Each call is independent and keeps no
/// reference to the body afterwards.
pub fn classify_and_render(
    content_type: &str,
    body: &[u8],
    base_url: &str,
    opts: &RenderOptions,
) -> String {
    let kind = classify(content_type);
    debug!(?kind, content_type, "dispatching extractor");
    match kind {
        ContentKind::Json => {
            let view = extract_json(body);
            format!("JSON response:\n{}\n{}", "=".repeat(60), render_json(&view, opts))
        }
        ContentKind::Html => {
            let html = String::from_utf8_lossy(body);
            let summary = extract_page(&html, base_url, opts);
            format!("HTML page:\n{}\n{}", "=".repeat(60), render_page(&summary, opts))
        }
        ContentKind::Other => {
            let preview = extract_preview(body, content_type, opts);
            render_preview(&preview, opts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com";

    #[test]
    fn test_html_branch() {
        let body = b"<html><head><title>T</title></head><body><a href=\"/a\">a</a></body></html>";
        let text = classify_and_render("text/html; charset=utf-8", body, BASE, &RenderOptions::default());
        assert!(text.starts_with("HTML page:"));
        assert!(text.contains("Title: T"));
        assert!(text.contains("https://example.com/a"));
    }

    #[test]
    fn test_json_branch() {
        let body = br#"{"id": 7, "slug": "s", "title": "T", "content": "", "page_type": "doc"}"#;
        let text = classify_and_render("application/json", body, BASE, &RenderOptions::default());
        assert!(text.starts_with("JSON response:"));
        assert!(text.contains("ID: 7"));
    }

    #[test]
    fn test_generic_branch_for_unknown_and_empty_types() {
        for ct in ["text/plain", ""] {
            let text = classify_and_render(ct, b"hello", BASE, &RenderOptions::default());
            assert!(text.contains("Unrecognized content type"));
            assert!(text.contains("hello"));
        }
    }

    #[test]
    fn test_never_fails_on_garbage() {
        let garbage = [0xffu8, 0xfe, 0x00, 0x01];
        for ct in ["application/json", "text/html", "application/octet-stream"] {
            let text = classify_and_render(ct, &garbage, BASE, &RenderOptions::default());
            assert!(!text.is_empty());
        }
    }
}
