//! HTML page extraction
//!
//! Walks the parsed document once per query via `scraper` selectors. Link
//! collection stops at the configured cap, but the anchor scan keeps going so
//! the total count always covers the whole document.

use crate::options::{LinkTextPolicy, RenderOptions};
use crate::resolve::resolve_href;
use crate::sanitize::{collapse_whitespace, truncate};
use scraper::{Html, Selector};
use std::fmt::Write;
use tracing::debug;

/// Label substituted for anchors with no visible text
const EMPTY_LINK_LABEL: &str = "[no text]";

/// Placeholder rendered when a page has no title
const MISSING_TITLE: &str = "(not found)";

/// Display cap for resolved link URLs (47 chars + ellipsis)
const URL_DISPLAY_LEN: usize = 47;

/// One collected hyperlink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Sanitized visible text, never empty
    pub text: String,
    /// Absolute URL the anchor resolves to
    pub url: String,
}

/// Everything extracted from one HTML page
#[derive(Debug, Clone, Default)]
pub struct PageSummary {
    pub title: Option<String>,
    pub description: Option<String>,
    /// First links in document order, capped at `max_links`
    pub links: Vec<LinkEntry>,
    pub h1_count: usize,
    pub h2_count: usize,
    pub paragraph_count: usize,
    pub image_count: usize,
    /// Count of every anchor in the document, independent of the link cap
    pub total_link_count: usize,
}

// Selectors are static and known-good, so parse failures are unreachable.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Extract a summary from raw HTML.
pub fn extract_page(html: &str, base_url: &str, opts: &RenderOptions) -> PageSummary {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&selector("title"))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    // First description meta wins, later duplicates are ignored
    let description = doc
        .select(&selector(r#"meta[name="description"]"#))
        .find_map(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let mut links = Vec::new();
    let mut total_link_count = 0usize;
    for el in doc.select(&selector("a")) {
        total_link_count += 1;
        if links.len() >= opts.max_links {
            continue;
        }
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        let raw_text = el.text().collect::<String>();
        let raw_text = raw_text.trim();
        if raw_text.chars().count() > opts.max_link_text_len {
            continue;
        }
        // Non-navigational targets
        if href.starts_with('#') || href.starts_with("javascript:") || href.starts_with("mailto:")
        {
            continue;
        }
        let text = collapse_whitespace(raw_text);
        let text = if text.is_empty() {
            match opts.link_text_policy {
                LinkTextPolicy::Placeholder => EMPTY_LINK_LABEL.to_string(),
                LinkTextPolicy::Skip => continue,
            }
        } else {
            text
        };
        links.push(LinkEntry {
            text,
            url: resolve_href(href, base_url),
        });
    }

    let summary = PageSummary {
        title,
        description,
        links,
        h1_count: doc.select(&selector("h1")).count(),
        h2_count: doc.select(&selector("h2")).count(),
        paragraph_count: doc.select(&selector("p")).count(),
        image_count: doc.select(&selector("img")).count(),
        total_link_count,
    };
    debug!(
        links = summary.links.len(),
        total = summary.total_link_count,
        "extracted HTML summary"
    );
    summary
}

/// Render a summary as labelled plain text.
pub fn render_page(summary: &PageSummary, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Title: {}",
        summary.title.as_deref().unwrap_or(MISSING_TITLE)
    );
    if let Some(ref description) = summary.description {
        let _ = writeln!(
            out,
            "Description: {}",
            truncate(description, opts.max_description_len)
        );
    }

    let _ = writeln!(out, "\nLinks (first {}):", opts.max_links);
    let _ = writeln!(out, "{}", "-".repeat(60));
    if summary.links.is_empty() {
        let _ = writeln!(out, "No links found");
    }
    for (i, link) in summary.links.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {}", i + 1, link.text);
        let _ = writeln!(out, "    {}", truncate(&link.url, URL_DISPLAY_LEN));
    }

    let _ = writeln!(out, "\nStatistics:");
    let _ = writeln!(out, "  h1 headings: {}", summary.h1_count);
    let _ = writeln!(out, "  h2 headings: {}", summary.h2_count);
    let _ = writeln!(out, "  paragraphs: {}", summary.paragraph_count);
    let _ = writeln!(out, "  images: {}", summary.image_count);
    let _ = writeln!(out, "  total links: {}", summary.total_link_count);
    out
}
