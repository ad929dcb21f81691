//! JSON response extraction
//!
//! The body is decoded into a neutral `serde_json::Value` first. Only when
//! the value carries a nonzero integer `id` is the typed page decode
//! attempted; `id == 0` is the upstream API's undefined sentinel and falls
//! through to the generic view. A body that fails to parse at all is never
//! an error for the caller, it degrades to a verbatim dump.

use crate::options::RenderOptions;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write;
use tracing::debug;

/// Marker appended when the pretty-printed view is cut short
const TRUNCATION_MARKER: &str = "... [output truncated]";

/// The known wiki page shape. Field names are case-sensitive; fields the
/// body omits decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StructuredPage {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub page_type: String,
}

/// Outcome of inspecting a JSON body
#[derive(Debug, Clone)]
pub enum JsonView {
    /// Recognized page shape
    Page(StructuredPage),
    /// Valid JSON of some other shape
    Other(Value),
    /// Body was not valid JSON at all
    Invalid { error: String, raw: String },
}

/// Decode a JSON body into one of the three views. Never fails.
pub fn extract_json(body: &[u8]) -> JsonView {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "body is not valid JSON, falling back to raw dump");
            return JsonView::Invalid {
                error: e.to_string(),
                raw: String::from_utf8_lossy(body).into_owned(),
            };
        }
    };
    match match_page(&value) {
        Some(page) => JsonView::Page(page),
        None => JsonView::Other(value),
    }
}

/// Narrow predicate applied before committing to the page shape.
fn match_page(value: &Value) -> Option<StructuredPage> {
    let id = value.get("id")?.as_i64()?;
    if id == 0 {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

/// Render a view as labelled plain text.
pub fn render_json(view: &JsonView, opts: &RenderOptions) -> String {
    match view {
        JsonView::Page(page) => render_page(page),
        JsonView::Other(value) => render_generic(value, opts),
        JsonView::Invalid { error, raw } => {
            let mut out = String::new();
            let _ = writeln!(out, "JSON parse error: {error}");
            let _ = writeln!(out, "\nRaw body:");
            let _ = writeln!(out, "{}", "-".repeat(60));
            let _ = writeln!(out, "{raw}");
            out
        }
    }
}

fn render_page(page: &StructuredPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", page.id);
    let _ = writeln!(out, "Slug: {}", page.slug);
    let _ = writeln!(out, "Title: {}", page.title);
    let _ = writeln!(out, "Page type: {}", page.page_type);

    if !page.content.is_empty() {
        let _ = writeln!(out, "\nContent:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        let cleaned = clean_content(&page.content);
        let mut line_no = 0usize;
        for line in cleaned.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            line_no += 1;
            let _ = writeln!(out, "{line_no:3}: {line}");
        }
    }
    out
}

/// Strip markdown emphasis and heading markers, unescape non-breaking spaces.
fn clean_content(content: &str) -> String {
    content
        .replace("**", "")
        .replace('#', "")
        .replace("&nbsp;", " ")
}

fn render_generic(value: &Value, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let pretty =
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

    if pretty.chars().count() > opts.max_json_render {
        let _ = writeln!(out, "JSON (first {} chars):", opts.max_json_render);
        let _ = writeln!(out, "{}", "-".repeat(60));
        let cut: String = pretty.chars().take(opts.max_json_render).collect();
        let _ = writeln!(out, "{cut}\n{TRUNCATION_MARKER}");
    } else {
        let _ = writeln!(out, "JSON:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(out, "{pretty}");
    }

    if let Value::Object(map) = value {
        let _ = writeln!(out, "\nFields:");
        for key in map.keys() {
            let _ = writeln!(out, "  - {key}");
        }
    }
    out
}
