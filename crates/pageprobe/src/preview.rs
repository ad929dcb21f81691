//! Raw preview for unrecognized content types

use crate::options::RenderOptions;
use std::fmt::Write;

/// Marker appended when the preview is cut short
const TRUNCATION_MARKER: &str = "... [output truncated]";

/// Bounded view of a body the tool does not understand
#[derive(Debug, Clone)]
pub struct RawPreview {
    pub content_type: String,
    pub preview: String,
    /// True length of the body in characters, even when cut
    pub total_len: usize,
    pub truncated: bool,
}

/// Build a preview without decoding or validating anything.
pub fn extract_preview(body: &[u8], content_type: &str, opts: &RenderOptions) -> RawPreview {
    let text = String::from_utf8_lossy(body);
    let total_len = text.chars().count();
    if total_len > opts.max_preview {
        RawPreview {
            content_type: content_type.to_string(),
            preview: text.chars().take(opts.max_preview).collect(),
            total_len,
            truncated: true,
        }
    } else {
        RawPreview {
            content_type: content_type.to_string(),
            preview: text.into_owned(),
            total_len,
            truncated: false,
        }
    }
}

/// Render a preview as labelled plain text.
pub fn render_preview(preview: &RawPreview, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Unrecognized content type: {}", preview.content_type);
    if preview.truncated {
        let _ = writeln!(
            out,
            "Preview (first {} of {} chars):",
            opts.max_preview, preview.total_len
        );
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "{}\n{TRUNCATION_MARKER}", preview.preview);
    } else {
        let _ = writeln!(out, "Content:");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "{}", preview.preview);
    }
    out
}
