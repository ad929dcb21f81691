//! Pageprobe - fetch a URL and summarize what came back
//!
//! This crate provides a reusable library API for fetching a single URL and
//! turning the response into a bounded, human-readable text report. Responses
//! are classified by content type and handed to one of three extractors:
//! HTML (title, description, links, structure counts), JSON (known page shape
//! or pretty-printed generic view), or a raw preview for everything else.

mod classify;
mod client;
mod error;
mod html;
mod json;
mod options;
mod preview;
mod report;
mod resolve;
mod sanitize;

pub use classify::{classify, ContentKind};
pub use client::{fetch, FetchOptions, FetchedResponse};
pub use error::FetchError;
pub use html::{LinkEntry, PageSummary};
pub use json::{JsonView, StructuredPage};
pub use options::{LinkTextPolicy, RenderOptions};
pub use preview::RawPreview;
pub use report::classify_and_render;
pub use resolve::resolve_href;
pub use sanitize::{collapse_whitespace, truncate};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; Pageprobe/1.0)";
