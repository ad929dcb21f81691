//! Render configuration
//!
//! Every output cap the extractors enforce lives here as a named field so
//! callers (and tests) can exercise boundary values directly instead of
//! relying on magic numbers buried in the extractors.

/// What to do with an anchor whose visible text collapses to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkTextPolicy {
    /// Keep the link and substitute a placeholder label
    #[default]
    Placeholder,
    /// Drop the link entirely
    Skip,
}

/// Size caps and policies applied while rendering a response
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum number of links collected from an HTML page
    pub max_links: usize,
    /// Anchors whose visible text is longer than this are skipped
    pub max_link_text_len: usize,
    /// Display cap for the meta description
    pub max_description_len: usize,
    /// Character budget for pretty-printed generic JSON
    pub max_json_render: usize,
    /// Character budget for the raw body preview
    pub max_preview: usize,
    /// Handling of anchors with empty visible text
    pub link_text_policy: LinkTextPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_links: 10,
            max_link_text_len: 100,
            max_description_len: 120,
            max_json_render: 2000,
            max_preview: 1000,
            link_text_policy: LinkTextPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.max_links, 10);
        assert_eq!(opts.max_link_text_len, 100);
        assert_eq!(opts.max_description_len, 120);
        assert_eq!(opts.max_json_render, 2000);
        assert_eq!(opts.max_preview, 1000);
        assert_eq!(opts.link_text_policy, LinkTextPolicy::Placeholder);
    }
}
