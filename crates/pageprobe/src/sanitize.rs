//! Text sanitation helpers shared by the extractors

/// Ellipsis appended by [`truncate`]
pub const ELLIPSIS: &str = "...";

/// Collapse all whitespace in a fragment down to single spaces.
///
/// Trims the ends, turns newlines and tabs into spaces, then collapses runs
/// of spaces until none remain. Idempotent.
pub fn collapse_whitespace(text: &str) -> String {
    let mut text = text.trim().replace(['\n', '\t'], " ");
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text
}

/// Cap a fragment at `max_len` characters, appending an ellipsis when cut.
///
/// Character-based, so multi-byte input is never split mid code point.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_basic() {
        assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
        assert_eq!(collapse_whitespace("a\nb\tc"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_long_runs() {
        // A long run must fully collapse, not just shrink by one pass
        assert_eq!(collapse_whitespace("a          b"), "a b");
        assert_eq!(collapse_whitespace("a \n\t \n b"), "a b");
    }

    #[test]
    fn test_collapse_idempotent() {
        for s in ["  a   b \n c  ", "plain", "", "\t\t\t", "x       y"] {
            let once = collapse_whitespace(s);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_truncate_under_limit() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_over_limit() {
        assert_eq!(truncate("hello world", 5), "hello...");
        let out = truncate(&"x".repeat(200), 100);
        assert_eq!(out.chars().count(), 100 + ELLIPSIS.len());
    }

    #[test]
    fn test_truncate_multibyte() {
        // Cyrillic chars are two bytes each; a byte slice here would panic
        let out = truncate("привет мир", 6);
        assert_eq!(out, "привет...");
    }
}
