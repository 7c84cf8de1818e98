use chrono::{Local, Utc};
use ulid::Ulid;

/// Timestamp-derived entity id, e.g. `task-01hv3q...`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new().to_string().to_lowercase())
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().to_string()
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Naive link tokenizer: whitespace-separated tokens with an `http` prefix.
/// A display nicety for pasted text, not a URL parser.
pub fn extract_links(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.starts_with("http"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix_and_sort_by_creation() {
        let a = new_id("task");
        let b = new_id("task");
        assert!(a.starts_with("task-"));
        assert!(a <= b);
    }

    #[test]
    fn extract_links_keeps_http_tokens_only() {
        let text = "see https://example.net/roadmap and http://a.b, not ftp://c";
        assert_eq!(
            extract_links(text),
            vec!["https://example.net/roadmap", "http://a.b,"]
        );
    }
}
