// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Extract an arXiv identifier from an abstract-page URL.
pub fn extract_arxiv_id(url: &str) -> Option<String> {
    // New-style IDs (2401.01234v2) and old-style ones (gr-qc/0510072).
    let patterns = [
        regex::Regex::new(r"/abs/(\d{4}\.\d{4,5}(?:v\d+)?)").ok()?,
        regex::Regex::new(r"/abs/([a-z-]+(?:\.[A-Z]{2})?/\d{7})").ok()?,
    ];

    for pattern in &patterns {
        if let Some(caps) = pattern.captures(url) {
            if let Some(id) = caps.get(1) {
                return Some(id.as_str().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://arxiv.org/list/gr-qc/new").unwrap();
        assert_eq!(
            resolve_url(&base, "/abs/2401.00001"),
            "https://arxiv.org/abs/2401.00001"
        );
        assert_eq!(
            resolve_url(&base, "https://other.org/x"),
            "https://other.org/x"
        );
    }

    #[test]
    fn test_extract_arxiv_id_new_style() {
        assert_eq!(
            extract_arxiv_id("https://arxiv.org/abs/2401.01234"),
            Some("2401.01234".to_string())
        );
        assert_eq!(
            extract_arxiv_id("https://arxiv.org/abs/2401.01234v2"),
            Some("2401.01234v2".to_string())
        );
    }

    #[test]
    fn test_extract_arxiv_id_old_style() {
        assert_eq!(
            extract_arxiv_id("https://arxiv.org/abs/gr-qc/0510072"),
            Some("gr-qc/0510072".to_string())
        );
    }

    #[test]
    fn test_extract_arxiv_id_none() {
        assert_eq!(extract_arxiv_id("https://example.com/paper/1"), None);
    }
}
