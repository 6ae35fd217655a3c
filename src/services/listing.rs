// src/services/listing.rs

//! arXiv listing scraper service.
//!
//! Fetches a field listing page and extracts one `PaperRecord` per entry
//! in document order. Only brand-new entries carry an abstract; the count
//! of abstracts on the page is the listing's new-paper count.

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{CrawlerConfig, Listing, PaperRecord, TimeRange};
use crate::utils::http;
use crate::utils::resolve_url;

/// Maximum author names shown before abbreviating to "et al.".
const MAX_SUMMARY_AUTHORS: usize = 3;

/// Service for scraping arXiv listing pages.
pub struct ListingScraper {
    client: Client,
}

impl ListingScraper {
    /// Create a new scraper with the given crawler configuration.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
        })
    }

    /// Fetch and parse the listing for a field and time range.
    pub async fn fetch(&self, field: &str, when: TimeRange) -> Result<Listing> {
        let url = when.listing_url(field);
        let html = self.client.get(&url).send().await?.text().await?;
        let base = Url::parse(&url)?;
        parse_listing(&html, field, &base)
    }
}

/// Parse a listing page into ordered paper records.
///
/// Titles come from `div.list-title` (labelled "Title:"), author blocks
/// from `div.list-authors` (labelled "Authors:"), detail links from
/// `a[title="Abstract"]` resolved against the page URL, and abstracts from
/// `p.mathjax`. Entries missing a title are skipped.
pub fn parse_listing(html: &str, field: &str, base: &Url) -> Result<Listing> {
    let document = Html::parse_document(html);

    let title_sel = parse_selector("div.list-title")?;
    let authors_sel = parse_selector("div.list-authors")?;
    let link_sel = parse_selector(r#"a[title="Abstract"]"#)?;
    let abstract_sel = parse_selector("p.mathjax")?;
    let name_sel = parse_selector("a")?;

    let titles: Vec<String> = document
        .select(&title_sel)
        .map(|el| strip_label(&element_text(&el), "Title:"))
        .collect();

    let authors: Vec<(String, String)> = document
        .select(&authors_sel)
        .map(|el| {
            let full = strip_label(&element_text(&el), "Authors:");
            let names: Vec<String> = el.select(&name_sel).map(|a| element_text(&a)).collect();
            let summary = summarize_authors(&full, &names);
            (full, summary)
        })
        .collect();

    let urls: Vec<String> = document
        .select(&link_sel)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| resolve_url(base, href))
        .collect();

    let abstracts: Vec<String> = document
        .select(&abstract_sel)
        .map(|el| element_text(&el))
        .collect();

    let total = titles.len();
    let new_count = abstracts.len().min(total);

    let mut records = Vec::with_capacity(total);
    for (n, title) in titles.into_iter().enumerate() {
        if title.is_empty() {
            continue;
        }
        let (full, summary) = authors.get(n).cloned().unwrap_or_default();
        records.push(PaperRecord {
            index: n + 1,
            title,
            authors: full,
            author_summary: summary,
            abstract_text: abstracts.get(n).cloned(),
            url: urls.get(n).cloned().unwrap_or_default(),
        });
    }

    if records.is_empty() && total == 0 {
        log::warn!("No entries found on listing page for {field}");
    }

    Ok(Listing {
        field: field.to_string(),
        records,
        total,
        new_count,
    })
}

/// Collect an element's text with whitespace normalized.
fn element_text(el: &scraper::ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a leading field label such as "Title:".
fn strip_label(text: &str, label: &str) -> String {
    text.strip_prefix(label).unwrap_or(text).trim().to_string()
}

/// Abbreviate an author list to at most three names plus "et al.".
fn summarize_authors(full: &str, names: &[String]) -> String {
    if names.is_empty() {
        return full.to_string();
    }
    if names.len() > MAX_SUMMARY_AUTHORS {
        format!("{} et al.", names[..MAX_SUMMARY_AUTHORS].join(", "))
    } else {
        names.join(", ")
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
<html><body>
<dl>
  <dt><a title="Abstract" href="/abs/2401.00001">arXiv:2401.00001</a></dt>
  <dd>
    <div class="list-title mathjax">Title: Lensing of gravitational waves</div>
    <div class="list-authors">Authors:
      <a href="/a/one">A. One</a>,
      <a href="/a/two">B. Two</a>
    </div>
    <p class="mathjax">We study lensed gravitational-wave signals.</p>
  </dd>
  <dt><a title="Abstract" href="/abs/2401.00002">arXiv:2401.00002</a></dt>
  <dd>
    <div class="list-title mathjax">Title: Deep learning for cosmology</div>
    <div class="list-authors">Authors:
      <a href="/a/c">C. Three</a>,
      <a href="/a/d">D. Four</a>,
      <a href="/a/e">E. Five</a>,
      <a href="/a/f">F. Six</a>
    </div>
    <p class="mathjax">A deep learning survey.</p>
  </dd>
  <dt><a title="Abstract" href="/abs/2312.99999">arXiv:2312.99999</a></dt>
  <dd>
    <div class="list-title mathjax">Title: An older entry</div>
    <div class="list-authors">Authors: <a href="/a/g">G. Seven</a></div>
  </dd>
</dl>
</body></html>
"#;

    fn base() -> Url {
        Url::parse("https://arxiv.org/list/gr-qc/new?skip=0&show=1000").unwrap()
    }

    #[test]
    fn test_parse_listing_counts() {
        let listing = parse_listing(FIXTURE, "gr-qc", &base()).unwrap();
        assert_eq!(listing.total, 3);
        assert_eq!(listing.new_count, 2);
        assert_eq!(listing.records.len(), 3);
    }

    #[test]
    fn test_parse_listing_record_fields() {
        let listing = parse_listing(FIXTURE, "gr-qc", &base()).unwrap();

        let first = &listing.records[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.title, "Lensing of gravitational waves");
        assert_eq!(first.authors, "A. One, B. Two");
        assert_eq!(first.author_summary, "A. One, B. Two");
        assert_eq!(first.url, "https://arxiv.org/abs/2401.00001");
        assert_eq!(
            first.abstract_text.as_deref(),
            Some("We study lensed gravitational-wave signals.")
        );
    }

    #[test]
    fn test_author_abbreviation_over_three() {
        let listing = parse_listing(FIXTURE, "gr-qc", &base()).unwrap();
        assert_eq!(
            listing.records[1].author_summary,
            "C. Three, D. Four, E. Five et al."
        );
    }

    #[test]
    fn test_old_entry_has_no_abstract() {
        let listing = parse_listing(FIXTURE, "gr-qc", &base()).unwrap();
        assert_eq!(listing.records[2].abstract_text, None);
        assert_eq!(listing.records[2].index, 3);
    }

    #[test]
    fn test_empty_page() {
        let listing = parse_listing("<html><body></body></html>", "gr-qc", &base()).unwrap();
        assert_eq!(listing.total, 0);
        assert!(listing.records.is_empty());
    }

    #[test]
    fn test_summarize_authors() {
        let names: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(summarize_authors("full", &names), "A, B, C et al.");
        assert_eq!(summarize_authors("full", &names[..2]), "A, B");
        assert_eq!(summarize_authors("full text", &[]), "full text");
    }
}
