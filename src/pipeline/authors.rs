// src/pipeline/authors.rs

//! Author-list matching, independent of keyword tagging.
//!
//! Names are matched as literal substrings of the raw author text, with
//! no normalization: "A. Einstein" only hits author lists spelling the
//! name exactly that way.

use crate::models::{Listing, PaperRecord};
use crate::utils::extract_arxiv_id;

use super::assemble::{Digest, DigestEntry, escape_title, tail_chars};

/// Find papers whose author list contains any of the given names.
///
/// Returns sorted unique 1-based indices.
pub fn find_by_authors(records: &[PaperRecord], names: &[String]) -> Vec<usize> {
    let mut indices: Vec<usize> = Vec::new();

    for name in names {
        for record in records {
            if record.authors.contains(name.as_str()) {
                indices.push(record.index);
            }
        }
    }

    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Build the author-match digest for a listing.
///
/// The header is a plain match count with no tag breakdown. Entries show
/// the full unabbreviated author text, and the link label is the paper's
/// arXiv identifier where one can be extracted from the URL.
pub fn assemble_author_digest(listing: &Listing, indices: &[usize]) -> Digest {
    let header = format!(
        "{} papers found among your author list in <b>{}</b>!\n",
        indices.len(),
        listing.field
    );

    let entries = indices
        .iter()
        .filter_map(|&index| listing.record(index))
        .map(|record| {
            let label =
                extract_arxiv_id(&record.url).unwrap_or_else(|| tail_chars(&record.url, 10));
            let text = format!(
                "\n{}) {}\n<i>{}</i>\n<a href=\"{}\">{}</a>\n",
                record.index,
                escape_title(&record.title),
                record.authors,
                record.url,
                label,
            );
            DigestEntry {
                index: record.index,
                text,
            }
        })
        .collect();

    Digest { header, entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, authors: &str) -> PaperRecord {
        PaperRecord {
            index,
            title: format!("Paper {index}"),
            authors: authors.to_string(),
            author_summary: authors.to_string(),
            abstract_text: None,
            url: format!("https://arxiv.org/abs/2401.{index:05}"),
        }
    }

    #[test]
    fn test_literal_substring_match() {
        let records = vec![
            record(1, "A. Einstein, N. Rosen"),
            record(2, "B. Riemann"),
            record(3, "K. Schwarzschild, A. Einstein"),
        ];
        let names = vec!["A. Einstein".to_string()];

        assert_eq!(find_by_authors(&records, &names), vec![1, 3]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let records = vec![record(1, "a. einstein")];
        let names = vec!["A. Einstein".to_string()];

        assert!(find_by_authors(&records, &names).is_empty());
    }

    #[test]
    fn test_indices_sorted_and_unique_across_names() {
        let records = vec![
            record(1, "A. Einstein, M. Planck"),
            record(2, "M. Planck"),
        ];
        let names = vec!["M. Planck".to_string(), "A. Einstein".to_string()];

        assert_eq!(find_by_authors(&records, &names), vec![1, 2]);
    }

    #[test]
    fn test_author_digest_header_and_entries() {
        let listing = Listing {
            field: "astro-ph".to_string(),
            records: vec![record(1, "A. Einstein, N. Rosen"), record(2, "B. Riemann")],
            total: 2,
            new_count: 2,
        };

        let digest = assemble_author_digest(&listing, &[1]);
        assert_eq!(
            digest.header,
            "1 papers found among your author list in <b>astro-ph</b>!\n"
        );
        assert_eq!(digest.entries.len(), 1);

        let text = &digest.entries[0].text;
        assert!(text.contains("<i>A. Einstein, N. Rosen</i>"));
        assert!(text.contains(">2401.00001</a>"));
        assert!(!digest.header.contains('#'));
    }

    #[test]
    fn test_no_matches_yields_no_entries() {
        let records = vec![record(1, "B. Riemann")];
        let names = vec!["A. Einstein".to_string()];
        assert!(find_by_authors(&records, &names).is_empty());
    }
}
