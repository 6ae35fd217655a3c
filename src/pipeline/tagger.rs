// src/pipeline/tagger.rs

//! Keyword tagging over paper titles and abstracts.
//!
//! Matching is a plain substring scan over normalized text, so a short
//! keyword can match inside a longer word ("gw" matches "growth"). This is
//! a known limitation of the matching scheme, kept deliberately.

use crate::models::{KeywordGroup, PaperRecord};

/// Tags assigned to one paper, merged across all matching groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignment {
    /// 1-based paper index
    pub index: usize,

    /// Tags in keyword-group declaration order
    pub tags: Vec<String>,
}

impl TagAssignment {
    /// Space-separated tag string for rendering.
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}

/// Normalize text for matching: lowercase, hyphens to spaces, repeated
/// whitespace collapsed to single spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Match keyword groups against all records.
///
/// For each group and keyword in declaration order, scans every record's
/// abstract and then every record's title. Each hit records a
/// `(paper index, group index)` pair; pairs are sorted and deduplicated so
/// a paper matching one group in both title and abstract counts once.
/// Only papers with at least one match appear in the result, in ascending
/// index order.
pub fn tag_papers(records: &[PaperRecord], groups: &[KeywordGroup]) -> Vec<TagAssignment> {
    let mut pairs: Vec<(usize, usize)> = Vec::new();

    for (group_idx, group) in groups.iter().enumerate() {
        for keyword in group.keywords() {
            let needle = normalize(keyword);
            if needle.is_empty() {
                continue;
            }

            for record in records {
                if let Some(abstract_text) = &record.abstract_text {
                    if normalize(abstract_text).contains(&needle) {
                        pairs.push((record.index, group_idx));
                    }
                }
            }
            for record in records {
                if normalize(&record.title).contains(&needle) {
                    pairs.push((record.index, group_idx));
                }
            }
        }
    }

    pairs.sort_unstable();
    pairs.dedup();

    // Fold adjacent pairs sharing a paper index into one assignment.
    let mut assignments: Vec<TagAssignment> = Vec::new();
    for (index, group_idx) in pairs {
        let tag = groups[group_idx].tag();
        match assignments.last_mut() {
            Some(last) if last.index == index => last.tags.push(tag),
            _ => assignments.push(TagAssignment {
                index,
                tags: vec![tag],
            }),
        }
    }

    assignments
}

/// Sorted unique indices of all tagged papers.
pub fn selected_indices(assignments: &[TagAssignment]) -> Vec<usize> {
    assignments.iter().map(|a| a.index).collect()
}
