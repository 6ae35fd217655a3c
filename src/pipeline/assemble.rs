// src/pipeline/assemble.rs

//! Digest assembly: summary header, tag counts, ordered paper entries.

use crate::models::{KeywordGroup, Listing};

use super::tagger::TagAssignment;

/// One rendered paper entry.
///
/// The text carries its own leading separator so entries can be appended
/// to a message as-is. An entry is never split across messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    /// 1-based paper index
    pub index: usize,

    /// Rendered entry text, including any section banner prefix
    pub text: String,
}

/// A digest for one field, ready for pagination.
#[derive(Debug, Clone, Default)]
pub struct Digest {
    pub header: String,
    pub entries: Vec<DigestEntry>,
}

/// Section banner used to separate new papers from old ones.
fn banner(label: &str, indent: usize) -> String {
    let bar = format!("➕{}➕", "➖".repeat(10));
    format!("\n{bar}\n{}{label}\n{bar}\n", " ".repeat(indent))
}

/// Escape characters that would break the HTML message markup.
pub fn escape_title(title: &str) -> String {
    title.replace('<', "&lt;")
}

/// Last `n` characters of a string, used as a compact link label.
pub fn tail_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

/// Build the digest for a tagged listing.
///
/// The header reports the total and brand-new paper counts, the selected
/// count, and per-group tag counts (a paper carrying several tags
/// increments several counters). Entries follow in ascending index order;
/// the "Old Papers" banner is prefixed to the first entry whose index
/// exceeds the listing's new-paper count. When `new_count` is zero, or no
/// selected index exceeds it, no banner is inserted.
pub fn assemble(listing: &Listing, assignments: &[TagAssignment], groups: &[KeywordGroup]) -> Digest {
    let mut header = format!(
        "📜 <b>{}</b>\n{} total papers today!\n{} brand new!",
        listing.field, listing.total, listing.new_count
    );
    header.push_str(&format!(
        "\n\nYou have {} new interesting papers!",
        assignments.len()
    ));

    for group in groups {
        let tag = group.tag();
        let count = assignments.iter().filter(|a| a.tags.contains(&tag)).count();
        header.push_str(&format!("\n{count} in {tag}"));
    }
    header.push('\n');
    header.push_str(&banner("New Papers", 17));

    let mut entries = Vec::with_capacity(assignments.len());
    let mut old_section_started = false;

    for assignment in assignments {
        let Some(record) = listing.record(assignment.index) else {
            continue;
        };

        let mut text = String::new();
        if !old_section_started && listing.new_count > 0 && record.index > listing.new_count {
            text.push_str(&banner("Old Papers", 18));
            old_section_started = true;
        }

        text.push_str(&format!(
            "\n{}) {}\n<i>{}</i>\n{}\n<a href=\"{}\">{}</a>\n",
            record.index,
            escape_title(&record.title),
            record.author_summary,
            assignment.tag_line(),
            record.url,
            tail_chars(&record.url, 10),
        ));

        entries.push(DigestEntry {
            index: record.index,
            text,
        });
    }

    Digest { header, entries }
}
