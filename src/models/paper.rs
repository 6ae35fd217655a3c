// src/models/paper.rs

//! Paper listing data structures.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Time range of an arXiv listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Fresh submissions since the last mailing
    Today,
    /// Listings for the past week
    PastWeek,
}

impl TimeRange {
    /// Build the listing URL for a field.
    pub fn listing_url(&self, field: &str) -> String {
        match self {
            TimeRange::Today => format!("https://arxiv.org/list/{field}/new?skip=0&show=1000"),
            TimeRange::PastWeek => format!("https://arxiv.org/list/{field}/pastweek?show=270"),
        }
    }

    /// Parse a user-supplied time range string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "today" => Ok(TimeRange::Today),
            "pastweek" | "past week" => Ok(TimeRange::PastWeek),
            other => Err(AppError::usage(format!(
                "\"when\" can only be \"today\" or \"pastweek\", got \"{other}\""
            ))),
        }
    }
}

/// A single paper entry scraped from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperRecord {
    /// 1-based position in the listing; the externally visible paper ID
    pub index: usize,

    /// Paper title
    pub title: String,

    /// Full raw author-list text (used for author matching)
    pub authors: String,

    /// Abbreviated author display: at most 3 names then "et al."
    pub author_summary: String,

    /// Abstract text; only present for brand-new entries
    pub abstract_text: Option<String>,

    /// Full URL to the paper's abstract page
    pub url: String,
}

/// An ordered set of papers scraped from one field listing.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Field code the listing was fetched for (e.g., "astro-ph")
    pub field: String,

    /// Papers in source order
    pub records: Vec<PaperRecord>,

    /// Total papers on the page
    pub total: usize,

    /// Papers with an abstract available (the brand-new ones)
    pub new_count: usize,
}

impl Listing {
    /// Look up a record by its 1-based index.
    pub fn record(&self, index: usize) -> Option<&PaperRecord> {
        self.records.get(index.checked_sub(1)?)
    }
}
