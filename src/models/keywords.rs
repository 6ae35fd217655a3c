// src/models/keywords.rs

//! Keyword group data structure.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A named set of synonym keywords sharing one display tag.
///
/// The tag is derived from the first keyword only: `["gw", "gravitational
/// wave"]` produces `#gw`. Groups are matched in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeywordGroup {
    keywords: Vec<String>,
}

impl KeywordGroup {
    /// Create a group from an ordered keyword list.
    pub fn new(keywords: Vec<String>) -> Result<Self> {
        if keywords.is_empty() {
            return Err(AppError::config("keyword group must not be empty"));
        }
        Ok(Self { keywords })
    }

    /// Keywords in declaration order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Display tag: `#` plus the first keyword with spaces removed.
    pub fn tag(&self) -> String {
        format!("#{}", self.keywords[0].replace(' ', ""))
    }

    /// Build groups from raw keyword lists, rejecting empty groups and
    /// tag collisions (two groups sharing a first keyword).
    pub fn build_all(raw: &[Vec<String>]) -> Result<Vec<Self>> {
        let groups: Vec<Self> = raw
            .iter()
            .map(|g| Self::new(g.clone()))
            .collect::<Result<_>>()?;

        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            if !seen.insert(group.tag()) {
                return Err(AppError::config(format!(
                    "duplicate tag {}: two keyword groups share a first keyword",
                    group.tag()
                )));
            }
        }
        Ok(groups)
    }
}
