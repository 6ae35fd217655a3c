// src/pipeline/run.rs

//! Orchestration entry points.
//!
//! Each run fetches, tags, assembles, and dispatches for one field. All
//! messages for a field are fully assembled before any is sent, and sends
//! happen in assembly order. Fields are processed strictly sequentially.

use crate::error::Result;
use crate::models::{Config, TimeRange};
use crate::services::{ListingScraper, Notifier};

use super::assemble::assemble;
use super::authors::{assemble_author_digest, find_by_authors};
use super::paginate::{MAX_MESSAGE_LEN, paginate};
use super::tagger::tag_papers;

/// Run the keyword digest for one field.
///
/// The digest is dispatched even when nothing matched: the header alone
/// still reports the day's paper counts.
pub async fn run_digest(
    config: &Config,
    scraper: &ListingScraper,
    notifier: &dyn Notifier,
    field: &str,
    when: TimeRange,
) -> Result<()> {
    let groups = config.keyword_groups()?;
    let listing = scraper.fetch(field, when).await?;
    log::info!(
        "{}: {} papers on the listing, {} brand new",
        field,
        listing.total,
        listing.new_count
    );

    let assignments = tag_papers(&listing.records, &groups);
    log::info!("{}: {} papers matched keywords", field, assignments.len());

    let digest = assemble(&listing, &assignments, &groups);
    let messages = paginate(&digest.header, &digest.entries, MAX_MESSAGE_LEN);

    notifier.send(&messages).await?;
    log::info!("{}: sent {} digest message(s)", field, messages.len());
    Ok(())
}

/// Run the author filter for one field.
///
/// Zero matches is not an error; it simply skips dispatch.
pub async fn run_authors(
    config: &Config,
    scraper: &ListingScraper,
    notifier: &dyn Notifier,
    field: &str,
    when: TimeRange,
) -> Result<()> {
    let names = config.authors()?;
    if names.is_empty() {
        log::info!("{}: no author names configured, skipping", field);
        return Ok(());
    }

    let listing = scraper.fetch(field, when).await?;
    let indices = find_by_authors(&listing.records, &names);
    if indices.is_empty() {
        log::info!("{}: no papers matched the author list", field);
        return Ok(());
    }

    let digest = assemble_author_digest(&listing, &indices);
    let messages = paginate(&digest.header, &digest.entries, MAX_MESSAGE_LEN);

    notifier.send(&messages).await?;
    log::info!(
        "{}: sent {} author message(s) for {} paper(s)",
        field,
        messages.len(),
        indices.len()
    );
    Ok(())
}

/// Run digest and author filter for every configured field.
pub async fn run_all(
    config: &Config,
    scraper: &ListingScraper,
    notifier: &dyn Notifier,
    when: TimeRange,
) -> Result<()> {
    for field in &config.fields {
        run_digest(config, scraper, notifier, field, when).await?;
        run_authors(config, scraper, notifier, field, when).await?;
    }
    Ok(())
}
