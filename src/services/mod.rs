// src/services/mod.rs

//! Service layer for the paperbot application.
//!
//! This module contains the I/O collaborators around the digest pipeline:
//! - Listing scraping (`ListingScraper`)
//! - Telegram delivery (`TelegramNotifier`, `Notifier`)

mod listing;
mod telegram;

pub use listing::{ListingScraper, parse_listing};
pub use telegram::{DryRunNotifier, Notifier, TelegramNotifier};
