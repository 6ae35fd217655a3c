// src/models/mod.rs

//! Domain models for the paperbot application.

mod config;
mod keywords;
mod paper;

// Re-export all public types
pub use config::{Config, CrawlerConfig, TelegramConfig};
pub use keywords::KeywordGroup;
pub use paper::{Listing, PaperRecord, TimeRange};
