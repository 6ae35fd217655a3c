// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::KeywordGroup;

/// Root application configuration.
///
/// Loaded once at process start from a TOML file whose path is supplied on
/// the command line, then passed down by reference. Nothing re-reads it
/// mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and scraping behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Telegram delivery settings
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// arXiv fields to scan (e.g., "gr-qc", "astro-ph")
    #[serde(default = "defaults::fields")]
    pub fields: Vec<String>,

    /// Keyword groups: each inner list shares one tag
    #[serde(default = "defaults::keywords")]
    pub keywords: Vec<Vec<String>>,

    /// Author names to look for in author lists.
    /// Kept as a raw TOML value so a wrong shape is reported as a usage
    /// error instead of failing deserialization of the whole file.
    #[serde(default = "defaults::author_list")]
    pub author_list: toml::Value,

    /// Message sent on weekends instead of running the digest
    #[serde(default = "defaults::weekend_message")]
    pub weekend_message: String,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.fields.is_empty() {
            return Err(AppError::config("No fields defined"));
        }
        if self.keywords.is_empty() {
            return Err(AppError::config("No keyword groups defined"));
        }
        KeywordGroup::build_all(&self.keywords)?;
        self.authors()?;
        Ok(())
    }

    /// Keyword groups in declaration order.
    pub fn keyword_groups(&self) -> Result<Vec<KeywordGroup>> {
        KeywordGroup::build_all(&self.keywords)
    }

    /// Author names, validated to be a list of strings.
    pub fn authors(&self) -> Result<Vec<String>> {
        let items = self
            .author_list
            .as_array()
            .ok_or_else(|| AppError::usage("\"author_list\" must be a list"))?;

        items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::usage("\"author_list\" must be a list"))
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            telegram: TelegramConfig::default(),
            fields: defaults::fields(),
            keywords: defaults::keywords(),
            author_list: defaults::author_list(),
            weekend_message: defaults::weekend_message(),
        }
    }
}

/// HTTP client and scraping behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Telegram Bot API delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL (overridable for testing)
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// Bot token issued by BotFather
    #[serde(default)]
    pub bot_token: String,

    /// Target chat ID
    #[serde(default)]
    pub chat_id: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::api_base(),
            bot_token: String::new(),
            chat_id: String::new(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; paperbot/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Telegram defaults
    pub fn api_base() -> String {
        "https://api.telegram.org".into()
    }

    // Search defaults
    pub fn fields() -> Vec<String> {
        vec!["gr-qc".into(), "astro-ph".into()]
    }

    pub fn keywords() -> Vec<Vec<String>> {
        vec![
            vec!["lens".into()],
            vec![
                "gw".into(),
                "gravitational wave".into(),
                "gravitaitonal-wave".into(),
            ],
            vec!["machine learning".into(), "deep learning".into()],
        ]
    }

    pub fn author_list() -> toml::Value {
        toml::Value::Array(vec![toml::Value::String("A. Einstein".into())])
    }

    pub fn weekend_message() -> String {
        "Nothing new today! \nHave a nice weekend ;)".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let mut config = Config::default();
        config.fields.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn authors_rejects_non_list() {
        let mut config = Config::default();
        config.author_list = toml::Value::String("A. Einstein".to_string());

        let err = config.authors().unwrap_err();
        assert_eq!(err.to_string(), "\"author_list\" must be a list");
    }

    #[test]
    fn authors_rejects_list_of_non_strings() {
        let mut config = Config::default();
        config.author_list = toml::Value::Array(vec![toml::Value::Integer(1)]);
        assert!(config.authors().is_err());
    }

    #[test]
    fn authors_accepts_default_list() {
        let config = Config::default();
        assert_eq!(config.authors().unwrap(), vec!["A. Einstein".to_string()]);
    }

    #[test]
    fn load_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
fields = ["gr-qc"]
keywords = [["lens"], ["gw", "gravitational wave"]]
author_list = ["A. Einstein"]

[crawler]
timeout_secs = 10

[telegram]
bot_token = "token"
chat_id = "42"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.fields, vec!["gr-qc"]);
        assert_eq!(config.crawler.timeout_secs, 10);
        assert_eq!(config.telegram.chat_id, "42");
        assert_eq!(config.keyword_groups().unwrap()[1].tag(), "#gw");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.fields, vec!["gr-qc", "astro-ph"]);
    }
}
