//! paperbot CLI
//!
//! Fetches arXiv listings, tags papers by keyword, and sends digests to
//! a Telegram chat.

use std::path::PathBuf;

use chrono::{Datelike, Local, Weekday};
use clap::{Parser, Subcommand};
use paperbot::{
    error::Result,
    models::{Config, TimeRange},
    pipeline,
    services::{DryRunNotifier, ListingScraper, Notifier, TelegramNotifier},
};

/// paperbot - arXiv keyword digest bot
#[derive(Parser, Debug)]
#[command(name = "paperbot", version, about = "Finds arXiv papers and sends Telegram digests")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log messages instead of sending them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run digest and author filter for all configured fields
    Run {
        /// Time range: "today" or "pastweek"
        #[arg(long, default_value = "today")]
        when: String,

        /// Run even on weekends (skips the weekend message)
        #[arg(long)]
        ignore_weekend: bool,
    },

    /// Run the keyword digest for a single field
    Digest {
        /// arXiv field code (e.g., "gr-qc")
        #[arg(long)]
        field: String,

        /// Time range: "today" or "pastweek"
        #[arg(long, default_value = "today")]
        when: String,
    },

    /// Run the author filter for a single field
    Authors {
        /// arXiv field code (e.g., "astro-ph")
        #[arg(long)]
        field: String,

        /// Time range: "today" or "pastweek"
        #[arg(long, default_value = "today")]
        when: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Build the configured notifier.
fn build_notifier(config: &Config, dry_run: bool) -> Result<Box<dyn Notifier>> {
    if dry_run {
        Ok(Box::new(DryRunNotifier))
    } else {
        Ok(Box::new(TelegramNotifier::new(
            &config.crawler,
            &config.telegram,
        )?))
    }
}

/// arXiv posts no new listings on weekends.
fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("paperbot starting...");

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run {
            when,
            ignore_weekend,
        } => {
            let when = TimeRange::parse(&when)?;
            let notifier = build_notifier(&config, cli.dry_run)?;

            if is_weekend(Local::now().weekday()) && !ignore_weekend {
                log::info!("Weekend: sending the weekend message only");
                notifier.send(&[config.weekend_message.clone()]).await?;
            } else {
                let scraper = ListingScraper::new(&config.crawler)?;
                pipeline::run_all(&config, &scraper, notifier.as_ref(), when).await?;
            }
        }

        Command::Digest { field, when } => {
            let when = TimeRange::parse(&when)?;
            let notifier = build_notifier(&config, cli.dry_run)?;
            let scraper = ListingScraper::new(&config.crawler)?;
            pipeline::run_digest(&config, &scraper, notifier.as_ref(), &field, when).await?;
        }

        Command::Authors { field, when } => {
            let when = TimeRange::parse(&when)?;
            let notifier = build_notifier(&config, cli.dry_run)?;
            let scraper = ListingScraper::new(&config.crawler)?;
            pipeline::run_authors(&config, &scraper, notifier.as_ref(), &field, when).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({} fields, {} keyword groups)",
                config.fields.len(),
                config.keywords.len()
            );
        }
    }

    log::info!("Done!");

    Ok(())
}
