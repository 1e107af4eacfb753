use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use feedback_digest::config::Config;
use feedback_digest::github::issues::Issue;

/// feedback-digest: weekly digest of GitHub issue feedback.
///
/// Fetches the past week's issues, sorts them into categories, surfaces
/// recurring themes, and pulls out representative user quotes.
#[derive(Parser)]
#[command(name = "feedback-digest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent issues from GitHub into the local cache
    Fetch {
        /// Days to look back, 1 to 365 (default: DIGEST_DAYS or 7)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=feedback_digest::config::MAX_DAYS))]
        days: Option<i64>,
    },

    /// Generate the weekly markdown digest
    Digest {
        /// Use cached issues instead of fetching (fetches if the cache is empty)
        #[arg(long)]
        cache: bool,

        /// Days to look back, 1 to 365 (default: DIGEST_DAYS or 7)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=feedback_digest::config::MAX_DAYS))]
        days: Option<i64>,

        /// Where to write the digest (default: DIGEST_OUTPUT or weekly_digest.md)
        #[arg(long)]
        output: Option<String>,

        /// Don't print the digest after writing it
        #[arg(long)]
        quiet: bool,
    },

    /// Show how each issue was categorized, with themes and quotes
    Categorize {
        /// Use cached issues instead of fetching (fetches if the cache is empty)
        #[arg(long)]
        cache: bool,
    },

    /// Show cache status (issue count, last fetch time)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("feedback_digest=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { days } => {
            let config = Config::load()?;
            let days = days.unwrap_or(config.days);

            let issues = fetch_and_cache(&config, days).await?;

            println!("\n{}", "Fetch complete.".bold());
            println!("  Issues cached: {}", issues.len());
            println!("  Cache: {}", config.db_path);
        }

        Commands::Digest {
            cache,
            days,
            output,
            quiet,
        } => {
            let config = Config::load()?;
            let days = days.unwrap_or(config.days);
            let output_path = output.unwrap_or_else(|| config.output_path.clone());

            let issues = load_issues(&config, cache, days).await?;
            if issues.is_empty() {
                println!(
                    "No issues found. Try again later or use --cache if you have cached data."
                );
                return Ok(());
            }

            println!("Categorizing {} issues...", issues.len());
            let data = feedback_digest::pipeline::run(&issues);

            println!("Generating digest...");
            let markdown = feedback_digest::output::markdown::generate_digest(
                &data,
                &config.repo,
                Utc::now(),
                days,
            );
            feedback_digest::output::markdown::write_digest(&markdown, &output_path)?;

            println!(
                "{}",
                format!("Digest written to {output_path}").bold()
            );
            if !quiet {
                println!("\n{}\n", "=".repeat(50));
                println!("{markdown}");
            }
        }

        Commands::Categorize { cache } => {
            let config = Config::load()?;

            let issues = load_issues(&config, cache, config.days).await?;
            let data = feedback_digest::pipeline::run(&issues);

            feedback_digest::output::terminal::display_categorized(&data.categorized, &data.themes);
            feedback_digest::output::terminal::display_quotes(&data.quotes);
        }

        Commands::Status => {
            let config = Config::load()?;
            feedback_digest::status::show(&config.db_path).await?;
        }
    }

    Ok(())
}

/// Fetch from GitHub and replace the cached snapshot.
///
/// An empty result leaves the existing cache untouched.
async fn fetch_and_cache(config: &Config, days: i64) -> Result<Vec<Issue>> {
    let (owner, repo) = config.repo_parts()?;

    println!("Fetching issues from {owner}/{repo}...");

    let client = feedback_digest::github::client::GithubClient::new(
        &config.api_url,
        config.github_token.as_deref(),
    )?;
    let issues =
        feedback_digest::github::issues::fetch_recent_issues(&client, owner, repo, days).await?;

    println!("Found {} issues from the last {days} days", issues.len());

    if !issues.is_empty() {
        let db = feedback_digest::db::initialize_sqlite(&config.db_path)?;
        db.save_issues(&issues).await?;
        info!(count = issues.len(), path = %config.db_path, "Cached issues");
    }

    Ok(issues)
}

/// Load issues from the cache when asked to, falling back to a fresh fetch.
async fn load_issues(config: &Config, use_cache: bool, days: i64) -> Result<Vec<Issue>> {
    if use_cache {
        match feedback_digest::db::open_sqlite(&config.db_path) {
            Ok(db) => {
                let issues = db.load_issues().await?;
                if !issues.is_empty() {
                    println!("Loaded {} issues from cache", issues.len());
                    return Ok(issues);
                }
                println!("Cache is empty. Fetching from GitHub...");
            }
            Err(e) => {
                warn!(error = %e, "Issue cache unavailable");
                println!("No cache found. Fetching from GitHub...");
            }
        }
    }

    fetch_and_cache(config, days).await
}
