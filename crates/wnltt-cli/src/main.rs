//! wnltt - posts the WNL broadcast timetable to Slack as a dated digest.

/// Slack credential resolution (file or environment).
mod config;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{SlackCredentials, resolve_credentials_path};
use wnltt_api::slack::{LocalSlackApi, SlackClient};
use wnltt_api::timetable::{LocalTimetableApi, TimetableClient, parse_timetable, render};

/// User-Agent sent with every outbound request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment toggle that switches delivery to a stdout echo.
const DEBUG_ENV: &str = "DEBUG";

/// CLI argument parser.
#[derive(Debug, Parser)]
#[command(about, version)]
struct Cli {
    /// Override the Slack credentials file path (default: ./wnltt.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the digest to stdout instead of posting to Slack.
    /// The DEBUG environment variable ("true", case-insensitive) does the same.
    #[arg(long)]
    debug: bool,

    /// Timetable fetch timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Terminal failure, mapped to a stable process exit code for scripting
/// consumers.
#[derive(Debug, Error)]
enum AppError {
    /// Credentials missing, unreadable, or incomplete.
    #[error("cannot get Slack credentials: {0:#}")]
    Credentials(anyhow::Error),
    /// Transport failure fetching the timetable feed.
    #[error("cannot get timetable: {0:#}")]
    Fetch(anyhow::Error),
    /// Malformed timetable payload.
    #[error("cannot parse timetable: {0:#}")]
    Parse(anyhow::Error),
    /// Slack post (or stdout echo) failure.
    #[error("cannot deliver timetable: {0:#}")]
    Delivery(anyhow::Error),
}

impl AppError {
    /// Stable exit code for this failure class.
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Credentials(_) => 1,
            Self::Fetch(_) => 2,
            Self::Parse(_) => 3,
            Self::Delivery(_) => 4,
        }
    }
}

/// Whether the `DEBUG` environment toggle is set to `"true"`.
fn debug_env_enabled() -> bool {
    std::env::var(DEBUG_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Writes the digest to stdout (debug delivery).
fn echo_digest(output: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write digest to stdout")
}

/// Fetch, render, deliver. Strictly sequential, one attempt per stage.
async fn run(cli: &Cli) -> Result<(), AppError> {
    // Credentials are checked up front even in debug mode.
    let credentials_path = resolve_credentials_path(cli.config.as_ref());
    let credentials =
        SlackCredentials::resolve(&credentials_path).map_err(AppError::Credentials)?;

    let timetable_client = TimetableClient::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .map_err(AppError::Fetch)?;

    let raw = timetable_client.fetch_raw().await.map_err(AppError::Fetch)?;
    let entries = parse_timetable(&raw).map_err(AppError::Parse)?;
    tracing::debug!(rows = entries.len(), "timetable decoded");

    let output = render(&entries, chrono::Utc::now());

    if cli.debug || debug_env_enabled() {
        return echo_digest(&output).map_err(AppError::Delivery);
    }

    let slack_client = SlackClient::builder()
        .token(credentials.token)
        .user_agent(USER_AGENT)
        .build()
        .map_err(AppError::Delivery)?;

    slack_client
        .post_message(&credentials.channel, &output)
        .await
        .map_err(AppError::Delivery)?;

    tracing::info!(channel = %credentials.channel, "timetable digest posted");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
