//! Smart mirror display
//!
//! Renders the mirror to the terminal and reads note commands from stdin.

#![allow(clippy::print_stdout)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use domain::value_objects::UnitSystem;
use infrastructure::{AppConfig, LogFormat, init_tracing};
use presentation_display::{Command, Composer, ComposerOptions, MirrorApiClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Smart mirror terminal display
#[derive(Parser)]
#[command(name = "smart-mirror-display")]
#[command(author, version, about = "Smart mirror terminal display", long_about = None)]
struct Cli {
    /// Verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Mirror API base URL
    #[arg(short, long, env = "SMART_MIRROR_SERVER_URL")]
    url: Option<String>,

    /// Whose notes to show
    #[arg(long)]
    owner: Option<String>,

    /// Weather location
    #[arg(long)]
    location: Option<String>,

    /// Unit system (metric or imperial)
    #[arg(long)]
    units: Option<String>,

    /// News category
    #[arg(long)]
    category: Option<String>,

    /// Frame redraw interval in milliseconds
    #[arg(long, default_value = "1000")]
    redraw_ms: u64,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn draw(frame: &str) {
    let mut out = std::io::stdout().lock();
    // Clear screen and home the cursor
    let _ = write!(out, "\x1b[2J\x1b[H{frame}\n\n> ");
    let _ = out.flush();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(log_filter_from_verbosity(cli.verbose), LogFormat::Text)?;

    let config = AppConfig::load_from(&cli.config).context("Failed to load configuration")?;
    let mut display = config.display;
    if let Some(url) = cli.url {
        display.server_url = url;
    }
    if let Some(owner) = cli.owner {
        display.owner = owner;
    }
    if let Some(location) = cli.location {
        display.location = location;
    }
    if let Some(units) = cli.units {
        display.units = UnitSystem::coerce(Some(&units));
    }
    if let Some(category) = cli.category {
        display.news_categories = vec![category];
    }

    let (server_url, owner) = (&display.server_url, &display.owner);
    info!(server = %server_url, owner = %owner, "Starting display");

    let api = Arc::new(MirrorApiClient::new(&display.server_url)?);
    let composer = Arc::new(Composer::new(
        display.settings(),
        api,
        ComposerOptions {
            owner: display.owner_id(),
            max_notes: display.max_notes,
            max_articles: display.max_articles,
            news_country: display.news_country.clone(),
        },
    ));

    let token = CancellationToken::new();

    let widgets = tokio::spawn({
        let composer = Arc::clone(&composer);
        let token = token.clone();
        async move { composer.run(&token).await }
    });

    let redraw = tokio::spawn({
        let composer = Arc::clone(&composer);
        let token = token.clone();
        let period = Duration::from_millis(cli.redraw_ms.max(50));
        async move {
            presentation_display::poller::run_every(period, &token, || draw(&composer.render()))
                .await;
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            () = token.cancelled() => break,
            result = signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                }
                break;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    info!("stdin closed; display keeps running until Ctrl+C");
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = composer.handle(command).await {
                            warn!(error = %e, "Command failed");
                        }
                    },
                    Err(e) => warn!(error = %e, "Ignoring input"),
                }
                draw(&composer.render());
            }
        }
    }

    token.cancel();
    let _ = tokio::join!(widgets, redraw);
    println!();
    info!("Display stopped");

    Ok(())
}
