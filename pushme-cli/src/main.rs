//! # pushme-cli
//!
//! Command-line tool for sending pushes through the PushMe backend.
//!
//! ## Commands
//!
//! - `send`: Send a push to a topic, optionally waiting for the response
//! - `status`: Show the current status of a push
//! - `poll`: Long-poll a push until its status arrives
//!
//! ## Example
//!
//! ```bash
//! # Send a plain notification
//! pushme send --secret 9vp5Sr7CZYwvwe57xMujh3 "Backup finished"
//!
//! # Ask for approval and wait for the answer
//! pushme send --secret 9vp5Sr7CZYwvwe57xMujh3 \
//!     --category button.approve_deny --wait "Deploy to prod?"
//!
//! # Check on a push later
//! pushme status pushIdent123
//! pushme poll pushIdent123 --max-attempts 5
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use pushme_client::{ClientConfig, HttpTransport, Logging, PushMeClient};
use pushme_types::category::ids;

mod commands;

use commands::{poll, send, status};

/// Command-line tool for the PushMe push notification service.
#[derive(Parser, Debug)]
#[command(name = "pushme")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Backend URL to use instead of the hosted default
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Log every dispatched call to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a push to a topic
    Send {
        /// Notification title
        title: String,

        /// Topic secret to push to
        #[arg(long, short)]
        secret: String,

        /// Notification category
        #[arg(long, short, default_value = ids::SIMPLE_PUSH)]
        category: String,

        /// Body text shown under the title
        #[arg(long, short)]
        body: Option<String>,

        /// Extra JSON forwarded to the receiving device
        #[arg(long)]
        data: Option<String>,

        /// Wait for the recipient's response and resolve the action taken
        #[arg(long)]
        wait: bool,
    },

    /// Show the current status of a push
    Status {
        /// Push ident returned by send
        push_ident: String,
    },

    /// Long-poll a push until its status arrives
    Poll {
        /// Push ident returned by send
        push_ident: String,

        /// Give up after this many poll attempts
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Give up after this many seconds overall
        #[arg(long)]
        deadline: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = build_client(cli.backend.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Send {
            title,
            secret,
            category,
            body,
            data,
            wait,
        } => {
            send::run(
                &client,
                &secret,
                &category,
                &title,
                body.as_deref(),
                data.as_deref(),
                wait,
            )
            .await?;
        }
        Commands::Status { push_ident } => {
            status::run(&client, &push_ident).await?;
        }
        Commands::Poll {
            push_ident,
            max_attempts,
            deadline,
        } => {
            poll::run(&client, &push_ident, max_attempts, deadline).await?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable. RUST_LOG overrides the level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "pushme=debug" } else { "pushme=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_client(backend: Option<&str>, verbose: bool) -> Result<PushMeClient<HttpTransport>> {
    let mut config = ClientConfig::new();
    if let Some(url) = backend {
        config = config.with_backend_url(url);
    }
    if verbose {
        config = config.with_logging(Logging::Tracing);
    }
    PushMeClient::new(config).context("Failed to build HTTP client")
}
