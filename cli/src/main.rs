//! revbot entry point.
//!
//! `revbot` (or `revbot tui`) launches the review TUI; `revbot serve` runs
//! the HTTP proxy that forwards analysis requests to the backend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use revbot_server::{ServerCliFlags, ServerConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:7878";

#[derive(Parser)]
#[command(name = "revbot", version, about = "AI code review in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the review TUI (the default when no subcommand is given)
    Tui {
        /// Base URL of the local review proxy
        #[arg(long, env = "REVBOT_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
        service_url: String,
    },
    /// Run the HTTP proxy that forwards requests to the analysis backend
    Serve {
        /// Address to listen on (env: REVBOT_LISTEN)
        #[arg(long)]
        listen: Option<String>,
        /// Analysis backend base URL (env: BACKEND_URL)
        #[arg(long)]
        backend_url: Option<String>,
        /// Serve canned fixture responses instead of forwarding
        #[arg(long)]
        mock: bool,
    },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so its logs go to a rolling file instead of
/// stderr. The returned guard must stay alive for the writer to flush.
fn init_tui_logging() -> Result<WorkerGuard> {
    let dir = std::env::temp_dir().join("revbot");
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::daily(&dir, "revbot.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn init_serve_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Commands::Tui {
        service_url: std::env::var("REVBOT_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
    }) {
        Commands::Tui { service_url } => {
            let _guard = init_tui_logging()?;
            tracing::info!(service_url = %service_url, "starting review tui");
            revbot_tui::run(service_url).await
        }
        Commands::Serve {
            listen,
            backend_url,
            mock,
        } => {
            init_serve_logging();
            let config = ServerConfig::load(&ServerCliFlags {
                listen,
                backend_url,
                mock,
            })?;
            revbot_server::serve(config).await
        }
    }
}
