use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use statusgate_client::StatusClient;

#[derive(Debug, Parser)]
#[command(author, version, about = "Statusgate fixture probe", long_about = None)]
struct Args {
    /// Base URL for the statusgate fixture service (e.g. http://127.0.0.1:8000)
    #[arg(
        long,
        env = "STATUSGATE_BASE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Probe /auth with the given Authorization header value
    Auth { authorization: String },
    /// Probe /bad
    Bad,
    /// Probe /error
    Error,
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("global tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let client = StatusClient::new(&args.base_url)?;

    let body = match args.command {
        Command::Auth { authorization } => client.auth(&authorization).await?,
        Command::Bad => client.bad().await?,
        Command::Error => client.error().await?,
    };

    info!(%body, "request succeeded");
    Ok(())
}
