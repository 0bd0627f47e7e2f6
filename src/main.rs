use std::path::PathBuf;

use clap::Parser;
use order_desk::lifecycle::{setup_tracing, DeskConfig, DeskSystem};
use order_desk::terminal::{run_session, SessionOptions};
use tokio::io::BufReader;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "order-desk")]
#[command(about = "Take a customer's order at the counter")]
struct Cli {
    /// JSON config file with the menu (built-in menu when omitted)
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Do not clear the screen between redraws
    #[arg(long)]
    no_clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = match &cli.menu {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };

    info!(items = config.menu.len(), "Starting order desk");
    let system = DeskSystem::new(&config);

    let options = SessionOptions {
        clear_screen: !cli.no_clear,
    };
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let session = run_session(&system.desk_client, stdin, &mut stdout, options).await;
    if let Err(e) = &session {
        error!(error = %e, "Session failed");
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    session?;

    info!("Order desk closed");
    Ok(())
}
