//! MI5 Terminal - Entry Point
//!
//! Serves the terminal game over TCP, or plays it locally with `--local`.

use log::{info, warn};

use mi5_terminal::error::TerminalError;
use mi5_terminal::error::handlers::{error_to_exit_code, handle_error};
use mi5_terminal::session::{SessionOptions, run_local};
use mi5_terminal::utils::setup_logging;
use mi5_terminal::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    setup_logging();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), TerminalError> {
    let local = std::env::args().skip(1).any(|arg| arg == "--local");

    let config = ServerConfig::load()?;

    if local {
        return Ok(run_local(&SessionOptions::from(&config)).await?);
    }

    info!("Launching MI5 terminal server...");
    let server = Server::bind(config).await?;
    if let Ok(addr) = server.local_addr() {
        info!("Connect with: nc {} {}", addr.ip(), addr.port());
    } else {
        warn!("Could not determine listening address");
    }
    server.start().await;
    Ok(())
}
