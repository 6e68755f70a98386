//! Local play
//!
//! Runs a single session on the process's own stdin and stdout.

use log::info;
use tokio::io::{BufReader, stdin, stdout};

use crate::session::handler::{SessionOptions, run_session};

/// Plays one session on the local terminal until `exit` or end of input.
pub async fn run_local(options: &SessionOptions) -> std::io::Result<()> {
    info!("Starting local session");

    let executed = run_session(BufReader::new(stdin()), stdout(), options, "local").await?;

    info!("Local session ended after {} commands", executed);
    Ok(())
}
