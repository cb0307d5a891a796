//! Interactive terminal explorer mode.

use std::io::{self, Write};

use bubbletea_rs::Program;
use tracing::debug;

use docket::tui::{ExplorerApp, set_explorer_context};
use docket::{ApiError, DocketConfig};

use super::explorer_context;

/// Runs the request explorer TUI until the user quits.
///
/// # Errors
///
/// Returns an error if:
/// - The API URL or credentials are missing or invalid
/// - The configured filters, sort field or catalog are invalid
/// - The TUI fails to initialise
pub async fn run(config: &DocketConfig) -> Result<(), ApiError> {
    let context = explorer_context(config)?;

    // Store the context for ExplorerApp::init() and every reload. If it is
    // already set, the existing context is kept.
    if !set_explorer_context(context) {
        debug!("explorer context already set; keeping the existing one");
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ExplorerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ExplorerApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
