//! Docket CLI entrypoint for exploring service requests.
//!
//! Without `--plain` the interactive terminal explorer starts; with it the
//! filtered, sorted requests are printed once and the process exits.

use std::io::{self, Write};
use std::process::ExitCode;

use docket::{ApiError, DocketConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Interactive => cli::interactive::run(&config).await,
        OperationMode::PlainListing => cli::plain_listing::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<DocketConfig, ApiError> {
    DocketConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
