//! Plain listing mode: load once, print the working copy and exit.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use docket::tui::ExplorerContext;
use docket::{
    ApiError, DocketConfig, Notifier, RequestExplorer, StderrJsonlTelemetrySink, TelemetrySink,
};

use super::explorer_context;
use super::output::write_request_listing;

/// Keeps the first notification raised while loading.
#[derive(Debug, Default)]
struct FirstNotification {
    message: Mutex<Option<String>>,
}

impl FirstNotification {
    fn take(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Notifier for FirstNotification {
    fn error(&self, message: &str) {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(|| message.to_owned());
    }
}

/// Loads the requests and prints the filtered, sorted working copy.
///
/// Telemetry for the load is written to stderr as JSON lines.
///
/// # Errors
///
/// Returns an [`ApiError`] when the configuration is invalid, when the load
/// fails (carrying the user-facing notification), or when writing fails.
pub async fn run(config: &DocketConfig) -> Result<(), ApiError> {
    let context = explorer_context(config)?;
    let mut stdout = io::stdout().lock();
    list_requests(&context, Arc::new(StderrJsonlTelemetrySink), &mut stdout).await
}

/// Loads through `context` and writes the listing to `writer`.
async fn list_requests<W: io::Write>(
    context: &ExplorerContext,
    telemetry: Arc<dyn TelemetrySink>,
    writer: &mut W,
) -> Result<(), ApiError> {
    let mut explorer = RequestExplorer::new(
        context.session.clone(),
        Arc::clone(&context.catalog),
        telemetry,
    );
    let notifications = FirstNotification::default();
    explorer
        .load(context.gateway.as_ref(), &notifications)
        .await;

    if let Some(message) = notifications.take() {
        return Err(ApiError::Api { message });
    }

    write_request_listing(
        writer,
        explorer.visible(),
        explorer.toolbar(),
        explorer.catalog(),
    )
}
