//! Notifier and navigator implementations that queue effects for the app.
//!
//! The explorer reports notifications and navigation synchronously through
//! trait objects. The TUI collects them here and drains them after each
//! explorer call so they can be turned into state changes.

use std::sync::{Mutex, PoisonError};

use crate::explorer::{Navigator, Notifier, Route};

/// Queues error notifications for display in the status bar.
#[derive(Debug, Default)]
pub(crate) struct NotificationQueue {
    messages: Mutex<Vec<String>>,
}

impl NotificationQueue {
    /// Removes and returns every queued message.
    pub(crate) fn drain(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl Notifier for NotificationQueue {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}

/// Remembers the most recent navigation request.
#[derive(Debug, Default)]
pub(crate) struct PendingRoute {
    route: Mutex<Option<Route>>,
}

impl PendingRoute {
    /// Takes the pending route, if any.
    pub(crate) fn take(&self) -> Option<Route> {
        self.route
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Navigator for PendingRoute {
    fn go(&self, route: Route) {
        *self.route.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}
