//! Interfaces to the notification and routing surfaces around the explorer.

use std::fmt;

/// Name of the request detail route.
pub const REQUEST_DETAILS_ROUTE: &str = "services.requests.details";

/// Destinations the explorer can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Detail view of one request.
    RequestDetails {
        /// Identifier of the request to show.
        request_id: u64,
    },
}

impl Route {
    /// Returns the route name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RequestDetails { .. } => REQUEST_DETAILS_ROUTE,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestDetails { request_id } => {
                write!(f, "{}(requestId={request_id})", self.name())
            }
        }
    }
}

/// Surface for user-visible notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows an error message.
    fn error(&self, message: &str);
}

/// Router that switches views.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigates to `route`.
    fn go(&self, route: Route);
}
