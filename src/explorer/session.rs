//! Filter and sort state that outlives a single explorer instance.
//!
//! The explorer is dropped when the user navigates to a request's detail view
//! and rebuilt on return. The session is passed into each new explorer so the
//! applied filters and the sort order survive the round trip.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::fields::SortField;
use super::filter::AppliedFilter;
use super::sort::SortState;

#[derive(Debug, Default)]
struct SessionState {
    filters: Vec<AppliedFilter>,
    sort: SortState,
    filter_applied: bool,
}

/// Shared handle to the persisted explorer state.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct RequestsSession {
    inner: Arc<Mutex<SessionState>>,
}

impl RequestsSession {
    /// Creates an empty session with the default sort.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with filters and a sort order, as when the
    /// user supplies them on the command line.
    #[must_use]
    pub fn seeded(filters: Vec<AppliedFilter>, sort: SortState) -> Self {
        let session = Self::new();
        session.set_filters(filters);
        session.set_sort(sort.current_field, sort.is_ascending);
        session
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the remembered filters.
    #[must_use]
    pub fn filters(&self) -> Vec<AppliedFilter> {
        self.lock().filters.clone()
    }

    /// Remembers `filters`; the filter-applied flag follows whether any are
    /// present.
    pub fn set_filters(&self, filters: Vec<AppliedFilter>) {
        let mut state = self.lock();
        state.filter_applied = !filters.is_empty();
        state.filters = filters;
    }

    /// Returns the remembered sort.
    #[must_use]
    pub fn sort(&self) -> SortState {
        self.lock().sort
    }

    /// Remembers the sort field and direction.
    pub fn set_sort(&self, field: SortField, is_ascending: bool) {
        self.lock().sort = SortState::new(field, is_ascending);
    }

    /// Returns `true` when filters were applied and should be replayed on the
    /// next entry.
    #[must_use]
    pub fn filter_applied(&self) -> bool {
        self.lock().filter_applied
    }

    /// Overrides the filter-applied flag.
    pub fn set_filter_applied(&self, applied: bool) {
        self.lock().filter_applied = applied;
    }
}
