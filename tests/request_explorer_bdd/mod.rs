//! Support modules for the request explorer BDD tests.

pub(crate) mod state;

pub(crate) use state::ExplorerState;
