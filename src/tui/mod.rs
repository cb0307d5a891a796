//! Terminal User Interface for exploring requests.
//!
//! This module provides an interactive TUI for filtering, sorting and
//! opening request records using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ExplorerApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor and filter prompt state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway, session and catalog are placed in module-level
//! storage. Call [`set_explorer_context`] before starting the program, and
//! `ExplorerApp::init()` will pick them up and start the first load.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

mod bridge;
mod storage;

pub use app::ExplorerApp;
pub use storage::{ExplorerContext, set_explorer_context, set_telemetry_sink};
