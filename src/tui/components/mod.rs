//! UI components for the request explorer TUI.
//!
//! Each component renders from a borrowed view context so the app model
//! keeps sole ownership of state.

mod request_detail;
mod request_list;
mod text_truncate;
mod toolbar;

pub use request_detail::{RequestDetailComponent, RequestDetailViewContext};
pub use request_list::{
    EMPTY_MESSAGE, LOADING_MESSAGE, RequestListComponent, RequestListViewContext,
};
pub use toolbar::{ToolbarComponent, ToolbarViewContext};

pub(crate) use text_truncate::fit_to_width;
