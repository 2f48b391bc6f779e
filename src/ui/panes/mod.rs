//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`state`]: the current step's state rows, colored by [`Mark`](crate::view::Mark)
//! - [`narration`]: step description, phase, note and outcome badge
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and borrowed data; scroll positions live in the app.

pub mod narration;
pub mod state;
pub mod status;

pub use narration::render_narration_pane;
pub use state::{render_state_pane, row_line};
pub use status::{render_status_bar, StatusRenderData};
