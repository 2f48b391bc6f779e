//! Terminal playback viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: playback state, keyboard event loop, autoplay timing
//! - **[`panes`]**: stateless render functions for each visible pane (state,
//!   narration, status bar)
//! - **[`theme`]**: color palette and the mapping from [`Mark`] to style
//!
//! The entry point is [`App`]: construct it with a
//! [`RenderedTrace`](crate::engine::RenderedTrace) and call [`App::run`].
//!
//! [`Mark`]: crate::view::Mark
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
