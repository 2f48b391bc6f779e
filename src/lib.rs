//! # Introduction
//!
//! algotrace runs classic algorithms on a working copy of their input and
//! captures a snapshot of the full algorithm state at every decision point.
//! The resulting trace is a plain list of steps that a consumer can index by
//! step number: the bundled terminal viewer replays it forward and backward,
//! and the CLI prints it as text or JSON.
//!
//! ## Generation pipeline
//!
//! ```text
//! Input → initial_state → generate_trace → Trace<S> → RenderedTrace → CLI / TUI
//! ```
//!
//! 1. [`model`]: shared input shapes (graphs, arrays, grids), the bundled
//!    sample instances and seeded random generators.
//! 2. [`algorithms`]: one module per algorithm, grouped by family. Each
//!    implements [`engine::Algorithm`].
//! 3. [`snapshot`]: [`snapshot::TraceRecorder`] clones the working state
//!    into owned [`snapshot::Step`]s, enforces the step limit and seals the
//!    trace with exactly one terminal [`snapshot::Outcome`].
//! 4. [`view`]: turns any state into labeled text rows with per-cell marks.
//! 5. [`engine`]: the algorithm contract, configuration, errors and the
//!    type-erased [`engine::DynAlgorithm`].
//! 6. [`registry`]: id → algorithm catalogue.
//! 7. [`ui`]: ratatui-based playback viewer; not part of the stable library API.
//!
//! ## Failure model
//!
//! Generators never panic or return errors for well-formed calls. Malformed
//! input becomes a single-step trace ending in [`snapshot::Outcome::Invalid`];
//! "no path", "no solution" and "not found" are ordinary terminal steps.
//! [`engine::TraceError`] is reserved for the machinery around generation.

pub mod algorithms;
pub mod engine;
pub mod model;
pub mod registry;
pub mod snapshot;
pub mod ui;
pub mod view;
