//! Trace generation engine
//!
//! This module defines the contract every algorithm module satisfies:
//! - [`Algorithm`]: builds an initial state and replays the algorithm on a
//!   working copy of it, producing a [`Trace`]
//! - [`DynAlgorithm`]: object-safe view used by the registry, the CLI and the
//!   playback UI, which renders every step into rows and JSON
//! - [`config`]: step limits and seeds
//! - [`errors`]: failures of the machinery around generation
//!
//! # Execution Model
//!
//! Generation is a single synchronous pass. The generator mutates its own
//! working state and hands a reference to a
//! [`TraceRecorder`](crate::snapshot::TraceRecorder) at every decision or
//! discovery worth narrating; the recorder clones it. Randomness is resolved
//! while building the initial state, never during generation.

pub mod config;
pub mod constants;
pub mod errors;

pub use config::TraceConfig;
pub use errors::TraceError;

use crate::snapshot::{Annotation, Outcome, Trace};
use crate::view::{Row, Visualize};
use serde::Serialize;
use std::fmt;

/// Algorithm family, used for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Graph,
    Sorting,
    Searching,
    DynamicProgramming,
    Backtracking,
    StringMatching,
    Tree,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::Graph,
        Family::Sorting,
        Family::Searching,
        Family::DynamicProgramming,
        Family::Backtracking,
        Family::StringMatching,
        Family::Tree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Family::Graph => "Graph",
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
            Family::DynamicProgramming => "Dynamic Programming",
            Family::Backtracking => "Backtracking",
            Family::StringMatching => "String Matching",
            Family::Tree => "Tree",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static metadata about an algorithm module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub family: Family,
    pub complexity: &'static str,
}

/// An algorithm that can narrate its own execution
pub trait Algorithm {
    /// Snapshot shape recorded at every step
    type State: Clone + fmt::Debug + PartialEq + Serialize + Visualize;

    fn info(&self) -> AlgorithmInfo;

    /// The step-0 configuration. Pure: identical calls return identical states.
    fn initial_state(&self) -> Self::State;

    /// Replay the algorithm on a working copy of `initial`.
    ///
    /// Never panics for well-formed input; malformed input yields a
    /// single-step [`Outcome::Invalid`] trace.
    fn generate_trace(&self, initial: &Self::State, config: &TraceConfig) -> Trace<Self::State>;

    /// Convenience: generate from [`initial_state`](Self::initial_state)
    fn trace(&self, config: &TraceConfig) -> Trace<Self::State> {
        self.generate_trace(&self.initial_state(), config)
    }
}

/// One step rendered for display or export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedStep {
    pub index: usize,
    pub description: String,
    #[serde(skip_serializing_if = "Annotation::is_empty")]
    pub annotation: Annotation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    pub rows: Vec<Row>,
    pub data: serde_json::Value,
}

/// A trace with algorithm-specific state erased
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTrace {
    pub info: AlgorithmInfo,
    pub truncated: bool,
    pub steps: Vec<RenderedStep>,
}

impl RenderedTrace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.steps.last().and_then(|s| s.outcome.as_ref())
    }
}

/// Object-safe counterpart of [`Algorithm`]
pub trait DynAlgorithm {
    fn metadata(&self) -> AlgorithmInfo;

    /// JSON form of the initial state
    fn initial_data(&self) -> Result<serde_json::Value, TraceError>;

    fn render(&self, config: &TraceConfig) -> Result<RenderedTrace, TraceError>;
}

impl<A: Algorithm> DynAlgorithm for A {
    fn metadata(&self) -> AlgorithmInfo {
        Algorithm::info(self)
    }

    fn initial_data(&self) -> Result<serde_json::Value, TraceError> {
        serde_json::to_value(self.initial_state())
            .map_err(|source| TraceError::Serialize { index: 0, source })
    }

    #[tracing::instrument(skip_all, fields(id = Algorithm::info(self).id))]
    fn render(&self, config: &TraceConfig) -> Result<RenderedTrace, TraceError> {
        let trace = self.trace(config);
        let truncated = trace.was_truncated();
        let steps = trace
            .into_steps()
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                let data = serde_json::to_value(&step.state)
                    .map_err(|source| TraceError::Serialize { index, source })?;
                Ok(RenderedStep {
                    index,
                    rows: step.state.view(),
                    description: step.description,
                    annotation: step.annotation,
                    outcome: step.outcome,
                    data,
                })
            })
            .collect::<Result<Vec<_>, TraceError>>()?;
        tracing::debug!(steps = steps.len(), "rendered trace");
        Ok(RenderedTrace {
            info: Algorithm::info(self),
            truncated,
            steps,
        })
    }
}
