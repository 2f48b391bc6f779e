// Step snapshots and trace recording

use serde::Serialize;
use std::ops::Index;

/// Optional auxiliary fields shown next to a step's description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Phase or section heading (e.g. "Preprocessing", "Reconstruction")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Highlighted pseudocode line, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudocode_line: Option<usize>,

    /// Free-form note (complexity remark, rule name, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Annotation {
    pub fn titled(title: impl Into<String>) -> Self {
        Annotation {
            title: Some(title.into()),
            ..Annotation::default()
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.pseudocode_line = Some(line);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.pseudocode_line.is_none() && self.note.is_none()
    }
}

/// How a trace ended. Only the terminal step carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    /// Goal reached, sequence sorted, table filled
    Success,
    /// Algorithmic non-success: not found, no path, no solution, negative cycle
    Failure(String),
    /// The input did not have the shape the algorithm needs
    Invalid(String),
    /// The step limit was reached before the algorithm terminated
    Truncated,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Short badge text for status displays
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "DONE",
            Outcome::Failure(_) => "NO SOLUTION",
            Outcome::Invalid(_) => "INVALID INPUT",
            Outcome::Truncated => "TRUNCATED",
        }
    }
}

/// One recorded point in an algorithm's execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<S> {
    pub state: S,
    pub description: String,
    #[serde(skip_serializing_if = "Annotation::is_empty")]
    pub annotation: Annotation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl<S> Step<S> {
    /// True only for the terminal step of a trace
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The full, ordered list of steps for one algorithm run.
///
/// A trace is never empty and its last step always carries an [`Outcome`].
/// Traces are only built through [`TraceRecorder::finish`] or
/// [`Trace::invalid`], which uphold both rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace<S> {
    steps: Vec<Step<S>>,
    truncated: bool,
}

impl<S> Trace<S> {
    /// Single-step trace reporting a malformed input
    pub fn invalid(state: S, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(%reason, "rejecting invalid input");
        Trace {
            steps: vec![Step {
                state,
                description: format!("Invalid input: {}", reason),
                annotation: Annotation::default(),
                outcome: Some(Outcome::Invalid(reason)),
            }],
            truncated: false,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step<S> {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step<S> {
        &self.steps[self.steps.len() - 1]
    }

    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step<S>> {
        self.steps
    }

    /// Outcome of the terminal step
    pub fn outcome(&self) -> &Outcome {
        self.last()
            .outcome
            .as_ref()
            .unwrap_or(&Outcome::Truncated)
    }

    /// Whether intermediate steps were dropped because of the step limit
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = Step<S>;

    fn index(&self, index: usize) -> &Step<S> {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Records snapshots of an algorithm's working state.
///
/// Every call clones the state it is handed, so no step shares storage with
/// another step or with the caller's live variables. One slot is always kept
/// free for the terminal step: once `max_steps - 1` steps exist, further
/// [`record`](Self::record) calls are dropped and the trace is flagged as
/// truncated, but [`finish`](Self::finish) still succeeds.
#[derive(Debug)]
pub struct TraceRecorder<S> {
    steps: Vec<Step<S>>,
    max_steps: usize,
    truncated: bool,
}

impl<S: Clone> TraceRecorder<S> {
    /// Start a trace whose step 0 is `initial`
    pub fn new(initial: &S, description: impl Into<String>, max_steps: usize) -> Self {
        let mut recorder = TraceRecorder {
            steps: Vec::new(),
            // Room for at least the initial and terminal steps
            max_steps: max_steps.max(2),
            truncated: false,
        };
        recorder.steps.push(Step {
            state: initial.clone(),
            description: description.into(),
            annotation: Annotation::default(),
            outcome: None,
        });
        recorder
    }

    /// Record a step. Returns false if the step was dropped by the limit.
    pub fn record(&mut self, state: &S, description: impl Into<String>) -> bool {
        self.record_with(state, description, Annotation::default())
    }

    pub fn record_with(
        &mut self,
        state: &S,
        description: impl Into<String>,
        annotation: Annotation,
    ) -> bool {
        if self.is_full() {
            if !self.truncated {
                tracing::debug!(max_steps = self.max_steps, "step limit reached, truncating");
                self.truncated = true;
            }
            return false;
        }
        self.steps.push(Step {
            state: state.clone(),
            description: description.into(),
            annotation,
            outcome: None,
        });
        true
    }

    /// Whether the next [`record`](Self::record) would be dropped
    pub fn is_full(&self) -> bool {
        self.steps.len() + 1 >= self.max_steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Append the terminal step and hand over the finished trace
    pub fn finish(self, state: &S, description: impl Into<String>, outcome: Outcome) -> Trace<S> {
        self.finish_with(state, description, Annotation::default(), outcome)
    }

    pub fn finish_with(
        mut self,
        state: &S,
        description: impl Into<String>,
        annotation: Annotation,
        outcome: Outcome,
    ) -> Trace<S> {
        if outcome == Outcome::Truncated {
            self.truncated = true;
        }
        let label = outcome.label();
        self.steps.push(Step {
            state: state.clone(),
            description: description.into(),
            annotation,
            outcome: Some(outcome),
        });
        tracing::debug!(
            steps = self.steps.len(),
            truncated = self.truncated,
            outcome = label,
            "trace finished"
        );
        Trace {
            steps: self.steps,
            truncated: self.truncated,
        }
    }
}
