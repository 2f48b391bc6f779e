//! Derived views of step states
//!
//! Every state type implements [`Visualize`], which reshapes it into a list of
//! [`Row`]s of marked [`Cell`]s. The terminal UI colors cells by their
//! [`Mark`]; plain-text output brackets marked cells. Shared formatting for
//! arrays, distance rows, matrices and boards lives in [`format`].

pub mod format;

use serde::Serialize;
use std::fmt;

/// Role of a cell in the current step, mapped to a color by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Plain,
    /// Row or column heading
    Label,
    /// Element currently being worked on
    Active,
    /// Element taking part in a comparison
    Compare,
    /// Settled element (sorted, visited, in the result)
    Done,
    /// Discarded or out-of-range element
    Muted,
    /// Conflict, mismatch, rejected choice
    Alert,
}

impl Mark {
    /// Bracket pair used for plain-text rendering
    fn brackets(self) -> (&'static str, &'static str) {
        match self {
            Mark::Plain | Mark::Label | Mark::Muted => ("", ""),
            Mark::Active => ("[", "]"),
            Mark::Compare => ("<", ">"),
            Mark::Done => ("", "*"),
            Mark::Alert => ("!", "!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub mark: Mark,
}

impl Cell {
    pub fn new(text: impl Into<String>, mark: Mark) -> Self {
        Cell {
            text: text.into(),
            mark,
        }
    }
}

/// One line of a rendered state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Row::default()
    }

    /// Row starting with a heading cell
    pub fn labeled(label: impl Into<String>) -> Self {
        let mut row = Row::new();
        row.cells.push(Cell::new(label, Mark::Label));
        row
    }

    /// Single plain-text row
    pub fn text(text: impl Into<String>) -> Self {
        let mut row = Row::new();
        row.cells.push(Cell::new(text, Mark::Plain));
        row
    }

    pub fn cell(mut self, text: impl Into<String>, mark: Mark) -> Self {
        self.cells.push(Cell::new(text, mark));
        self
    }

    pub fn push(&mut self, text: impl Into<String>, mark: Mark) {
        self.cells.push(Cell::new(text, mark));
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let (open, close) = cell.mark.brackets();
            write!(f, "{}{}{}", open, cell.text, close)?;
        }
        Ok(())
    }
}

/// Turn a snapshot into display rows
pub trait Visualize {
    fn view(&self) -> Vec<Row>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_brackets_marked_cells() {
        let row = Row::labeled("a:")
            .cell("1", Mark::Plain)
            .cell("2", Mark::Active)
            .cell("3", Mark::Compare)
            .cell("4", Mark::Done)
            .cell("5", Mark::Alert);
        assert_eq!(row.to_string(), "a: 1 [2] <3> 4* !5!");
    }
}
