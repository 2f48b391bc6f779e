//! Algorithm implementations, one module per family
//!
//! Each algorithm is a small struct holding its input (or the seed its input
//! is drawn from) and implementing [`Algorithm`](crate::engine::Algorithm).
//! Families share a state type and a helper that owns the working state and
//! the recorder, so generators read as the textbook algorithm with a
//! `record` call at each point worth narrating.

pub mod backtracking;
pub mod dp;
pub mod graph;
pub mod searching;
pub mod sorting;
pub mod strings;
pub mod tree;
