//! Crossgen fills crossword grids by treating them as a constraint
//! satisfaction problem.
//!
//! Each maximal run of fillable cells is a variable (a [`Slot`]); its domain
//! is the candidate word list. Solving proceeds in three stages:
//!
//! - **Node consistency**: drop every candidate whose length does not match
//!   its slot.
//! - **Arc consistency (AC-3)**: repeatedly revise intersecting slot pairs
//!   until every remaining candidate has a compatible partner at every
//!   crossing, or some domain empties.
//! - **Backtracking search**: assign one word per slot, choosing the most
//!   constrained slot first (MRV, then degree) and the least constraining
//!   word first, undoing on conflict. The first complete consistent
//!   assignment wins.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use crossgen::{puzzle::Crossword, solver::engine::Solver};
//!
//! // A three-letter across slot crossing a three-letter down slot.
//! let crossword = Arc::new(Crossword::parse("___\n#_#\n#_#", "CAT\nART\nTIE").unwrap());
//! let solver = Solver::new(crossword.clone());
//!
//! let (assignment, _stats) = solver.solve();
//! let assignment = assignment.expect("this puzzle is solvable");
//! assert_eq!(assignment.len(), crossword.slots().len());
//! ```
//!
//! [`Slot`]: puzzle::Slot

pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;
