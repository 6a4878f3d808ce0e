//! Core Sudoku engine: grid model, placement validation, and an iterative
//! backtracking solver.
//!
//! This crate is the synchronous, stateless core behind the HTTP API.
//! Callers parse an 81-character puzzle string into a [`Grid`], answer
//! placement questions with [`Grid::check_placement`], or hand the grid to
//! [`Solver::solve`] for a full solution.

mod grid;
mod solver;

pub use grid::{Conflict, Grid, ParseError, PlacementCheck, Position, CELL_COUNT};
pub use solver::{SolveError, Solver, DEFAULT_STEP_LIMIT};
