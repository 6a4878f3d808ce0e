//! Iterative backtracking search over the grid model.

use crate::grid::{Grid, Position, CELL_COUNT};

/// Default bound on visited-cell iterations before a solve is abandoned.
pub const DEFAULT_STEP_LIMIT: u64 = 50_000_000;

/// Error returned when a solve attempt produces no completed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// No assignment of digits satisfies all three constraint families.
    #[error("puzzle has no solution")]
    Unsolvable,
    /// The search was abandoned after the configured number of steps.
    #[error("search aborted after {0} steps")]
    StepLimitExceeded(u64),
}

/// Backtracking Sudoku solver.
///
/// The search is iterative: a signed cell pointer walks the grid with an
/// explicit direction flag instead of recursing, so stack depth stays
/// constant no matter how often the search retreats. Worst-case trial count
/// is unbounded in practice, hence the step limit.
#[derive(Debug, Clone)]
pub struct Solver {
    step_limit: u64,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with [`DEFAULT_STEP_LIMIT`].
    pub fn new() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Create a solver that gives up after `step_limit` visited cells.
    pub fn with_step_limit(step_limit: u64) -> Self {
        Self { step_limit }
    }

    /// Solve the puzzle, returning the completed grid or the reason none
    /// exists.
    ///
    /// Given cells are permanent constraints: never assigned, never reset,
    /// skipped over in both directions. Candidates are tried in
    /// lexicographic-by-position, ascending-by-digit order and the first
    /// complete assignment wins, so the same input always produces the same
    /// output.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        // Givens that already contradict each other could otherwise be
        // "solved" around: the placement checks below only ever test
        // candidates for non-fixed cells.
        if !grid.all_valid() {
            return Err(SolveError::Unsolvable);
        }

        let fixed = grid.given_mask();
        let mut work = grid.clone();
        let mut pointer: i32 = 0;
        let mut backtracking = false;
        let mut steps: u64 = 0;

        loop {
            // Skip fixed cells in the current travel direction.
            while (0..CELL_COUNT as i32).contains(&pointer) && fixed[pointer as usize] {
                pointer += if backtracking { -1 } else { 1 };
            }
            backtracking = false;

            // Walked past the last cell: every placement validated.
            if pointer >= CELL_COUNT as i32 {
                log::debug!("solved after {steps} steps");
                return Ok(work);
            }
            // Walked past the first cell: search space exhausted.
            if pointer < 0 {
                log::debug!("exhausted search after {steps} steps");
                return Err(SolveError::Unsolvable);
            }

            steps += 1;
            if steps > self.step_limit {
                return Err(SolveError::StepLimitExceeded(steps));
            }

            let cell = pointer as usize;
            // Tentative values from an earlier forward pass must not leak
            // into the checks below.
            for later in cell + 1..CELL_COUNT {
                if !fixed[later] {
                    work.set_value(later, 0);
                }
            }

            // Resume from the last value tried at this cell; 0 on a first
            // visit.
            let pos = Position::from_index(cell);
            let mut candidate = work.value_at(cell) + 1;
            while candidate <= 9 && !work.placement_ok(pos, candidate) {
                candidate += 1;
            }

            if candidate <= 9 {
                work.set_value(cell, candidate);
                pointer += 1;
            } else {
                // No digit fits; force the previous cell to its next value.
                work.set_value(cell, 0);
                pointer -= 1;
                backtracking = true;
            }
        }
    }
}
