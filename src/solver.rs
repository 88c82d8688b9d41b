//! Exhaustive backtracking search over the empty cells of a grid.
//!
//! The search fills the first empty cell in index order with the lowest
//! legal digit, recurses, and unwinds on dead ends. Legality is a direct
//! check against the 27 peers of the cell; there is no forward checking or
//! candidate propagation. Correctness and termination over raw speed.

use crunchy::unroll;
use log::debug;

use crate::board::{Cell, Digit, Sudoku};
use crate::rotation::{self, Rotation};

/// Checks whether `digit` may be placed in `cell` without clashing with any
/// of the cell's 27 peers.
///
/// The cell itself is one of its own peers, so this is only meaningful for
/// empty cells; the solver never asks about filled ones.
pub fn is_valid(sudoku: &Sudoku, digit: Digit, cell: Cell) -> bool {
    let peers = cell.peers();
    let digit = digit.get();
    let mut clash = false;
    unroll! {
        for i in 0..27 {
            clash |= sudoku.0[peers[i].as_index()] == digit;
        }
    }
    !clash
}

/// Returns the first empty cell in index order, or `None` when the grid is
/// complete.
pub fn first_empty(sudoku: &Sudoku) -> Option<Cell> {
    sudoku
        .0
        .iter()
        .position(|&value| value == 0)
        .map(|cell| Cell::new(cell as u8))
}

// clue pairs are never re-checked during the search, so clashing clues have
// to be rejected up front or the search could "complete" around them
fn clues_consistent(sudoku: &Sudoku) -> bool {
    let mut scratch = *sudoku;
    for cell in Cell::all() {
        let value = scratch.0[cell.as_index()];
        if value == 0 {
            continue;
        }
        scratch.0[cell.as_index()] = 0;
        let ok = is_valid(&scratch, Digit::new(value), cell);
        scratch.0[cell.as_index()] = value;
        if !ok {
            return false;
        }
    }
    true
}

// The recursion returns the solution instead of flagging it through shared
// state; every pending frame short-circuits on `Some`. Depth is bounded by
// the number of empty cells, at most 81 frames.
fn solve_rec(sudoku: &mut Sudoku) -> Option<Sudoku> {
    let cell = match first_empty(sudoku) {
        Some(cell) => cell,
        None => return Some(*sudoku),
    };
    for digit in Digit::all() {
        if is_valid(sudoku, digit, cell) {
            sudoku.0[cell.as_index()] = digit.get();
            if let Some(solution) = solve_rec(sudoku) {
                return Some(solution);
            }
            sudoku.0[cell.as_index()] = 0;
        }
    }
    None
}

fn solve_impl(sudoku: &Sudoku) -> Option<Sudoku> {
    if !clues_consistent(sudoku) {
        return None;
    }
    let mut scratch = *sudoku;
    solve_rec(&mut scratch)
}

impl Sudoku {
    /// Finds a solution by plain backtracking in the grid's given
    /// orientation. Returns `None` if no solution exists.
    ///
    /// The search stops at the first complete assignment; if several
    /// solutions exist an unspecified one of them is returned.
    pub fn solve_one(&self) -> Option<Sudoku> {
        solve_impl(self)
    }

    /// Rotates the grid into its best-scoring orientation, solves it there
    /// and rotates the solution back. Returns `None` if no solution exists.
    ///
    /// Finds a solution exactly when [`solve_one`](Self::solve_one) does,
    /// but the changed probing order usually converges faster.
    pub fn solve_canonicalized(&self) -> Option<Sudoku> {
        let (rotation, rotated) = rotation::best_rotation(self);
        debug!("solving with {:?} applied", rotation);
        let solution = solve_impl(&rotated)?;
        match rotation {
            Rotation::R0 => Some(solution),
            _ => Some(rotation::rotate(&solution, rotation.inverse())),
        }
    }

    /// Tries to solve the sudoku in place and returns whether a solution was
    /// found. On `false` the grid is left unchanged.
    pub fn solve(&mut self) -> bool {
        match self.solve_canonicalized() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }
}
