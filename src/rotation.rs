//! Rotation canonicalization of the search orientation.
//!
//! The solver always probes cells from index 0 upward and digits in
//! ascending order. Rotating the puzzle changes which physical cells are
//! probed first, which changes how quickly the search converges. Before
//! solving, the grid is rotated into the orientation with the lowest
//! difficulty score; afterwards the solution is rotated back.

use crate::board::{Cell, Sudoku};
use crate::consts::N_CELLS;
use crate::difficulty;

/// The number of 90° clockwise turns applied to reach the canonical
/// orientation of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations in the order they are scored.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Returns the number of quarter turns, `0..=3`.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Returns the rotation that undoes `self`.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R0,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R180,
            Rotation::R270 => Rotation::R90,
        }
    }
}

/// Maps a cell to its position after a single 90° clockwise turn:
/// `(row, col)` moves to `(col, 8 - row)`.
pub fn rotate_cell(cell: Cell) -> Cell {
    Cell::from_coords(cell.col(), 8 - cell.row())
}

/// Returns the grid turned by the given rotation.
pub fn rotate(sudoku: &Sudoku, rotation: Rotation) -> Sudoku {
    let mut rotated = [0; N_CELLS];
    for cell in Cell::all() {
        let mut target = cell;
        for _ in 0..rotation.quarter_turns() {
            target = rotate_cell(target);
        }
        rotated[target.as_index()] = sudoku.0[cell.as_index()];
    }
    Sudoku(rotated)
}

/// Scores all four rotations of the grid and returns the lowest-scoring one
/// together with the rotated grid.
///
/// Later rotations replace the incumbent only on strict improvement, so
/// [`Rotation::R0`] wins all ties.
pub fn best_rotation(sudoku: &Sudoku) -> (Rotation, Sudoku) {
    let weights = difficulty::weights();
    let mut best = (Rotation::R0, *sudoku);
    let mut best_score = difficulty::score(sudoku, &weights);
    for &rotation in &Rotation::ALL[1..] {
        let rotated = rotate(sudoku, rotation);
        let score = difficulty::score(&rotated, &weights);
        if score < best_score {
            best_score = score;
            best = (rotation, rotated);
        }
    }
    best
}
