//! Types for cells, digits and the sudoku board itself
mod digit;
pub mod positions;
mod sudoku;

pub use self::{
    digit::Digit,
    positions::Cell,
    sudoku::{Sudoku, SudokuLine, SudokuTex},
};
