//! Errors for the byte-level grid constructors.
#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]: a cell held a value outside `0..=9`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell {cell} contains {value}, expected 0..=9")]
pub struct InvalidCellValue {
    /// Index of the offending cell, 0..=80 in row-major order.
    pub cell: u8,
    /// The out-of-range value found there.
    pub value: u8,
}

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FromSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains an out-of-range cell value
    #[error(transparent)]
    InvalidCellValue(#[from] InvalidCellValue),
}
