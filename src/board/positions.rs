//! Cell positions and the row/column/block topology of the grid.
use crate::consts::{N_CELLS, N_HOUSES, N_PEERS};

#[cfg_attr(rustfmt, rustfmt_skip)]
static BLOCK: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

#[cfg_attr(rustfmt, rustfmt_skip)]
pub(crate) static CELLS_BY_HOUSE: [[u8; 9]; N_HOUSES] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [9, 10, 11, 12, 13, 14, 15, 16, 17],
    [18, 19, 20, 21, 22, 23, 24, 25, 26],
    [27, 28, 29, 30, 31, 32, 33, 34, 35],
    [36, 37, 38, 39, 40, 41, 42, 43, 44],
    [45, 46, 47, 48, 49, 50, 51, 52, 53],
    [54, 55, 56, 57, 58, 59, 60, 61, 62],
    [63, 64, 65, 66, 67, 68, 69, 70, 71],
    [72, 73, 74, 75, 76, 77, 78, 79, 80],

    [0, 9, 18, 27, 36, 45, 54, 63, 72],
    [1, 10, 19, 28, 37, 46, 55, 64, 73],
    [2, 11, 20, 29, 38, 47, 56, 65, 74],
    [3, 12, 21, 30, 39, 48, 57, 66, 75],
    [4, 13, 22, 31, 40, 49, 58, 67, 76],
    [5, 14, 23, 32, 41, 50, 59, 68, 77],
    [6, 15, 24, 33, 42, 51, 60, 69, 78],
    [7, 16, 25, 34, 43, 52, 61, 70, 79],
    [8, 17, 26, 35, 44, 53, 62, 71, 80],

    [0, 1, 2, 9, 10, 11, 18, 19, 20],
    [3, 4, 5, 12, 13, 14, 21, 22, 23],
    [6, 7, 8, 15, 16, 17, 24, 25, 26],
    [27, 28, 29, 36, 37, 38, 45, 46, 47],
    [30, 31, 32, 39, 40, 41, 48, 49, 50],
    [33, 34, 35, 42, 43, 44, 51, 52, 53],
    [54, 55, 56, 63, 64, 65, 72, 73, 74],
    [57, 58, 59, 66, 67, 68, 75, 76, 77],
    [60, 61, 62, 69, 70, 71, 78, 79, 80],
];

/// A cell of the sudoku grid, numbered `0..=80` from left to right, top to bottom.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics, if the cell number is not below 81.
    #[inline]
    pub fn new(cell: u8) -> Self {
        Self::new_checked(cell).unwrap()
    }

    /// Constructs a new `Cell`. Returns `None`, if the cell number is not below 81.
    #[inline]
    pub fn new_checked(cell: u8) -> Option<Self> {
        if cell < 81 {
            Some(Cell(cell))
        } else {
            None
        }
    }

    /// Constructs the cell at the given row and column, both `0..=8`.
    #[inline]
    pub fn from_coords(row: u8, col: u8) -> Self {
        debug_assert!(row < 9);
        debug_assert!(col < 9);
        Cell(row * 9 + col)
    }

    /// Returns an iterator over all cells in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell)
    }

    /// Returns the cell number contained within.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell number as `usize` for indexing.
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        BLOCK[self.as_index()]
    }

    /// Returns the 27 cells sharing a row, column or block with this cell.
    ///
    /// Emitted as the full row, then the full column, then the block in
    /// row-major order. The cell itself appears in all three groups and the
    /// block overlaps its row and column; duplicates are harmless because
    /// callers only test membership.
    pub fn peers(self) -> [Cell; N_PEERS] {
        let (row, col) = (self.row(), self.col());
        let mut peers = [Cell(0); N_PEERS];
        for c in 0..9 {
            peers[c as usize] = Cell::from_coords(row, c);
        }
        for r in 0..9 {
            peers[9 + r as usize] = Cell::from_coords(r, col);
        }
        let band_row = row / 3 * 3;
        let stack_col = col / 3 * 3;
        let mut i = 18;
        for r in band_row..band_row + 3 {
            for c in stack_col..stack_col + 3 {
                peers[i] = Cell::from_coords(r, c);
                i += 1;
            }
        }
        peers
    }
}
