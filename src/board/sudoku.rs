use std::{fmt, str};

use crate::board::positions::CELLS_BY_HOUSE;
use crate::consts::N_CELLS;
use crate::errors::{FromSliceError, InvalidCellValue};

/// The 81-cell sudoku board state.
///
/// Cells are stored row-major, left to right, top to bottom. A value of `0`
/// marks an empty cell, `1..=9` a clue or solved digit. The fixed-length
/// array guarantees there are always exactly 81 cells.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

// mask of the 9 digit bits in a house accumulator, bit 0 unused
const ALL_DIGITS: u16 = 0b11_1111_1110;

impl Sudoku {
    /// Reads a sudoku from up to 9 lines of text, one row per line.
    ///
    /// The first 9 characters of each line map to the cells of the row:
    /// `'1'..='9'` become clues, every other character an empty cell. Short
    /// lines, extra characters and missing rows are not errors; absent cells
    /// are simply left empty.
    pub fn from_str_lines(s: &str) -> Sudoku {
        let mut grid = [0; N_CELLS];
        for (row, line) in s.lines().take(9).enumerate() {
            for (col, ch) in line.chars().take(9).enumerate() {
                if let '1'..='9' = ch {
                    grid[row * 9 + col] = ch as u8 - b'0';
                }
            }
        }
        Sudoku(grid)
    }

    /// Reads a sudoku from its 81-character line representation.
    ///
    /// `'1'..='9'` become clues, every other character an empty cell.
    /// Characters beyond the 81st are ignored, missing ones leave trailing
    /// cells empty.
    pub fn from_str_line(s: &str) -> Sudoku {
        let mut grid = [0; N_CELLS];
        for (cell, ch) in s.chars().take(N_CELLS).enumerate() {
            if let '1'..='9' = ch {
                grid[cell] = ch as u8 - b'0';
            }
        }
        Sudoku(grid)
    }

    /// Creates a sudoku from an array of cell values, `0` for empty cells.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, InvalidCellValue> {
        match bytes.iter().position(|&value| value > 9) {
            None => Ok(Sudoku(bytes)),
            Some(cell) => Err(InvalidCellValue {
                cell: cell as u8,
                value: bytes[cell],
            }),
        }
    }

    /// Creates a sudoku from a slice of 81 cell values, `0` for empty cells.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromSliceError::WrongLength(bytes.len()));
        }
        let mut grid = [0; N_CELLS];
        grid.copy_from_slice(bytes);
        Sudoku::from_bytes(grid).map_err(FromSliceError::from)
    }

    /// Returns the cell values as an array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks that every cell is filled and every row, column and block
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        CELLS_BY_HOUSE.iter().all(|house| {
            let mut seen = 0u16;
            for &cell in house {
                seen |= 1 << self.0[cell as usize];
            }
            seen == ALL_DIGITS
        })
    }

    /// Returns the 81-character line representation, `.` for empty cells.
    pub fn to_str_line(&self) -> SudokuLine {
        let mut line = [b'.'; N_CELLS];
        for (ch, &value) in line.iter_mut().zip(self.0.iter()) {
            if value != 0 {
                *ch = value + b'0';
            }
        }
        SudokuLine(line)
    }

    /// Returns a wrapper that displays the sudoku as a pipe-delimited table.
    pub fn display_tex(&self) -> SudokuTex {
        SudokuTex(*self)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, &value) in self.0.iter().enumerate() {
            match value {
                0 => write!(f, "  ")?,
                _ => write!(f, "{} ", value)?,
            }
            if cell % 9 == 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

/// The 81-character line representation of a sudoku. Implements
/// `Deref<Target = str>` and `Display`.
#[derive(Copy, Clone)]
pub struct SudokuLine([u8; N_CELLS]);

impl std::ops::Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &str {
        // cells only ever hold b'.' or an ascii digit
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Displays a sudoku as rows of pipe-delimited cells, each row closed by
/// `|.`, the table form expected by the `--tex` flag.
#[derive(Copy, Clone)]
pub struct SudokuTex(Sudoku);

impl fmt::Display for SudokuTex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, &value) in (self.0).0.iter().enumerate() {
            match value {
                0 => write!(f, "| ")?,
                _ => write!(f, "|{}", value)?,
            }
            if cell % 9 == 8 {
                writeln!(f, "|.")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Sudoku;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let line = String::deserialize(deserializer)?;
            let n_chars = line.chars().count();
            if n_chars != 81 {
                return Err(de::Error::invalid_length(n_chars, &"81 characters"));
            }
            Ok(Sudoku::from_str_line(&line))
        }
    }
}
