//! Positional difficulty scoring.
//!
//! The score is a heuristic proxy, not a real measure of puzzle difficulty.
//! Its only consumer is the rotation canonicalization, which needs some
//! deterministic total order over the four rotations of a grid.

use crate::board::Sudoku;
use crate::consts::N_CELLS;

/// Builds the per-cell weight table.
///
/// Weights follow a Fibonacci-like recurrence seeded with `(0, 1)` and grow
/// from the last cell towards the first: cell 80 carries the smallest weight,
/// cell 0 the largest. An empty cell in the top rows therefore costs far more
/// than one near the bottom.
pub fn weights() -> [u64; N_CELLS] {
    let mut weights = [0; N_CELLS];
    let (mut a, mut b) = (0u64, 1u64);
    for weight in weights.iter_mut().rev() {
        *weight = a + b;
        a = b;
        b = *weight;
    }
    weights
}

/// Sums the weights of all empty cells. Higher means harder.
pub fn score(sudoku: &Sudoku, weights: &[u64; N_CELLS]) -> u64 {
    sudoku
        .0
        .iter()
        .zip(weights.iter())
        .filter(|&(&value, _)| value == 0)
        .map(|(_, &weight)| weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_the_recurrence() {
        let weights = weights();
        // seeded with (0, 1): 1, 2, 3, 5, 8, ... growing towards cell 0
        assert_eq!(weights[80], 1);
        assert_eq!(weights[79], 2);
        assert_eq!(weights[78], 3);
        assert_eq!(weights[77], 5);
        assert_eq!(weights[76], 8);
        for i in 0..80 {
            assert_eq!(weights[i], weights[i + 1] + weights.get(i + 2).copied().unwrap_or(1));
        }
    }

    #[test]
    fn weights_strictly_decrease() {
        let weights = weights();
        for i in 0..80 {
            assert!(weights[i] > weights[i + 1]);
        }
    }

    #[test]
    fn full_grid_scores_zero() {
        let full = Sudoku::from_bytes([5; 81]).unwrap();
        assert_eq!(score(&full, &weights()), 0);
    }

    #[test]
    fn empty_grid_scores_the_whole_table() {
        let empty = Sudoku::from_bytes([0; 81]).unwrap();
        let weights = weights();
        assert_eq!(score(&empty, &weights), weights.iter().sum::<u64>());
    }
}
