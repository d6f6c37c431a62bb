use std::ops::{Index, IndexMut};

use eyre::{OptionExt, Result};

pub use trace::{GapTrace, Trace, TraceMatrix};

mod trace;

/// Dense row-major `rows x cols` table.
///
/// Rows follow the first sequence, columns follow the second one. Row/column 0 stand for the empty
/// prefix, hence alignment tables are allocated with `(n + 1) x (m + 1)` cells.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        let total = rows
            .checked_mul(cols)
            .ok_or_eyre(format!("Matrix {rows}x{cols} is too large to be allocated"))?;
        Ok(Self {
            data: vec![fill; total],
            rows,
            cols,
        })
    }

    /// Allocates a table for aligning sequences of the given lengths.
    pub fn for_lengths(seq1: usize, seq2: usize, fill: T) -> Result<Self> {
        let rows = seq1
            .checked_add(1)
            .ok_or_eyre("Sequence is too long to be aligned")?;
        let cols = seq2
            .checked_add(1)
            .ok_or_eyre("Sequence is too long to be aligned")?;
        Self::new(rows, cols, fill)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}
