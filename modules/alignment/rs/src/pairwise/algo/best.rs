use derive_getters::{Dissolve, Getters};

use crate::Score;

/// Best cell seen so far while filling a local alignment matrix.
///
/// Only strict improvements are recorded, the first cell reaching the maximum (in the fill order)
/// wins. Starts at the `(0, 0)` origin with zero score, so a matrix without positive cells yields
/// an empty alignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Getters, Dissolve)]
pub struct Best<S: Score> {
    row: usize,
    col: usize,
    score: S,
}

impl<S: Score> Best<S> {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            score: S::zero(),
        }
    }

    #[inline(always)]
    pub fn update(&mut self, row: usize, col: usize, score: S) {
        if score > self.score {
            self.row = row;
            self.col = col;
            self.score = score;
        }
    }
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self::new()
    }
}
