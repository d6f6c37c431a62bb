use eyre::Result;

use super::Matrix;

/// The recurrence branch that produced the optimum of a cell.
// TODO: pack both trace tables into 2 bits per cell
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Trace {
    /// Origin of the alignment: the (0, 0) cell, a local alignment boundary or an unreached cell
    None,
    /// Substitution: both sequences advance
    Diagonal,
    /// Gap in the second sequence: only the first sequence advances
    Up,
    /// Gap in the first sequence: only the second sequence advances
    Left,
}

/// How a gap cell of the affine recurrence was reached.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GapTrace {
    /// Opened from the main matrix
    Open,
    /// Extended from the same gap matrix
    Extend,
}

/// Traceback tables filled alongside the score matrices.
///
/// Linear gap algorithms only need the `best` table. Affine algorithms also record how each `Ix`
/// (`up`) and `Iy` (`left`) cell was reached, otherwise the traceback can't tell where a gap run
/// started.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TraceMatrix {
    best: Matrix<Trace>,
    gaps: Option<(Matrix<GapTrace>, Matrix<GapTrace>)>,
}

impl TraceMatrix {
    pub fn linear(seq1: usize, seq2: usize) -> Result<Self> {
        Ok(Self {
            best: Matrix::for_lengths(seq1, seq2, Trace::None)?,
            gaps: None,
        })
    }

    pub fn affine(seq1: usize, seq2: usize) -> Result<Self> {
        Ok(Self {
            best: Matrix::for_lengths(seq1, seq2, Trace::None)?,
            gaps: Some((
                Matrix::for_lengths(seq1, seq2, GapTrace::Open)?,
                Matrix::for_lengths(seq1, seq2, GapTrace::Open)?,
            )),
        })
    }

    pub fn rows(&self) -> usize {
        self.best.rows()
    }

    pub fn cols(&self) -> usize {
        self.best.cols()
    }

    #[inline(always)]
    pub fn best(&self, row: usize, col: usize) -> Trace {
        self.best[(row, col)]
    }

    #[inline(always)]
    pub fn set_best(&mut self, row: usize, col: usize, trace: Trace) {
        self.best[(row, col)] = trace;
    }

    /// How the `Ix` cell was reached. Linear gaps are always opened right away.
    #[inline(always)]
    pub fn up(&self, row: usize, col: usize) -> GapTrace {
        match &self.gaps {
            Some((up, _)) => up[(row, col)],
            None => GapTrace::Open,
        }
    }

    /// How the `Iy` cell was reached. Linear gaps are always opened right away.
    #[inline(always)]
    pub fn left(&self, row: usize, col: usize) -> GapTrace {
        match &self.gaps {
            Some((_, left)) => left[(row, col)],
            None => GapTrace::Open,
        }
    }

    /// Records the `Ix` origin, ignored by linear tables.
    #[inline(always)]
    pub fn set_up(&mut self, row: usize, col: usize, trace: GapTrace) {
        if let Some((up, _)) = &mut self.gaps {
            up[(row, col)] = trace;
        }
    }

    /// Records the `Iy` origin, ignored by linear tables.
    #[inline(always)]
    pub fn set_left(&mut self, row: usize, col: usize, trace: GapTrace) {
        if let Some((_, left)) = &mut self.gaps {
            left[(row, col)] = trace;
        }
    }
}
