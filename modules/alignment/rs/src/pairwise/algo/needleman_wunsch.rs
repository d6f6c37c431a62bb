use eyre::{ensure, Result};

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{Matrix, Trace, TraceMatrix};
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::scoring::{warn_if_rewarding, Linear};
use crate::pairwise::traceback::{traceback, Traced};
use crate::Score;

/// Global alignment with linear gap penalties.
///
/// Both sequences are aligned end to end. If one of them is empty, the result is the other
/// sequence against a full-length gap.
pub fn align<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, scoring: &Linear<S>) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    warn_if_rewarding(&scoring.gaps);
    log::debug!(
        "Needleman-Wunsch: {}x{} matrix",
        seq1.len() + 1,
        seq2.len() + 1
    );

    let (score, traced) = solve(seq1, seq2, scoring)?;
    Ok(Alignment::new(
        Some(score),
        traced.steps,
        traced.seq1,
        traced.seq2,
    ))
}

/// Fills the full matrix and traces it back from the bottom-right corner.
pub(crate) fn solve<S, Seq1, Seq2>(
    seq1: &Seq1,
    seq2: &Seq2,
    scoring: &Linear<S>,
) -> Result<(S, Traced)>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    let gap = scoring.gaps.gap;
    let mut scores = Matrix::for_lengths(seq1.len(), seq2.len(), S::zero())?;
    let mut tracemat = TraceMatrix::linear(seq1.len(), seq2.len())?;

    for row in 1..scores.rows() {
        scores[(row, 0)] = scores[(row - 1, 0)] + gap;
        tracemat.set_best(row, 0, Trace::Up);
    }
    for col in 1..scores.cols() {
        scores[(0, col)] = scores[(0, col - 1)] + gap;
        tracemat.set_best(0, col, Trace::Left);
    }

    for row in 1..scores.rows() {
        let s1 = seq1.at(row - 1);
        for col in 1..scores.cols() {
            let diagonal = scores[(row - 1, col - 1)] + scoring.symbols.score(s1, seq2.at(col - 1));
            let up = scores[(row - 1, col)] + gap;
            let left = scores[(row, col - 1)] + gap;

            let (score, trace) = super::best_move(diagonal, up, left);
            scores[(row, col)] = score;
            tracemat.set_best(row, col, trace);
        }
    }

    let traced = traceback(&tracemat, seq1, seq2, seq1.len(), seq2.len())?;
    ensure!(
        traced.seq1.start == 0 && traced.seq2.start == 0,
        "Global traceback stopped at ({}, {})",
        traced.seq1.start,
        traced.seq2.start
    );
    Ok((scores[(seq1.len(), seq2.len())], traced))
}
