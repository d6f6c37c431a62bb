use eyre::Result;

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{Matrix, TraceMatrix};
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::scoring::{warn_if_rewarding, Linear};
use crate::pairwise::traceback::traceback;
use crate::Score;

use super::Best;

/// Local alignment with linear gap penalties.
///
/// Returns the best scoring pair of fragments. If no fragment pair scores above zero, the result
/// is an empty alignment with zero score.
pub fn align<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, scoring: &Linear<S>) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    warn_if_rewarding(&scoring.gaps);
    log::debug!(
        "Smith-Waterman: {}x{} matrix",
        seq1.len() + 1,
        seq2.len() + 1
    );

    let gap = scoring.gaps.gap;
    let mut scores = Matrix::for_lengths(seq1.len(), seq2.len(), S::zero())?;
    let mut tracemat = TraceMatrix::linear(seq1.len(), seq2.len())?;
    let mut best = Best::new();

    for row in 1..scores.rows() {
        let s1 = seq1.at(row - 1);
        for col in 1..scores.cols() {
            let diagonal = scores[(row - 1, col - 1)] + scoring.symbols.score(s1, seq2.at(col - 1));
            let up = scores[(row - 1, col)] + gap;
            let left = scores[(row, col - 1)] + gap;

            let (score, trace) = super::best_move(diagonal, up, left);
            // Non-positive cells start a new local alignment
            if score <= S::zero() {
                continue;
            }
            scores[(row, col)] = score;
            tracemat.set_best(row, col, trace);
            best.update(row, col, score);
        }
    }

    let (row, col, score) = best.dissolve();
    log::debug!("Smith-Waterman: best score {:?} at ({}, {})", score, row, col);

    let traced = traceback(&tracemat, seq1, seq2, row, col)?;
    Ok(Alignment::new(
        Some(score),
        traced.steps,
        traced.seq1,
        traced.seq2,
    ))
}
