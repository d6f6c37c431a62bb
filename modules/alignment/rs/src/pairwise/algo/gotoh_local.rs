use eyre::Result;

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{Matrix, TraceMatrix};
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::scoring::{warn_if_rewarding, Affine};
use crate::pairwise::traceback::traceback;
use crate::Score;

use super::{best_move, neg_inf, open_or_extend, Best};

/// Local alignment with affine gap penalties.
///
/// Same recurrence as the global variant, but the `best` table is floored at zero and the matrix
/// border is free. The traceback starts from the first maximum and stops at the first zero cell.
pub fn align<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, scoring: &Affine<S>) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    warn_if_rewarding(&scoring.gaps);
    log::debug!(
        "Gotoh-local: 3 x {}x{} matrices",
        seq1.len() + 1,
        seq2.len() + 1
    );

    let (open, extend) = (scoring.gaps.open, scoring.gaps.extend);
    let (n, m) = (seq1.len(), seq2.len());

    let mut scores = Matrix::for_lengths(n, m, S::zero())?;
    let mut up = Matrix::for_lengths(n, m, neg_inf::<S>())?;
    let mut left = Matrix::for_lengths(n, m, neg_inf::<S>())?;
    let mut tracemat = TraceMatrix::affine(n, m)?;
    let mut best = Best::new();

    for row in 1..=n {
        let s1 = seq1.at(row - 1);
        for col in 1..=m {
            let (score, trace) = open_or_extend(
                scores[(row - 1, col)] + open + extend,
                up[(row - 1, col)] + extend,
            );
            up[(row, col)] = score;
            tracemat.set_up(row, col, trace);

            let (score, trace) = open_or_extend(
                scores[(row, col - 1)] + open + extend,
                left[(row, col - 1)] + extend,
            );
            left[(row, col)] = score;
            tracemat.set_left(row, col, trace);

            let diagonal = scores[(row - 1, col - 1)] + scoring.symbols.score(s1, seq2.at(col - 1));
            let (score, trace) = best_move(diagonal, up[(row, col)], left[(row, col)]);
            if score <= S::zero() {
                continue;
            }
            scores[(row, col)] = score;
            tracemat.set_best(row, col, trace);
            best.update(row, col, score);
        }
    }

    let (row, col, score) = best.dissolve();
    log::debug!("Gotoh-local: best score {:?} at ({}, {})", score, row, col);

    let traced = traceback(&tracemat, seq1, seq2, row, col)?;
    Ok(Alignment::new(
        Some(score),
        traced.steps,
        traced.seq1,
        traced.seq2,
    ))
}
