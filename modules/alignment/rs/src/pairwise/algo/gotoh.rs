use eyre::{ensure, Result};

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::{GapTrace, Matrix, Trace, TraceMatrix};
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::scoring::{warn_if_rewarding, Affine};
use crate::pairwise::traceback::traceback;
use crate::Score;

use super::{best_move, neg_inf, open_or_extend};

/// Global alignment with affine gap penalties.
///
/// Three tables are filled at once: `best` (M) holds the optimum of every cell, `up` (Ix) the
/// optimum ending with a gap in the second sequence and `left` (Iy) the optimum ending with a gap
/// in the first one. A gap run of length `k` costs `open + k * extend`, except for leading gaps
/// along the matrix border which cost `open + (k - 1) * extend`.
pub fn align<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, scoring: &Affine<S>) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    warn_if_rewarding(&scoring.gaps);
    log::debug!(
        "Gotoh: 3 x {}x{} matrices",
        seq1.len() + 1,
        seq2.len() + 1
    );

    let (open, extend) = (scoring.gaps.open, scoring.gaps.extend);
    let (n, m) = (seq1.len(), seq2.len());

    let mut best = Matrix::for_lengths(n, m, S::zero())?;
    let mut up = Matrix::for_lengths(n, m, neg_inf::<S>())?;
    let mut left = Matrix::for_lengths(n, m, neg_inf::<S>())?;
    let mut tracemat = TraceMatrix::affine(n, m)?;

    for row in 1..=n {
        up[(row, 0)] = if row == 1 {
            open
        } else {
            tracemat.set_up(row, 0, GapTrace::Extend);
            up[(row - 1, 0)] + extend
        };
        best[(row, 0)] = up[(row, 0)];
        tracemat.set_best(row, 0, Trace::Up);
    }
    for col in 1..=m {
        left[(0, col)] = if col == 1 {
            open
        } else {
            tracemat.set_left(0, col, GapTrace::Extend);
            left[(0, col - 1)] + extend
        };
        best[(0, col)] = left[(0, col)];
        tracemat.set_best(0, col, Trace::Left);
    }

    for row in 1..=n {
        let s1 = seq1.at(row - 1);
        for col in 1..=m {
            let (score, trace) = open_or_extend(
                best[(row - 1, col)] + open + extend,
                up[(row - 1, col)] + extend,
            );
            up[(row, col)] = score;
            tracemat.set_up(row, col, trace);

            let (score, trace) = open_or_extend(
                best[(row, col - 1)] + open + extend,
                left[(row, col - 1)] + extend,
            );
            left[(row, col)] = score;
            tracemat.set_left(row, col, trace);

            let diagonal = best[(row - 1, col - 1)] + scoring.symbols.score(s1, seq2.at(col - 1));
            let (score, trace) = best_move(diagonal, up[(row, col)], left[(row, col)]);
            best[(row, col)] = score;
            tracemat.set_best(row, col, trace);
        }
    }

    let traced = traceback(&tracemat, seq1, seq2, n, m)?;
    ensure!(
        traced.seq1.start == 0 && traced.seq2.start == 0,
        "Global traceback stopped at ({}, {})",
        traced.seq1.start,
        traced.seq2.start
    );

    Ok(Alignment::new(
        Some(best[(n, m)]),
        traced.steps,
        traced.seq1,
        traced.seq2,
    ))
}
