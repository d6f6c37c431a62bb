// Every driver fills its tables row by row (seq1 symbols) and column by column (seq2 symbols).
// Row/column 0 stand for the empty prefix.

use crate::pairwise::matrix::{GapTrace, Trace};
use crate::Score;

pub use best::Best;

mod best;
pub mod gotoh;
pub mod gotoh_local;
pub mod hirschberg;
pub mod needleman_wunsch;
pub mod smith_waterman;

/// Finite stand-in for minus infinity in the affine gap matrices.
///
/// Half of the type minimum, adding a couple of penalties to it can't overflow.
#[inline(always)]
pub(crate) fn neg_inf<S: Score>() -> S {
    S::min_value() / (S::one() + S::one())
}

/// Resolves the cell recurrence, ties are broken as diagonal > up > left.
#[inline(always)]
pub(crate) fn best_move<S: Score>(diagonal: S, up: S, left: S) -> (S, Trace) {
    if diagonal >= up && diagonal >= left {
        (diagonal, Trace::Diagonal)
    } else if up >= left {
        (up, Trace::Up)
    } else {
        (left, Trace::Left)
    }
}

/// Resolves an affine gap cell, opening wins ties with extension.
#[inline(always)]
pub(crate) fn open_or_extend<S: Score>(opened: S, extended: S) -> (S, GapTrace) {
    if extended > opened {
        (extended, GapTrace::Extend)
    } else {
        (opened, GapTrace::Open)
    }
}
