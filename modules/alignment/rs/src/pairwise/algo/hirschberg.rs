use std::ops::Range;

use eyre::Result;

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::pairwise::matrix::Trace;
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::scoring::{warn_if_rewarding, Linear};
use crate::Score;

use super::needleman_wunsch;

/// Global alignment with linear gap penalties in linear space.
///
/// `seq1` is split in half and the column where the Needleman-Wunsch traceback crosses the middle
/// row is found with two rolling score rows. Both halves are then solved the same way until one
/// of the sides is shorter than two symbols. Such blocks are aligned directly with
/// [`needleman_wunsch`].
///
/// The result is the same alignment [`needleman_wunsch::align`] reports, but the score is not
/// reported.
pub fn align<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, scoring: &Linear<S>) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    warn_if_rewarding(&scoring.gaps);
    log::debug!("Hirschberg: {}x{} problem", seq1.len(), seq2.len());

    let mut steps = Vec::new();
    // Sub-problems are solved left to right, hence the right half is pushed first
    let mut stack: Vec<(Range<usize>, Range<usize>)> = vec![(0..seq1.len(), 0..seq2.len())];

    while let Some((range1, range2)) = stack.pop() {
        let (n, m) = (range1.len(), range2.len());
        if n == 0 {
            Step::push_run(&mut steps, Op::GapFirst, m);
            continue;
        }
        if m == 0 {
            Step::push_run(&mut steps, Op::GapSecond, n);
            continue;
        }

        let block1 = seq1.slice(range1.clone());
        let block2 = seq2.slice(range2.clone());
        if n == 1 || m == 1 {
            let (_, traced) = needleman_wunsch::solve(&block1, &block2, scoring)?;
            steps.extend(traced.steps);
            continue;
        }

        let mid = n / 2;
        let split = range2.start + crossing(&block1, &block2, mid, scoring);
        let mid = range1.start + mid;
        log::trace!(
            "Hirschberg: {:?} x {:?} split at ({}, {})",
            range1,
            range2,
            mid,
            split
        );

        stack.push((mid..range1.end, split..range2.end));
        stack.push((range1.start..mid, range2.start..split));
    }

    Step::collapse(&mut steps);
    Ok(Alignment::new(None, steps, 0..seq1.len(), 0..seq2.len()))
}

/// Column where the Needleman-Wunsch traceback from the bottom-right corner enters row `mid`.
///
/// Scores are computed forward with two rolling rows. Below `mid` every cell also carries the
/// column where its own traceback path enters row `mid`, so among several optimal crossings the
/// one taken by the full matrix is reported. Requires `mid < seq1.len()`.
fn crossing<S, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, mid: usize, scoring: &Linear<S>) -> usize
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    debug_assert!(mid < seq1.len());
    let gap = scoring.gaps.gap;
    let cols = seq2.len() + 1;

    let mut prev = Vec::with_capacity(cols);
    prev.push(S::zero());
    for col in 1..cols {
        prev.push(prev[col - 1] + gap);
    }
    let mut cur = vec![S::zero(); cols];

    // Cells of row `mid` are crossed at their own column
    let mut crossed: Vec<usize> = (0..cols).collect();
    let mut current = vec![0; cols];

    for row in 0..seq1.len() {
        let s1 = seq1.at(row);
        cur[0] = prev[0] + gap;
        current[0] = crossed[0];
        for col in 1..cols {
            let diagonal = prev[col - 1] + scoring.symbols.score(s1, seq2.at(col - 1));
            let up = prev[col] + gap;
            let left = cur[col - 1] + gap;

            let (score, trace) = super::best_move(diagonal, up, left);
            cur[col] = score;
            if row >= mid {
                current[col] = match trace {
                    Trace::Diagonal => crossed[col - 1],
                    Trace::Up => crossed[col],
                    _ => current[col - 1],
                };
            }
        }

        std::mem::swap(&mut prev, &mut cur);
        if row >= mid {
            std::mem::swap(&mut crossed, &mut current);
        }
    }
    crossed[cols - 1]
}
