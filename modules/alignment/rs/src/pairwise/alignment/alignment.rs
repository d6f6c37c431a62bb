use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

use seqalign_core_rs::Alignable;

use crate::Score;

use super::op::Op;
use super::step::{Offset, Step, StepWithOffset, StepsWithOffsetsIterator};

/// Symbol used to pad both rows of a rendered alignment.
pub const GAP: char = '-';

/// Run length of a single alignment step.
pub type StepLen = u16;

/// A pairwise alignment: the path through the alignment matrix and its score.
///
/// `seq1` and `seq2` are the aligned ranges of the input sequences. For global alignments they
/// always cover the whole inputs, local alignments cover only the best scoring fragments.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score> {
    /// Alignment score, `None` for aligners that don't compute it (Hirschberg).
    score: Option<S>,
    steps: Vec<Step<StepLen>>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Returns the total number of alignment columns - the sum of all step lengths.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len() as usize).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Returns alignment steps with tracked sequence coordinates.
    pub fn tracked_steps(&self) -> impl Iterator<Item = StepWithOffset<StepLen>> + '_ {
        StepsWithOffsetsIterator::new(
            self.steps.iter().cloned(),
            Offset::new(self.seq1.start, self.seq2.start),
        )
    }

    /// Renders the alignment as two equal-length rows padded with [`GAP`].
    ///
    /// The sequences must be the ones the alignment was computed for.
    pub fn render<Seq1, Seq2, Symbol>(&self, seq1: &Seq1, seq2: &Seq2) -> Result<AlignedPair>
    where
        Seq1: Alignable<Symbol = Symbol>,
        Seq2: Alignable<Symbol = Symbol>,
        Symbol: Copy + Into<char>,
    {
        ensure!(
            self.seq1.end <= seq1.len() && self.seq2.end <= seq2.len(),
            "Alignment ranges {:?} & {:?} don't fit sequences of length {} & {}",
            self.seq1,
            self.seq2,
            seq1.len(),
            seq2.len()
        );

        let total = self.len();
        let (mut row1, mut row2) = (String::with_capacity(total), String::with_capacity(total));

        let mut end = Offset::new(self.seq1.start, self.seq2.start);
        for tracked in self.tracked_steps() {
            let (start, len) = (tracked.start(), *tracked.step().len() as usize);
            end = tracked.end();
            ensure!(
                end.seq1 <= self.seq1.end && end.seq2 <= self.seq2.end,
                "Alignment steps run past the aligned ranges"
            );

            match tracked.step().op() {
                Op::GapFirst => {
                    for ind in start.seq2..end.seq2 {
                        row1.push(GAP);
                        row2.push((*seq2.at(ind)).into());
                    }
                }
                Op::GapSecond => {
                    for ind in start.seq1..end.seq1 {
                        row1.push((*seq1.at(ind)).into());
                        row2.push(GAP);
                    }
                }
                Op::Match | Op::Mismatch => {
                    for shift in 0..len {
                        row1.push((*seq1.at(start.seq1 + shift)).into());
                        row2.push((*seq2.at(start.seq2 + shift)).into());
                    }
                }
            }
        }
        ensure!(
            end.seq1 == self.seq1.end && end.seq2 == self.seq2.end,
            "Alignment steps don't cover the aligned ranges"
        );

        Ok(AlignedPair::new(row1, row2))
    }
}

/// Two aligned sequences of equal length, gaps are marked with [`GAP`].
#[derive(Clone, Eq, PartialEq, Debug, Default, Getters, Constructor, Dissolve)]
pub struct AlignedPair {
    seq1: String,
    seq2: String,
}

impl AlignedPair {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }
}

impl Display for AlignedPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.seq1)?;
        write!(f, "{}", self.seq2)
    }
}
