use std::borrow::Borrow;
use std::fmt::Display;
use std::marker::PhantomData;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::Result;

use seqalign_core_rs::num::PrimUInt;

use super::op::Op;

/// An alignment step: a run of identical operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Appends a run of `len` operations, splitting it into several steps if it doesn't fit `Len`.
    pub fn push_run(steps: &mut Vec<Step<Len>>, op: Op, len: usize) {
        let max = Len::max_value().to_usize().unwrap_or(usize::MAX);
        let mut left = len;
        while left > 0 {
            let chunk = left.min(max);
            // chunk <= Len::max_value() by construction
            let chunk_len = num::cast::<usize, Len>(chunk).unwrap_or_else(Len::max_value);
            steps.push(Step { len: chunk_len, op });
            left -= chunk;
        }
    }

    /// Optimize the sequence of steps by collapsing identical operations to minimize the memory usage.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is divided accordingly.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.is_empty() || steps.len() == 1 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);

        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        debug_assert!(steps[readp].len > Len::zero());
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}

/// Position inside both aligned sequences.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Constructor, From, Into)]
pub struct Offset {
    pub seq1: usize,
    pub seq2: usize,
}

impl Offset {
    /// Position right after the given step.
    pub fn apply<Len: PrimUInt + Into<usize>>(mut self, step: &Step<Len>) -> Self {
        step.op().apply(&mut self.seq1, &mut self.seq2, *step.len());
        self
    }
}

/// A tracked alignment step with known start position (offset) in the sequence coordinates
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct StepWithOffset<Len: PrimUInt + Into<usize>> {
    step: Step<Len>,
    start: Offset,
}

impl<Len: PrimUInt + Into<usize>> StepWithOffset<Len> {
    /// Get the end position of the step in sequence coordinates (e.g. the alignment position after applying the step)
    pub fn end(&self) -> Offset {
        self.start.apply(&self.step)
    }
}

/// An iterator that keeps track of the current offset in the alignment
pub struct StepsWithOffsetsIterator<T: Iterator<Item: Into<Step<Len>>>, Len: PrimUInt + Into<usize>>
{
    iter: T,
    offset: Offset,
    phantom_data: PhantomData<Len>,
}

impl<T, Len> StepsWithOffsetsIterator<T, Len>
where
    T: Iterator<Item: Into<Step<Len>>>,
    Len: PrimUInt + Into<usize>,
{
    pub fn new(iter: T, offset: Offset) -> Self {
        Self {
            iter,
            offset,
            phantom_data: Default::default(),
        }
    }
}

impl<T, Len> Iterator for StepsWithOffsetsIterator<T, Len>
where
    T: Iterator<Item: Into<Step<Len>>>,
    Len: PrimUInt + Into<usize>,
{
    type Item = StepWithOffset<Len>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = StepWithOffset {
            start: self.offset,
            step: self.iter.next()?.into(),
        };
        self.offset = step.end();
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
