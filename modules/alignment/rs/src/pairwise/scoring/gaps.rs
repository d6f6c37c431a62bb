use derive_more::Constructor;
use num::Zero;

use crate::pairwise::scoring::Score;

// Gap scores are applied additively as is, penalties must be passed as non-positive numbers.
pub trait Scorer {
    type Score: Score;

    /// Charged once when a gap run begins.
    fn gap_open(&self) -> Self::Score;
    /// Charged for every symbol covered by the gap run.
    fn gap_extend(&self) -> Self::Score;

    /// Returns true if the scheme never rewards gaps.
    fn is_penalty(&self) -> bool {
        self.gap_open() <= Self::Score::zero() && self.gap_extend() <= Self::Score::zero()
    }
}

/// Every gapped position costs the same.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Linear<S: Score> {
    pub gap: S,
}

impl<S: Score> Scorer for Linear<S> {
    type Score = S;

    // Linear gaps are affine gaps with free opening
    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        S::zero()
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.gap
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Scorer for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.extend
    }
}
