use derive_more::{Display, From};

pub use crate::Score;

pub mod gaps;
pub mod symbols;

/// Match/mismatch scores combined with a single per-symbol gap penalty.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Linear<S: Score> {
    pub symbols: symbols::Equality<S>,
    pub gaps: gaps::Linear<S>,
}

impl<S: Score> Linear<S> {
    pub fn new(matched: S, mismatched: S, gap: S) -> Self {
        Self {
            symbols: symbols::Equality::new(matched, mismatched),
            gaps: gaps::Linear::new(gap),
        }
    }
}

impl<S: Score> Default for Linear<S> {
    /// match = 1, mismatch = -1, gap = -2
    fn default() -> Self {
        let one = S::one();
        Self::new(one, -one, -(one + one))
    }
}

/// Match/mismatch scores combined with separate gap opening and extension penalties.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Affine<S: Score> {
    pub symbols: symbols::Equality<S>,
    pub gaps: gaps::Affine<S>,
}

impl<S: Score> Affine<S> {
    pub fn new(matched: S, mismatched: S, open: S, extend: S) -> Self {
        Self {
            symbols: symbols::Equality::new(matched, mismatched),
            gaps: gaps::Affine::new(open, extend),
        }
    }
}

impl<S: Score> Default for Affine<S> {
    /// match = 1, mismatch = -1, gap open = -3, gap extend = -1
    fn default() -> Self {
        let one = S::one();
        Self::new(one, -one, -(one + one + one), -one)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Kind {
    Linear,
    Affine,
}

/// Scoring scheme of any kind, used by the algorithm-agnostic entry point.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, From)]
pub enum Scoring<S: Score> {
    Linear(Linear<S>),
    Affine(Affine<S>),
}

impl<S: Score> Scoring<S> {
    pub fn kind(&self) -> Kind {
        match self {
            Scoring::Linear(_) => Kind::Linear,
            Scoring::Affine(_) => Kind::Affine,
        }
    }
}

pub(crate) fn warn_if_rewarding<G: gaps::Scorer>(gaps: &G) {
    if !gaps.is_penalty() {
        log::warn!(
            "Gap scores are expected to be non-positive penalties, got open = {:?}, extend = {:?}",
            gaps.gap_open(),
            gaps.gap_extend()
        );
    }
}
