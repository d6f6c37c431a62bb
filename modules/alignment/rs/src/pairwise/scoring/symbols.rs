use derive_more::Constructor;

use crate::pairwise::scoring::Score;

pub trait Scorer<Symbol> {
    type Score: Score;

    fn score(&self, s1: &Symbol, s2: &Symbol) -> Self::Score;
}

/// Identical symbols are rewarded with `equal`, everything else gets `different`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score, Symbol: PartialEq> Scorer<Symbol> for Equality<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        if a == b { self.equal } else { self.different }
    }
}
