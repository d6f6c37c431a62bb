use std::str::FromStr;

use derive_more::Display;
use eyre::{bail, eyre, Report, Result};

use seqalign_core_rs::Alignable;

use crate::pairwise::algo::{gotoh, gotoh_local, hirschberg, needleman_wunsch, smith_waterman};
use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{Kind, Scoring};
use crate::Score;

/// Supported pairwise alignment algorithms.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Algorithm {
    NeedlemanWunsch,
    SmithWaterman,
    Gotoh,
    GotohLocal,
    Hirschberg,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::NeedlemanWunsch,
        Algorithm::SmithWaterman,
        Algorithm::Gotoh,
        Algorithm::GotohLocal,
        Algorithm::Hirschberg,
    ];

    /// Kind of the scoring scheme accepted by the algorithm.
    pub fn required_scoring(&self) -> Kind {
        match self {
            Algorithm::NeedlemanWunsch | Algorithm::SmithWaterman | Algorithm::Hirschberg => {
                Kind::Linear
            }
            Algorithm::Gotoh | Algorithm::GotohLocal => Kind::Affine,
        }
    }

    /// True if the algorithm aligns the best scoring fragments instead of the whole sequences.
    pub fn is_local(&self) -> bool {
        matches!(self, Algorithm::SmithWaterman | Algorithm::GotohLocal)
    }
}

impl FromStr for Algorithm {
    type Err = Report;

    /// Case-insensitive, `-`, `_` and spaces are ignored. Short names (`nw`, `sw`) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|x| !matches!(x, '-' | '_' | ' '))
            .map(|x| x.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "needlemanwunsch" | "nw" => Ok(Algorithm::NeedlemanWunsch),
            "smithwaterman" | "sw" => Ok(Algorithm::SmithWaterman),
            "gotoh" => Ok(Algorithm::Gotoh),
            "gotohlocal" => Ok(Algorithm::GotohLocal),
            "hirschberg" => Ok(Algorithm::Hirschberg),
            _ => Err(eyre!("Unknown alignment algorithm: {s}")),
        }
    }
}

/// Aligns two sequences with the given algorithm.
///
/// The scoring scheme must be of the kind the algorithm expects, otherwise an error is returned
/// before any work is done.
pub fn align<S, Seq1, Seq2>(
    algorithm: Algorithm,
    seq1: &Seq1,
    seq2: &Seq2,
    scoring: &Scoring<S>,
) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    match (algorithm, scoring) {
        (Algorithm::NeedlemanWunsch, Scoring::Linear(x)) => needleman_wunsch::align(seq1, seq2, x),
        (Algorithm::SmithWaterman, Scoring::Linear(x)) => smith_waterman::align(seq1, seq2, x),
        (Algorithm::Hirschberg, Scoring::Linear(x)) => hirschberg::align(seq1, seq2, x),
        (Algorithm::Gotoh, Scoring::Affine(x)) => gotoh::align(seq1, seq2, x),
        (Algorithm::GotohLocal, Scoring::Affine(x)) => gotoh_local::align(seq1, seq2, x),
        (algorithm, scoring) => bail!(
            "{} requires {} gap scoring, got {}",
            algorithm,
            algorithm.required_scoring(),
            scoring.kind()
        ),
    }
}
