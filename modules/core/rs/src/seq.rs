use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_more::Into;
use eyre::{bail, Report, Result};

use crate::alignable::Alignable;

/// An immutable biological sequence (nucleotides, amino acids, ambiguity codes).
///
/// Symbols are stored as uppercase ASCII bytes. Anything that is not a printable ASCII symbol
/// (whitespace, control characters, non-ASCII bytes) is rejected at construction.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Into)]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(seq: impl AsRef<[u8]>) -> Result<Self> {
        let seq = seq.as_ref();
        if let Some(pos) = seq.iter().position(|x| !x.is_ascii_graphic()) {
            bail!(
                "Invalid symbol {:#04x} at position {} of the sequence",
                seq[pos],
                pos
            );
        }

        Ok(Self {
            symbols: seq.to_ascii_uppercase(),
        })
    }

    /// Raw uppercase content of the sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl Alignable for Sequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.symbols[pos]
    }
}

impl FromStr for Sequence {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::new(s)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Sequence::new(value)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Construction guarantees ASCII content
        for x in &self.symbols {
            write!(f, "{}", *x as char)?;
        }
        Ok(())
    }
}
