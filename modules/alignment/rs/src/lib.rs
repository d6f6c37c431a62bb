use seqalign_core_rs::num::PrimSInt;

pub use seqalign_core_rs::{Alignable, Sequence};

pub mod pairwise;

/// Alignment scores are signed primitive integers.
pub trait Score: PrimSInt {}

impl<T: PrimSInt> Score for T {}
