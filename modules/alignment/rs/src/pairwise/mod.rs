pub use algorithm::{align, Algorithm};
pub use alignment::{AlignedPair, Alignment, Op, Step, StepLen, GAP};
pub use scoring::{Affine, Linear, Scoring};

pub mod algo;
mod algorithm;
pub mod alignment;
pub mod matrix;
pub mod scoring;
pub mod traceback;
