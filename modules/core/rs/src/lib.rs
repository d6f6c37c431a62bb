pub use alignable::{Alignable, Sliced};
pub use seq::Sequence;

mod alignable;
pub mod num;
pub mod seq;
