pub use alignment::{AlignedPair, Alignment, StepLen, GAP};
pub use op::Op;
pub use step::{Offset, Step, StepWithOffset, StepsWithOffsetsIterator};

mod alignment;
mod op;
mod step;
