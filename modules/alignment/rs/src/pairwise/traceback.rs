use std::ops::Range;

use eyre::{ensure, Result};

use seqalign_core_rs::Alignable;

use crate::pairwise::alignment::{Op, Step, StepLen};
use crate::pairwise::matrix::{GapTrace, Trace, TraceMatrix};

/// Alignment path recovered from a trace matrix.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Traced {
    pub steps: Vec<Step<StepLen>>,
    pub seq1: Range<usize>,
    pub seq2: Range<usize>,
}

// Steps are discovered backwards, one column at a time
#[derive(Default)]
struct RunningTrace {
    op: Option<Op>,
    len: usize,
    saved: Vec<Step<StepLen>>,
}

impl RunningTrace {
    fn push(&mut self, op: Op) {
        if self.op == Some(op) {
            self.len += 1;
        } else {
            self.save();
            self.op = Some(op);
            self.len = 1;
        }
    }

    fn save(&mut self) {
        if let Some(op) = self.op.take() {
            Step::push_run(&mut self.saved, op, self.len);
        }
        self.len = 0;
    }

    fn finish(mut self) -> Vec<Step<StepLen>> {
        self.save();
        self.saved.reverse();
        self.saved
    }
}

/// Walks the trace matrix from the `(row, col)` cell back to the first cell tagged [`Trace::None`].
///
/// Diagonal moves are classified into matches and mismatches by comparing the symbols. Gap moves
/// follow the gap run until the cell where it was opened, for linear tables every gap move is a
/// run of length one.
pub fn traceback<Seq1, Seq2>(
    tracemat: &TraceMatrix,
    seq1: &Seq1,
    seq2: &Seq2,
    row: usize,
    col: usize,
) -> Result<Traced>
where
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    ensure!(
        row < tracemat.rows() && col < tracemat.cols(),
        "Traceback start ({row}, {col}) is outside of the {}x{} matrix",
        tracemat.rows(),
        tracemat.cols()
    );
    ensure!(
        tracemat.rows() == seq1.len() + 1 && tracemat.cols() == seq2.len() + 1,
        "Trace matrix doesn't match sequences of length {} & {}",
        seq1.len(),
        seq2.len()
    );

    let (seq1end, seq2end) = (row, col);
    let (mut row, mut col) = (row, col);
    let mut trace = RunningTrace::default();

    loop {
        match tracemat.best(row, col) {
            Trace::None => break,
            Trace::Diagonal => {
                ensure!(row > 0 && col > 0, "Diagonal move from the matrix border");
                let op = if seq1.at(row - 1) == seq2.at(col - 1) {
                    Op::Match
                } else {
                    Op::Mismatch
                };
                trace.push(op);
                row -= 1;
                col -= 1;
            }
            Trace::Up => loop {
                ensure!(row > 0, "Gap run leaves the matrix at ({row}, {col})");
                trace.push(Op::GapSecond);
                let gap = tracemat.up(row, col);
                row -= 1;
                if gap == GapTrace::Open {
                    break;
                }
            },
            Trace::Left => loop {
                ensure!(col > 0, "Gap run leaves the matrix at ({row}, {col})");
                trace.push(Op::GapFirst);
                let gap = tracemat.left(row, col);
                col -= 1;
                if gap == GapTrace::Open {
                    break;
                }
            },
        }
    }

    Ok(Traced {
        steps: trace.finish(),
        seq1: row..seq1end,
        seq2: col..seq2end,
    })
}
