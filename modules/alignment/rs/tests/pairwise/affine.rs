use eyre::Result;

use seqalign_alignment_rs::pairwise::algo::{gotoh, needleman_wunsch};
use seqalign_alignment_rs::pairwise::{Affine, Linear, Op};

use super::*;

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: Score,
    rle: &'a str,
}

fn ensure(scoring: &Affine<Score>, w: Workload<'_>) -> Result<()> {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let aln = gotoh::align(&seq1, &seq2, scoring)?;
        assert_eq!(*aln.score(), Some(w.score));
        assert_eq!(aln.rle(), rle);

        let rendered = aln.render(&seq1, &seq2)?;
        assert_eq!(degap(rendered.seq1()).as_bytes(), seq1);
        assert_eq!(degap(rendered.seq2()).as_bytes(), seq2);
    }
    Ok(())
}

#[test]
fn test_gotoh() -> Result<()> {
    let workload = vec![
        Workload {
            seq1: b"ACGTTTTACG",
            seq2: b"ACGACG",
            score: -1,
            rle: "3=4^3=",
        },
        Workload {
            seq1: b"ACGTACGT",
            seq2: b"ACGTCGT",
            score: 3,
            rle: "4=1^3=",
        },
        Workload {
            seq1: b"TTTACGT",
            seq2: b"ACGT",
            score: -1,
            rle: "3^4=",
        },
        Workload {
            seq1: b"GATTACA",
            seq2: b"GCATGCU",
            score: -1,
            rle: "1=2X1=1X1=1X",
        },
    ];

    let scoring = Affine::default();
    for w in workload {
        ensure(&scoring, w)?;
    }

    ensure(
        &Affine::new(1, -2, -5, -1),
        Workload {
            seq1: b"AAAAAAAAAAAAAAAATTTTTTTTTAAAAAAAAAAAAAAAA",
            seq2: b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            score: 18,
            rle: "16=9^16=",
        },
    )?;
    ensure(
        &Affine::new(10, -9, -20, -20),
        Workload {
            seq1: b"CCAATCTACTACTGCTTGCAGTAC",
            seq2: b"AGTCCGAGGGCTACTCTACTGAAC",
            score: -58,
            rle: "1^4X1=1X1=3X2=1X2=1v1=1X1=1X1=1X2=",
        },
    )
}

#[test]
fn test_one_long_gap_over_many_short() -> Result<()> {
    // Linear gaps spread the deletion, affine gaps keep it in one run
    let (seq1, seq2) = (b"AAACCCGGGTTT", b"AAAGGGTTT");
    let aln = gotoh::align(seq1, seq2, &Affine::new(1, -1, -5, -1))?;
    let gaps = aln
        .steps()
        .iter()
        .filter(|x| !x.op().is_diagonal())
        .count();
    assert_eq!(gaps, 1);
    assert_eq!(aln.rle(), "3=3^6=");
    Ok(())
}

#[test]
fn test_free_gap_open_matches_linear() -> Result<()> {
    let sequences = all_sequences(b"ACG", 4);
    for (seq1, seq2) in sequences.iter().cartesian_product(&sequences) {
        let nw = needleman_wunsch::align(seq1, seq2, &Linear::<Score>::new(1, -1, -2))?;
        let affine = gotoh::align(seq1, seq2, &Affine::<Score>::new(1, -1, 0, -2))?;

        // Leading gaps along the matrix border are one extension cheaper
        assert!(affine.score() >= nw.score());
        let leading_gap = affine
            .steps()
            .first()
            .is_some_and(|x| matches!(x.op(), Op::GapFirst | Op::GapSecond));
        if !leading_gap {
            assert_eq!(affine.score(), nw.score(), "{:?} vs {:?}", seq1, seq2);
        }
    }
    Ok(())
}

#[test]
fn test_path_matches_score() -> Result<()> {
    let sequences = all_sequences(b"ACG", 4);
    for (matched, mismatched, open, extend) in [(1, -1, -3, -1), (1, -1, -1, -1), (2, -1, -2, 0)] {
        let scoring = Affine::<Score>::new(matched, mismatched, open, extend);
        for (seq1, seq2) in sequences.iter().cartesian_product(&sequences) {
            let aln = gotoh::align(seq1, seq2, &scoring)?;
            let rendered = aln.render(seq1, seq2)?;
            assert_eq!(degap(rendered.seq1()).as_bytes(), seq1.as_slice());
            assert_eq!(degap(rendered.seq2()).as_bytes(), seq2.as_slice());

            let rescored = rescore_affine(&rendered, matched, mismatched, (open, extend), true);
            assert_eq!(Some(rescored), *aln.score(), "{:?} vs {:?}", seq1, seq2);
        }
    }
    Ok(())
}
