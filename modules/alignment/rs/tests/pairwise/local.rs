use eyre::Result;

use seqalign_alignment_rs::pairwise::algo::{gotoh_local, smith_waterman};
use seqalign_alignment_rs::pairwise::{Affine, Alignment, Linear};

use super::*;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn ensure<F>(aligner: F, w: Workload<'_>) -> Result<()>
where
    F: Fn(&[u8], &[u8]) -> Result<Alignment<Score>>,
{
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let aln = aligner(seq1.0, seq2.0)?;
        assert_eq!(aln.seq1().start, seq1.1);
        assert_eq!(aln.seq2().start, seq2.1);
        assert_eq!(*aln.score(), Some(w.score));
        assert_eq!(aln.rle(), rle);

        let rendered = aln.render(&seq1.0, &seq2.0)?;
        assert_eq!(degap(rendered.seq1()).as_bytes(), &seq1.0[aln.seq1().clone()]);
        assert_eq!(degap(rendered.seq2()).as_bytes(), &seq2.0[aln.seq2().clone()]);
    }
    Ok(())
}

mod smith_waterman_tests {
    use super::*;

    fn aligner(scoring: Linear<Score>) -> impl Fn(&[u8], &[u8]) -> Result<Alignment<Score>> {
        move |seq1, seq2| smith_waterman::align(&seq1, &seq2, &scoring)
    }

    #[test]
    fn test_empty() -> Result<()> {
        let workload: Vec<(&[u8], &[u8])> = vec![
            (b"ACGT", b""),
            (b"", b"ACGT"),
            (b"", b""),
            (b"ACGT", b"----"),
            (b"_", b"A"),
        ];

        for (seq1, seq2) in workload {
            let aln = smith_waterman::align(&seq1, &seq2, &Linear::<Score>::default())?;
            assert!(aln.is_empty());
            assert_eq!(*aln.score(), Some(0));
        }
        Ok(())
    }

    #[test]
    fn test_fragments() -> Result<()> {
        let workload = vec![
            Workload {
                seq1: (b"AAGAA", 1),
                seq2: (b"AGA", 0),
                score: 6,
                rle: "3=",
            },
            Workload {
                seq1: (b"CGCGCGCGTTT", 6),
                seq2: (b"CGTTT", 0),
                score: 10,
                rle: "5=",
            },
            Workload {
                seq1: (b"CCCCAAAATTTTGGGG", 4),
                seq2: (b"AAAACTTTT", 0),
                score: 14,
                rle: "4=1v4=",
            },
        ];

        for w in workload {
            ensure(aligner(Linear::new(2, -1, -2)), w)?;
        }

        ensure(
            aligner(Linear::new(1, -2, -5)),
            Workload {
                seq1: (b"AAAGGGAGGGTTTA", 3),
                seq2: (b"GGGGGGG", 0),
                score: 4,
                rle: "3=1X3=",
            },
        )?;
        ensure(
            aligner(Linear::new(3, -3, -2)),
            Workload {
                seq1: (b"TGTTACGG", 1),
                seq2: (b"GGTTGACTA", 1),
                score: 13,
                rle: "3=1v2=",
            },
        )
    }

    #[test]
    fn test_first_maximum() -> Result<()> {
        // ACACA occurs twice in the second sequence, the first cell reaching the maximum wins
        let (seq1, seq2) = (b"ACACACTA", b"AGCACACA");
        let aln = smith_waterman::align(seq1, seq2, &Linear::new(2, -1, -2))?;
        assert!(*aln.score() > Some(0));
        assert_eq!(*aln.score(), Some(10));
        assert_eq!((aln.seq1().clone(), aln.seq2().clone()), (0..5, 3..8));
        Ok(())
    }

    #[test]
    fn test_score_bounds() -> Result<()> {
        let sequences = all_sequences(b"ACG", 4);
        for (seq1, seq2) in sequences.iter().cartesian_product(&sequences) {
            let aln = smith_waterman::align(seq1, seq2, &Linear::<Score>::default())?;
            let score = aln.score().unwrap_or_default();
            assert!(score >= 0);

            // Any shared symbol is a positive local alignment on its own
            let shared = seq1.iter().any(|x| seq2.contains(x));
            assert_eq!(score > 0, shared, "{:?} vs {:?}", seq1, seq2);
            assert_eq!(aln.is_empty(), !shared);

            let rendered = aln.render(seq1, seq2)?;
            assert_eq!(Some(rescore(&rendered, 1, -1, -2)), *aln.score());
        }
        Ok(())
    }
}

mod gotoh_local_tests {
    use super::*;

    fn aligner(scoring: Affine<Score>) -> impl Fn(&[u8], &[u8]) -> Result<Alignment<Score>> {
        move |seq1, seq2| gotoh_local::align(&seq1, &seq2, &scoring)
    }

    #[test]
    fn test_affine_gaps() -> Result<()> {
        let workload = vec![
            Workload {
                seq1: (b"AAAAAAAAAAAAAAAA*********AAAAAAAAAAAAAAAA", 0),
                seq2: (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", 0),
                score: 18,
                rle: "16=9^16=",
            },
            Workload {
                seq1: (b"ACGTACGTACGT****_________", 0),
                seq2: (b"****ACGTACGTACGT_________ACGT*****", 4),
                score: 12,
                rle: "12=",
            },
        ];

        for w in workload {
            ensure(aligner(Affine::new(1, -2, -5, -1)), w)?;
        }
        Ok(())
    }

    #[test]
    fn test_cheap_gap_open() -> Result<()> {
        let workload = vec![
            Workload {
                seq1: (b"A***AAAAAAAA***AAAAAAAA***A", 4),
                seq2: (b"AAAAAAAAAAAAAAAA", 0),
                score: 12,
                rle: "8=3^8=",
            },
            Workload {
                seq1: (b"AAAAAAA**AAAAA*****", 0),
                seq2: (b"___AAAAAAAAAAA", 3),
                score: 8,
                rle: "7=2^4=",
            },
        ];

        for w in workload {
            ensure(aligner(Affine::new(1, -2, -1, -1)), w)?;
        }
        Ok(())
    }

    #[test]
    fn test_sequence_from_paper() -> Result<()> {
        ensure(
            aligner(Affine::new(10, -9, -20, -20)),
            Workload {
                seq1: (b"CCAATCTACTACTGCTTGCAGTAC", 0),
                seq2: (b"AGTCCGAGGGCTACTCTACTGAAC", 10),
                score: 62,
                rle: "1=1X1=1X6=",
            },
        )
    }

    #[test]
    fn test_path_matches_score() -> Result<()> {
        let sequences = all_sequences(b"ACG", 4);
        for (matched, mismatched, open, extend) in [(1, -1, -3, -1), (2, -1, -2, 0)] {
            let scoring = Affine::<Score>::new(matched, mismatched, open, extend);
            for (seq1, seq2) in sequences.iter().cartesian_product(&sequences) {
                let aln = gotoh_local::align(seq1, seq2, &scoring)?;
                let rendered = aln.render(seq1, seq2)?;
                assert_eq!(degap(rendered.seq1()).as_bytes(), &seq1[aln.seq1().clone()]);
                assert_eq!(degap(rendered.seq2()).as_bytes(), &seq2[aln.seq2().clone()]);

                // Local paths never touch the matrix border
                let rescored =
                    rescore_affine(&rendered, matched, mismatched, (open, extend), false);
                assert_eq!(Some(rescored), *aln.score(), "{:?} vs {:?}", seq1, seq2);
                assert!(rescored >= 0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_no_similarity() -> Result<()> {
        let aln = gotoh_local::align(b"AAAA", b"CCCC", &Affine::<Score>::default())?;
        assert!(aln.is_empty());
        assert_eq!(*aln.score(), Some(0));
        Ok(())
    }
}
