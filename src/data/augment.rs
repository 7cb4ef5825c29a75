// ============================================================
// Layer 4 — Sequence Augmentation
// ============================================================
// Reverse-complement augmentation for double-stranded DNA.
//
// A DNA segment and its reverse complement describe the same
// locus read from the opposite strand, so the class label is
// unchanged. Flipping half of the training samples teaches the
// model strand invariance.
//
//   5'-ACGTTN-3'   →   5'-NAACGT-3'
//
// Complementing is delegated to bio's DNA alphabet table:
// case is preserved, IUPAC ambiguity codes are complemented,
// N stays N, and any other byte passes through unchanged.

use bio::alphabets::dna;
use rand::Rng;

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    dna::revcomp(seq)
}

/// Fair coin: true when a uniform draw in [0, 1) exceeds one half
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f64>() > 0.5
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_reverse_complement_basic() {
        assert_eq!(reverse_complement(b"GATTACA"), b"TGTAATC");
        assert_eq!(reverse_complement(b"ACGTN"), b"NACGT");
    }

    #[test]
    fn test_reverse_complement_keeps_case() {
        assert_eq!(reverse_complement(b"aCgT"), b"AcGt");
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        let seq = b"ACGGTTNacgtRY";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq.to_vec());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(reverse_complement(b"").is_empty());
    }

    #[test]
    fn test_coin_flip_hits_both_sides() {
        let mut rng   = StdRng::seed_from_u64(7);
        let heads     = (0..1000).filter(|_| coin_flip(&mut rng)).count();
        // Roughly half; a fair coin over 1000 draws stays well inside this band
        assert!(heads > 400 && heads < 600, "heads = {heads}");
    }
}
