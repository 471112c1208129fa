//! IUPAC nucleotide classification tables.
//!
//! Pure data: every supported symbol maps to the set of concrete nucleotides
//! it can stand for, and the four concrete bases carry their biochemical
//! groupings (keto/amino, purine/pyrimidine). The bit-pattern derivation in
//! [`crate::codes`] is built entirely from these tables.

/// Bases carrying a keto group (G, T).
pub const KETO_BASES: [char; 2] = ['G', 'T'];
/// Bases carrying an amino group (A, C).
pub const AMINO_BASES: [char; 2] = ['A', 'C'];
/// Purine bases (A, G).
pub const PURINE_BASES: [char; 2] = ['A', 'G'];
/// Pyrimidine bases (C, T).
pub const PYRIMIDINE_BASES: [char; 2] = ['C', 'T'];

/// Alphabet of the 2-bit encoding: concrete bases only.
pub(crate) const BIT2_ALPHABET: &[char] = &['A', 'C', 'G', 'T'];

/// Alphabet of the 3-bit encoding: concrete bases, `N` and both gap spellings.
pub(crate) const BIT3_ALPHABET: &[char] = &['A', 'C', 'G', 'T', 'N', '-', '.'];

/// Alphabet of the 4-bit encoding: the full IUPAC set.
pub(crate) const BIT4_ALPHABET: &[char] = &[
    'A', 'C', 'G', 'T', 'N', '-', '.', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V',
];

/// The concrete nucleotides a symbol can stand for, in `ACGT` order.
///
/// Gaps map to `"-"` (zero nucleotides); both spellings normalize to `-`.
/// Returns `None` for characters outside the IUPAC alphabet.
pub fn nucleotides_of(symbol: char) -> Option<&'static str> {
    Some(match symbol {
        '-' | '.' => "-",
        'A' => "A",
        'C' => "C",
        'G' => "G",
        'T' => "T",
        'R' => "AG",
        'Y' => "CT",
        'S' => "GC",
        'W' => "AT",
        'K' => "GT",
        'M' => "AC",
        'B' => "CGT",
        'D' => "AGT",
        'H' => "ACT",
        'V' => "ACG",
        'N' => "ACGT",
        _ => return None,
    })
}

/// Whether `symbol` is one of the four concrete bases.
#[inline]
pub fn is_concrete(symbol: char) -> bool {
    matches!(symbol, 'A' | 'C' | 'G' | 'T')
}

/// Whether `symbol` is a gap (either spelling).
#[inline]
pub fn is_gap(symbol: char) -> bool {
    matches!(symbol, '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_strict_supersets() {
        for c in BIT2_ALPHABET {
            assert!(BIT3_ALPHABET.contains(c));
        }
        for c in BIT3_ALPHABET {
            assert!(BIT4_ALPHABET.contains(c));
        }
        assert!(BIT2_ALPHABET.len() < BIT3_ALPHABET.len());
        assert!(BIT3_ALPHABET.len() < BIT4_ALPHABET.len());
    }

    #[test]
    fn test_nucleotides_cardinality() {
        assert!(is_gap('-') && is_gap('.'));
        assert!(!is_gap('N') && !is_concrete('N'));
        assert_eq!(nucleotides_of('-'), Some("-"));
        assert_eq!(nucleotides_of('.'), Some("-"));
        assert_eq!(nucleotides_of('A').unwrap().len(), 1);
        assert_eq!(nucleotides_of('R').unwrap().len(), 2);
        assert_eq!(nucleotides_of('B').unwrap().len(), 3);
        assert_eq!(nucleotides_of('N'), Some("ACGT"));
        assert_eq!(nucleotides_of('Z'), None);
        assert_eq!(nucleotides_of('a'), None);
    }

    #[test]
    fn test_biochemical_groups_partition_concrete_bases() {
        for c in BIT2_ALPHABET {
            assert_ne!(KETO_BASES.contains(c), AMINO_BASES.contains(c));
            assert_ne!(PURINE_BASES.contains(c), PYRIMIDINE_BASES.contains(c));
        }
    }
}
