//! Symbol-to-bitcode derivation and the inverse lookup tables.
//!
//! Codes are derived from the classification tables in [`crate::bases`], not
//! assigned arbitrarily, so related symbols share structure:
//!
//! - 2-bit: `[keto][pyrimidine]` over A/C/G/T (A=00, C=01, G=10, T=11)
//! - 3-bit: `1` + 2-bit code for concrete bases; `000` for gaps, `011` for N
//! - 4-bit: presence vector over the nucleotides A,C,G,T (gap=0000, N=1111)
//!
//! The inverse tables are built once, lazily, and verified for injectivity.
//! The only intentional collision is the two gap spellings: `.` is excluded
//! from the inverse tables, so decoding a gap code always yields `-`.

use once_cell::sync::Lazy;

use crate::bases;
use crate::Encoding;

/// Reserved 3-bit terminator pattern. Never produced for a real symbol,
/// which `DECODE_3BIT`'s constructor asserts at first use.
pub(crate) const SENTINEL_3BIT: u8 = 0b010;

/// 2-bit code: bit1 = keto (G/T), bit0 = pyrimidine (C/T).
pub(crate) fn two_bit_code(symbol: char) -> u8 {
    let keto = bases::KETO_BASES.contains(&symbol) as u8;
    let pyrimidine = bases::PYRIMIDINE_BASES.contains(&symbol) as u8;
    (keto << 1) | pyrimidine
}

/// 3-bit code: bit2 = concrete; concrete bases reuse the 2-bit code below it.
/// Non-concrete symbols set bits 1 and 0 together for N, clear them for gaps.
pub(crate) fn three_bit_code(symbol: char) -> u8 {
    if bases::is_concrete(symbol) {
        0b100 | two_bit_code(symbol)
    } else {
        let n = (symbol == 'N') as u8;
        (n << 1) | n
    }
}

/// 4-bit code: one presence bit per nucleotide, A in the most significant
/// position. Derived from [`bases::nucleotides_of`]; callers validate the
/// symbol before lookup, so unknown symbols simply contribute no bits.
pub(crate) fn four_bit_code(symbol: char) -> u8 {
    let nucleotides = bases::nucleotides_of(symbol).unwrap_or("");
    let mut code = 0u8;
    for (i, nucleotide) in ['A', 'C', 'G', 'T'].into_iter().enumerate() {
        if nucleotides.contains(nucleotide) {
            code |= 1 << (3 - i);
        }
    }
    code
}

/// Forward lookup for any supported `(encoding, symbol)` pair.
pub(crate) fn code_for(encoding: Encoding, symbol: char) -> u8 {
    match encoding {
        Encoding::Bit2 => two_bit_code(symbol),
        Encoding::Bit3 => three_bit_code(symbol),
        Encoding::Bit4 => four_bit_code(symbol),
    }
}

fn build_inverse<const N: usize>(encoding: Encoding) -> [Option<char>; N] {
    let mut table = [None; N];
    for &symbol in encoding.alphabet() {
        // `.` shares its code with `-`; decode always yields `-`.
        if symbol == '.' {
            continue;
        }
        let code = code_for(encoding, symbol) as usize;
        assert!(
            table[code].is_none(),
            "ambiguous {encoding} code {code:b} for symbol {symbol:?}"
        );
        table[code] = Some(symbol);
    }
    table
}

pub(crate) static DECODE_2BIT: Lazy<[Option<char>; 4]> =
    Lazy::new(|| build_inverse(Encoding::Bit2));

pub(crate) static DECODE_3BIT: Lazy<[Option<char>; 8]> = Lazy::new(|| {
    let table = build_inverse(Encoding::Bit3);
    assert!(
        table[SENTINEL_3BIT as usize].is_none(),
        "3-bit sentinel pattern collides with a real symbol code"
    );
    table
});

pub(crate) static DECODE_4BIT: Lazy<[Option<char>; 16]> =
    Lazy::new(|| build_inverse(Encoding::Bit4));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bit_codes() {
        assert_eq!(two_bit_code('A'), 0b00);
        assert_eq!(two_bit_code('C'), 0b01);
        assert_eq!(two_bit_code('G'), 0b10);
        assert_eq!(two_bit_code('T'), 0b11);
    }

    #[test]
    fn test_three_bit_codes() {
        assert_eq!(three_bit_code('A'), 0b100);
        assert_eq!(three_bit_code('C'), 0b101);
        assert_eq!(three_bit_code('G'), 0b110);
        assert_eq!(three_bit_code('T'), 0b111);
        assert_eq!(three_bit_code('N'), 0b011);
        assert_eq!(three_bit_code('-'), 0b000);
        assert_eq!(three_bit_code('.'), 0b000);
    }

    #[test]
    fn test_four_bit_codes_are_presence_vectors() {
        assert_eq!(four_bit_code('-'), 0b0000);
        assert_eq!(four_bit_code('.'), 0b0000);
        assert_eq!(four_bit_code('A'), 0b1000);
        assert_eq!(four_bit_code('C'), 0b0100);
        assert_eq!(four_bit_code('G'), 0b0010);
        assert_eq!(four_bit_code('T'), 0b0001);
        assert_eq!(four_bit_code('R'), 0b1010); // A or G
        assert_eq!(four_bit_code('Y'), 0b0101); // C or T
        assert_eq!(four_bit_code('S'), 0b0110); // G or C
        assert_eq!(four_bit_code('W'), 0b1001); // A or T
        assert_eq!(four_bit_code('K'), 0b0011); // G or T
        assert_eq!(four_bit_code('M'), 0b1100); // A or C
        assert_eq!(four_bit_code('B'), 0b0111);
        assert_eq!(four_bit_code('D'), 0b1011);
        assert_eq!(four_bit_code('H'), 0b1101);
        assert_eq!(four_bit_code('V'), 0b1110);
        assert_eq!(four_bit_code('N'), 0b1111);
    }

    #[test]
    fn test_inverse_tables_round_trip() {
        for &symbol in Encoding::Bit2.alphabet() {
            assert_eq!(DECODE_2BIT[two_bit_code(symbol) as usize], Some(symbol));
        }
        for &symbol in Encoding::Bit3.alphabet() {
            let expected = if symbol == '.' { '-' } else { symbol };
            assert_eq!(
                DECODE_3BIT[three_bit_code(symbol) as usize],
                Some(expected)
            );
        }
        for &symbol in Encoding::Bit4.alphabet() {
            let expected = if symbol == '.' { '-' } else { symbol };
            assert_eq!(DECODE_4BIT[four_bit_code(symbol) as usize], Some(expected));
        }
    }

    #[test]
    fn test_sentinel_unused_and_gaps_in_3bit_table() {
        assert_eq!(DECODE_3BIT[SENTINEL_3BIT as usize], None);
        assert_eq!(DECODE_3BIT[0b001], None);
    }

    #[test]
    fn test_four_bit_table_is_a_bijection() {
        assert!(DECODE_4BIT.iter().all(|slot| slot.is_some()));
    }
}
