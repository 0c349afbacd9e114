//! Text normalization and mod-26 alphabet arithmetic
//!
//! Every cipher in this crate operates on the 26-letter lowercase Latin
//! alphabet. Normalization is centralized here so that all variants strip
//! and lowercase input identically; the shift helpers keep all position
//! arithmetic on the [0,25] ring and never go negative.

/// Number of letters in the working alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Reduce text to its canonical lowercase letter sequence.
///
/// Keeps ASCII letters only (lowercased, original order); digits,
/// whitespace, and punctuation are dropped. Empty input yields empty
/// output.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalize with 'j' folded into 'i'.
///
/// The Playfair key table has only 25 cells, so the classical convention
/// merges i/j before any table lookup.
pub fn normalize_folded(text: &str) -> String {
    normalize(text).replace('j', "i")
}

/// Alphabet position of a lowercase letter: 'a' -> 0 .. 'z' -> 25.
pub(crate) fn position(letter: u8) -> u8 {
    debug_assert!(letter.is_ascii_lowercase());
    letter - b'a'
}

/// Lowercase letter at the given alphabet position.
pub(crate) fn letter_at(pos: u8) -> char {
    debug_assert!(pos < ALPHABET_LEN);
    (b'a' + pos) as char
}

/// Shift a position forward by `amount`, wrapping at 'z'.
pub(crate) fn shift_forward(pos: u8, amount: u8) -> u8 {
    (pos + amount) % ALPHABET_LEN
}

/// Shift a position backward by `amount`, wrapping at 'a'.
///
/// Computed as an addition of the complement so the result never goes
/// negative. Requires `amount` in [0,25].
pub(crate) fn shift_back(pos: u8, amount: u8) -> u8 {
    (pos + ALPHABET_LEN - amount) % ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_nonletters() {
        assert_eq!(normalize("Attack at dawn!"), "attackatdawn");
        assert_eq!(normalize("a1b2 c3-d4"), "abcd");
        assert_eq!(normalize("Hello, World."), "helloworld");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_normalize_preserves_order() {
        assert_eq!(normalize("z y x"), "zyx");
    }

    #[test]
    fn test_normalize_folded() {
        assert_eq!(normalize_folded("Jumping Jacks"), "iumpingiacks");
        assert_eq!(normalize_folded("no fold here"), "nofoldhere");
    }

    #[test]
    fn test_position_letter_roundtrip() {
        for pos in 0..ALPHABET_LEN {
            assert_eq!(position(letter_at(pos) as u8), pos);
        }
    }

    #[test]
    fn test_shift_forward_wraps() {
        assert_eq!(shift_forward(position(b'z'), 1), position(b'a'));
        assert_eq!(shift_forward(position(b'a'), 13), position(b'n'));
        assert_eq!(shift_forward(5, 0), 5);
    }

    #[test]
    fn test_shift_back_wraps_nonnegative() {
        assert_eq!(shift_back(position(b'a'), 1), position(b'z'));
        assert_eq!(shift_back(position(b'n'), 13), position(b'a'));
        assert_eq!(shift_back(5, 0), 5);
    }

    #[test]
    fn test_shift_inverse() {
        for pos in 0..ALPHABET_LEN {
            for amount in 0..ALPHABET_LEN {
                assert_eq!(shift_back(shift_forward(pos, amount), amount), pos);
            }
        }
    }
}
