//! Caesar cipher: fixed-shift monoalphabetic substitution
//!
//! The key is an integer shift amount, reduced to [0,25] at configuration
//! time. Negative keys are accepted and reduced with Euclidean remainder,
//! so `-1` behaves as a shift of 25.

use crate::alphabet::{self, normalize};
use crate::cipher::Cipher;
use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};

/// Fixed-shift substitution cipher. Key "13" gives the classic ROT13.
#[derive(Debug, Default)]
pub struct CaesarCipher {
    /// Shift amount, always in [0,25].
    shift: u8,
}

impl CaesarCipher {
    /// Create a cipher with shift 0 (identity until `set_key`).
    pub fn new() -> Self {
        Self::default()
    }

    fn transform(&self, text: &str, forward: bool) -> String {
        normalize(text)
            .bytes()
            .map(|b| {
                let pos = alphabet::position(b);
                let shifted = if forward {
                    alphabet::shift_forward(pos, self.shift)
                } else {
                    alphabet::shift_back(pos, self.shift)
                };
                alphabet::letter_at(shifted)
            })
            .collect()
    }
}

impl Cipher for CaesarCipher {
    fn set_key(&mut self, key: &str) -> Result<()> {
        let amount: i64 = key.trim().parse().map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::KeyNotNumeric,
                format!("caesar key must be an integer, got {:?}", key),
                e,
            )
        })?;
        self.shift = amount.rem_euclid(i64::from(alphabet::ALPHABET_LEN)) as u8;
        Ok(())
    }

    fn encrypt(&mut self, plaintext: &str) -> String {
        self.transform(plaintext, true)
    }

    fn decrypt(&mut self, ciphertext: &str) -> String {
        self.transform(ciphertext, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(key: &str) -> CaesarCipher {
        let mut cipher = CaesarCipher::new();
        cipher.set_key(key).unwrap();
        cipher
    }

    #[test]
    fn test_rot13_known_answer() {
        let mut cipher = configured("13");
        assert_eq!(cipher.encrypt("Attack at dawn!"), "nggnpxngqnja");
        assert_eq!(cipher.decrypt("nggnpxngqnja"), "attackatdawn");
    }

    #[test]
    fn test_shift_zero_is_identity() {
        let mut cipher = configured("0");
        assert_eq!(cipher.encrypt("Hello, World!"), "helloworld");
        assert_eq!(cipher.decrypt("helloworld"), "helloworld");
    }

    #[test]
    fn test_rot13_is_self_inverse() {
        let mut cipher = configured("13");
        let once = cipher.encrypt("attackatdawn");
        let twice = cipher.encrypt(&once);
        assert_eq!(twice, "attackatdawn");
    }

    #[test]
    fn test_negative_key_reduces_nonnegative() {
        // -1 mod 26 = 25, so encrypting 'a' yields 'z'
        let mut cipher = configured("-1");
        assert_eq!(cipher.encrypt("abc"), "zab");
        assert_eq!(cipher.decrypt("zab"), "abc");
    }

    #[test]
    fn test_large_key_wraps() {
        let mut small = configured("3");
        let mut large = configured("55"); // 55 mod 26 = 3
        assert_eq!(large.encrypt("wrap"), small.encrypt("wrap"));
    }

    #[test]
    fn test_roundtrip_all_shifts() {
        let plaintext = "Pack my box with five dozen liquor jugs";
        for shift in 0..26 {
            let mut cipher = configured(&shift.to_string());
            let ciphertext = cipher.encrypt(plaintext);
            assert_eq!(cipher.decrypt(&ciphertext), normalize(plaintext));
        }
    }

    #[test]
    fn test_nonnumeric_key_rejected() {
        let mut cipher = CaesarCipher::new();
        let err = cipher.set_key("thirteen").expect_err("expected key error");
        assert_eq!(err.kind, Some(ErrorKind::KeyNotNumeric));
        assert_eq!(err.category, ErrorCategory::User);
    }

    #[test]
    fn test_empty_input() {
        let mut cipher = configured("5");
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt("?!123"), "");
    }
}
