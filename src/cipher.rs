//! The shared cipher contract
//!
//! Every cipher variant satisfies the same three-operation contract:
//! configure a key, transform plaintext to ciphertext, transform
//! ciphertext back. Callers that only hold a `Box<dyn Cipher>` can use
//! any variant without knowing which one it is.

use crate::caesar::CaesarCipher;
use crate::error::Result;
use crate::playfair::PlayfairCipher;
use crate::railfence::RailFenceCipher;
use crate::vigenere::VigenereCipher;

/// Common capability set implemented by all cipher variants.
///
/// `set_key` is the only fallible operation; key validation happens there
/// and nowhere else, so `encrypt`/`decrypt` on a configured instance
/// always succeed. Both transforms normalize their input first (lowercase
/// letters only), so output never contains digits, spaces, or punctuation.
///
/// `encrypt` and `decrypt` take `&mut self` because the Vigenere variant
/// advances a key cursor while processing. Instances are not safe for
/// concurrent use from multiple threads; callers must serialize access to
/// a shared instance.
pub trait Cipher {
    /// Configure the cipher with a key. Fails if the key does not satisfy
    /// the format this variant requires.
    fn set_key(&mut self, key: &str) -> Result<()>;

    /// Normalize `plaintext` and encrypt it.
    fn encrypt(&mut self, plaintext: &str) -> String;

    /// Normalize `ciphertext` and decrypt it.
    fn decrypt(&mut self, ciphertext: &str) -> String;
}

/// The closed set of cipher variants this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    /// Fixed-shift monoalphabetic substitution. Numeric key.
    Caesar,
    /// Repeating-key polyalphabetic substitution. Alphabetic key.
    Vigenere,
    /// Cyclic row transposition. Numeric key (number of rails, >= 1).
    RailFence,
    /// 5x5 key-table digraph substitution. Alphabetic key.
    Playfair,
}

/// Create an unconfigured cipher of the given kind.
///
/// The returned instance behaves as an identity-like transform until
/// `set_key` succeeds.
pub fn new_cipher(kind: CipherKind) -> Box<dyn Cipher> {
    match kind {
        CipherKind::Caesar => Box::new(CaesarCipher::new()),
        CipherKind::Vigenere => Box::new(VigenereCipher::new()),
        CipherKind::RailFence => Box::new(RailFenceCipher::new()),
        CipherKind::Playfair => Box::new(PlayfairCipher::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::normalize;

    #[test]
    fn test_polymorphic_roundtrip() {
        let cases = [
            (CipherKind::Caesar, "7"),
            (CipherKind::Vigenere, "lemon"),
            (CipherKind::RailFence, "4"),
        ];
        let plaintext = "The quick brown fox jumps over the lazy dog";
        for (kind, key) in cases {
            let mut cipher = new_cipher(kind);
            cipher.set_key(key).unwrap();
            let ciphertext = cipher.encrypt(plaintext);
            assert_eq!(
                cipher.decrypt(&ciphertext),
                normalize(plaintext),
                "roundtrip failed for {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_invalid_key_surfaces_through_trait() {
        let mut cipher = new_cipher(CipherKind::Caesar);
        assert!(cipher.set_key("thirteen").is_err());
    }
}
