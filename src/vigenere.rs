//! Vigenere cipher: repeating-key polyalphabetic substitution
//!
//! Each plaintext letter is shifted by the alphabet position of the
//! matching key letter, with the key repeating as needed. The key cursor
//! advances across letters *within* one call, but every call to
//! `encrypt`/`decrypt` starts aligned with the first key letter again, so
//! calls are independent of how the instance was used before.

use crate::alphabet::{self, normalize};
use crate::cipher::Cipher;
use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};

/// Cursor alignment relative to the start of the key.
///
/// `MidStream` means a previous call left the cursor somewhere inside the
/// key; the next call must rewind to the first key letter before
/// processing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAlignment {
    Aligned,
    MidStream,
}

/// Repeating-key substitution cipher.
#[derive(Debug)]
pub struct VigenereCipher {
    /// Alphabet positions of the normalized key letters. Never empty.
    key: Vec<u8>,
    /// Index of the next key letter to use, in [0, key.len()).
    cursor: usize,
    alignment: KeyAlignment,
}

impl Default for VigenereCipher {
    /// Key "a" (shift 0 everywhere) until `set_key` is called.
    fn default() -> Self {
        Self {
            key: vec![0],
            cursor: 0,
            alignment: KeyAlignment::Aligned,
        }
    }
}

impl VigenereCipher {
    pub fn new() -> Self {
        Self::default()
    }

    fn transform(&mut self, text: &str, forward: bool) -> String {
        if self.alignment == KeyAlignment::MidStream {
            self.cursor = 0;
            self.alignment = KeyAlignment::Aligned;
        }
        let out = normalize(text)
            .bytes()
            .map(|b| {
                let pos = alphabet::position(b);
                let key_pos = self.key[self.cursor];
                self.cursor = (self.cursor + 1) % self.key.len();
                let shifted = if forward {
                    alphabet::shift_forward(pos, key_pos)
                } else {
                    alphabet::shift_back(pos, key_pos)
                };
                alphabet::letter_at(shifted)
            })
            .collect();
        // Mid-call state persists; cross-call state does not. The rewind
        // is deferred to the start of the next call.
        self.alignment = KeyAlignment::MidStream;
        out
    }
}

impl Cipher for VigenereCipher {
    fn set_key(&mut self, key: &str) -> Result<()> {
        let normalized = normalize(key);
        if normalized.is_empty() {
            return Err(CipherboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::KeyEmpty,
                "vigenere key must contain at least one letter",
            ));
        }
        self.key = normalized.bytes().map(alphabet::position).collect();
        self.cursor = 0;
        self.alignment = KeyAlignment::Aligned;
        Ok(())
    }

    fn encrypt(&mut self, plaintext: &str) -> String {
        self.transform(plaintext, true)
    }

    fn decrypt(&mut self, ciphertext: &str) -> String {
        self.transform(ciphertext, false)
    }
}
