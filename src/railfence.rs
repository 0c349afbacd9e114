//! Rail fence cipher: cyclic row transposition
//!
//! Encryption scatters letter `i` onto rail `i % rails` and reads the
//! rails back in order. Decryption rebuilds the per-rail slice lengths
//! from the same cyclic distribution (earlier rails hold one extra letter
//! when the length does not divide evenly) and re-interleaves them
//! round-robin.

use crate::alphabet::normalize;
use crate::cipher::Cipher;
use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};

/// Fixed-rail transposition cipher. One rail is the identity transform.
#[derive(Debug)]
pub struct RailFenceCipher {
    /// Number of rails, always >= 1.
    rails: usize,
}

impl Default for RailFenceCipher {
    fn default() -> Self {
        Self { rails: 1 }
    }
}

impl RailFenceCipher {
    /// Create a cipher with a single rail (identity until `set_key`).
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cipher for RailFenceCipher {
    fn set_key(&mut self, key: &str) -> Result<()> {
        let rails: i64 = key.trim().parse().map_err(|e| {
            CipherboxError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::KeyNotNumeric,
                format!("rail fence key must be an integer, got {:?}", key),
                e,
            )
        })?;
        if rails < 1 {
            return Err(CipherboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::KeyOutOfRange,
                format!("rail fence requires at least 1 rail, got {}", rails),
            ));
        }
        self.rails = rails as usize;
        Ok(())
    }

    fn encrypt(&mut self, plaintext: &str) -> String {
        let text = normalize(plaintext);
        let mut rails = vec![String::new(); self.rails];
        for (i, letter) in text.chars().enumerate() {
            rails[i % self.rails].push(letter);
        }
        rails.concat()
    }

    fn decrypt(&mut self, ciphertext: &str) -> String {
        let text = normalize(ciphertext);
        let len = text.len();
        let base = len / self.rails;
        let extra = len % self.rails;

        // Slice the ciphertext into rails with the same lengths the
        // encryption distribution produced: the first `extra` rails got
        // one letter more.
        let mut rails: Vec<&str> = Vec::with_capacity(self.rails);
        let mut start = 0;
        for i in 0..self.rails {
            let rail_len = base + usize::from(i < extra);
            rails.push(&text[start..start + rail_len]);
            start += rail_len;
        }

        // Round-robin across the rails to restore original order.
        let mut plaintext = String::with_capacity(len);
        for i in 0..=base {
            for rail in &rails {
                if let Some(letter) = rail.as_bytes().get(i) {
                    plaintext.push(*letter as char);
                }
            }
        }
        plaintext
    }
}
