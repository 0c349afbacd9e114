//! Playfair cipher: 5x5 key-table digraph substitution
//!
//! The key seeds a 25-letter table (the alphabet with 'j' folded into
//! 'i'), and text is processed two letters at a time. Letters in the same
//! table row shift one column, letters in the same column shift one row,
//! and letters forming a rectangle swap columns. Self-adjacent letters
//! and odd trailing letters are padded with the filler 'x'.

use crate::alphabet::normalize_folded;
use crate::cipher::Cipher;
use crate::error::Result;

const TABLE_SIDE: usize = 5;
const TABLE_LEN: usize = TABLE_SIDE * TABLE_SIDE;

/// The 25-letter alphabet with 'j' removed, in order.
const FOLDED_ALPHABET: &[u8] = b"abcdefghiklmnopqrstuvwxyz";

/// Filler letter injected when a pair would repeat a letter or when a
/// trailing letter has no partner.
const FILLER: u8 = b'x';

/// Digraph substitution cipher over a 5x5 key table.
#[derive(Debug)]
pub struct PlayfairCipher {
    /// Permutation of the 25 folded-alphabet letters. Cell (row, col)
    /// lives at linear index `row * 5 + col`.
    table: [u8; TABLE_LEN],
}

impl Default for PlayfairCipher {
    /// Plain alphabet table until `set_key` is called.
    fn default() -> Self {
        let mut table = [0u8; TABLE_LEN];
        table.copy_from_slice(FOLDED_ALPHABET);
        Self { table }
    }
}

impl PlayfairCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split normalized text into digraphs, inserting filler as needed.
    ///
    /// A letter followed by itself is paired with the filler instead, and
    /// the repeated letter is deferred to the next pair rather than
    /// consumed. An odd trailing letter is paired with the filler. The
    /// rule never looks ahead more than one position.
    fn create_pairs(text: &[u8]) -> Vec<(u8, u8)> {
        let mut pairs = Vec::with_capacity(text.len() / 2 + 1);
        let mut i = 0;
        while i + 1 < text.len() {
            if text[i] != text[i + 1] {
                pairs.push((text[i], text[i + 1]));
                i += 2;
            } else {
                pairs.push((text[i], FILLER));
                i += 1;
            }
        }
        if i < text.len() {
            pairs.push((text[i], FILLER));
        }
        pairs
    }

    /// Table position of a letter as (row, col).
    fn locate(&self, letter: u8) -> (usize, usize) {
        // The table is a permutation of the folded alphabet and input is
        // normalized, so the letter is always present.
        let index = self.table.iter().position(|&b| b == letter).unwrap_or(0);
        (index / TABLE_SIDE, index % TABLE_SIDE)
    }

    fn at(&self, row: usize, col: usize) -> u8 {
        self.table[row * TABLE_SIDE + col]
    }

    /// Transform one digraph. `shift` is +1 for encryption (right/down)
    /// and TABLE_SIDE-1 for decryption (left/up, as a non-negative wrap).
    fn transform_pair(&self, pair: (u8, u8), shift: usize) -> (u8, u8) {
        let (row_a, col_a) = self.locate(pair.0);
        let (row_b, col_b) = self.locate(pair.1);
        if row_a == row_b {
            (
                self.at(row_a, (col_a + shift) % TABLE_SIDE),
                self.at(row_b, (col_b + shift) % TABLE_SIDE),
            )
        } else if col_a == col_b {
            (
                self.at((row_a + shift) % TABLE_SIDE, col_a),
                self.at((row_b + shift) % TABLE_SIDE, col_b),
            )
        } else {
            // Rectangle: each letter keeps its row, takes the other's
            // column. Self-inverse, so encryption and decryption agree.
            (self.at(row_a, col_b), self.at(row_b, col_a))
        }
    }

    fn transform(&self, text: &str, shift: usize) -> String {
        let text = normalize_folded(text);
        let mut out = String::with_capacity(text.len() + 1);
        for pair in Self::create_pairs(text.as_bytes()) {
            let (a, b) = self.transform_pair(pair, shift);
            out.push(a as char);
            out.push(b as char);
        }
        out
    }
}

impl Cipher for PlayfairCipher {
    /// Build the key table from the key.
    ///
    /// The folded alphabet is appended to the normalized key so the scan
    /// always collects 25 distinct letters; a key with no letters simply
    /// degenerates to the plain alphabet table. Never fails.
    fn set_key(&mut self, key: &str) -> Result<()> {
        let mut seed = normalize_folded(key).into_bytes();
        seed.extend_from_slice(FOLDED_ALPHABET);

        let mut table = [0u8; TABLE_LEN];
        let mut filled = 0;
        for letter in seed {
            if !table[..filled].contains(&letter) {
                table[filled] = letter;
                filled += 1;
                if filled == TABLE_LEN {
                    break;
                }
            }
        }
        self.table = table;
        Ok(())
    }

    fn encrypt(&mut self, plaintext: &str) -> String {
        self.transform(plaintext, 1)
    }

    fn decrypt(&mut self, ciphertext: &str) -> String {
        self.transform(ciphertext, TABLE_SIDE - 1)
    }
}
