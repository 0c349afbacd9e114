//! Cipherbox - classical text ciphers behind one uniform contract
//!
//! Implements four pre-modern ciphers over the 26-letter Latin alphabet:
//! Caesar (fixed shift), Vigenere (repeating key), rail fence (cyclic
//! transposition), and Playfair (5x5 digraph substitution). All four
//! satisfy the same [`cipher::Cipher`] contract: configure a key, then
//! encrypt/decrypt complete strings. Input is normalized to lowercase
//! letters before every transform.
//!
//! These ciphers offer no real security; they exist for study and play.
//!
//! # Examples
//!
//! ```
//! use cipherbox::cipher::{Cipher, CipherKind, new_cipher};
//!
//! let mut cipher = new_cipher(CipherKind::Caesar);
//! cipher.set_key("13").unwrap();
//! assert_eq!(cipher.encrypt("Attack at dawn!"), "nggnpxngqnja");
//! assert_eq!(cipher.decrypt("nggnpxngqnja"), "attackatdawn");
//! ```

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod caesar;
pub mod cipher;
pub mod error;
pub mod file_ops;
pub mod playfair;
pub mod railfence;
pub mod vigenere;
