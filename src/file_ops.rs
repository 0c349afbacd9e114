//! File-to-file transform operations
//!
//! Thin plumbing used by the CLI: read a UTF-8 text file, run the
//! configured cipher over its contents, write the result. The cipher
//! itself never touches I/O.

use crate::cipher::Cipher;
use crate::error::{CipherboxError, ErrorCategory, ErrorKind, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Encrypt the contents of `input_path` and write the ciphertext to `output_path`.
pub fn encrypt_file(
    cipher: &mut dyn Cipher,
    input_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let plaintext = read_text(input_path)?;
    let ciphertext = cipher.encrypt(&plaintext);
    write_text(output_path, &ciphertext)
}

/// Decrypt the contents of `input_path` and write the plaintext to `output_path`.
pub fn decrypt_file(
    cipher: &mut dyn Cipher,
    input_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let ciphertext = read_text(input_path)?;
    let plaintext = cipher.decrypt(&ciphertext);
    write_text(output_path, &plaintext)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        CipherboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to write to {}", path.display()),
            e,
        )
    })
}

fn read_error(path: &Path, e: io::Error) -> CipherboxError {
    CipherboxError::with_kind_and_source(
        ErrorCategory::User,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        e,
    )
}
