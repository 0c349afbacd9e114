use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use cipherbox::cipher::{Cipher, CipherKind, new_cipher};
use cipherbox::error::Result;
use cipherbox::file_ops;

#[derive(Parser, Debug)]
#[command(name = "cipherbox", version, about = "a classical cipher tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CipherArg {
    Caesar,
    Vigenere,
    RailFence,
    Playfair,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => CipherKind::Caesar,
            CipherArg::Vigenere => CipherKind::Vigenere,
            CipherArg::RailFence => CipherKind::RailFence,
            CipherArg::Playfair => CipherKind::Playfair,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt a file
    Encrypt {
        /// Cipher variant to use
        #[arg(short = 'c', long = "cipher", value_enum)]
        cipher: CipherArg,
        /// Cipher key (numeric for caesar/rail-fence, letters otherwise)
        #[arg(short = 'k', long = "key")]
        key: String,
        /// Path to the file whose contents is to be encrypted
        #[arg(short = 'i', long = "input")]
        input: PathBuf,
        /// Path to the file to write the encrypted text to
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
    /// Decrypt a file
    Decrypt {
        /// Cipher variant to use
        #[arg(short = 'c', long = "cipher", value_enum)]
        cipher: CipherArg,
        /// Cipher key (numeric for caesar/rail-fence, letters otherwise)
        #[arg(short = 'k', long = "key")]
        key: String,
        /// Path to the file whose contents is to be decrypted
        #[arg(short = 'i', long = "input")]
        input: PathBuf,
        /// Path to the file to write the decrypted text to
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn configure(kind: CipherArg, key: &str) -> Result<Box<dyn Cipher>> {
    let mut cipher = new_cipher(kind.into());
    cipher.set_key(key)?;
    Ok(cipher)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt {
            cipher,
            key,
            input,
            output,
        } => configure(cipher, &key)
            .and_then(|mut c| file_ops::encrypt_file(c.as_mut(), &input, &output)),
        Commands::Decrypt {
            cipher,
            key,
            input,
            output,
        } => configure(cipher, &key)
            .and_then(|mut c| file_ops::decrypt_file(c.as_mut(), &input, &output)),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
