mod errors;
mod report;
mod source;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info, warn};

use hill_crypto::analysis::FrequencyReport;
use hill_crypto::cipher::{decrypt, encrypt};
use hill_crypto::key::KeyPair;
use hill_crypto::preset::key_tables::PROJECT_KEY_PAIR;

use crate::errors::AppError;

/// Hill cipher over the 26-letter uppercase alphabet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Mode of operation (encrypt/decrypt)
    #[arg(short, long, value_enum)]
    mode: OperationMode,

    /// Path to the input file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output file
    #[arg(short, long)]
    output: PathBuf,

    /// JSON key pair to use instead of the built-in project matrices
    #[arg(short, long)]
    key_file: Option<PathBuf>,

    /// Where to save the letter-frequency histograms (encrypt mode only)
    #[arg(long)]
    histogram: Option<PathBuf>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let keys = load_keys(cli.key_file.as_deref())?;
    info!("block size: {}", keys.block_size());

    match cli.mode {
        OperationMode::Encrypt => run_encrypt(cli, &keys),
        OperationMode::Decrypt => run_decrypt(cli, &keys),
    }
}

/// Reads a key pair from the given JSON file, falling back to the compiled-in
/// project matrices. A pair that fails the inverse check is still usable for
/// one-way work, so a mismatch only warns.
fn load_keys(path: Option<&Path>) -> Result<KeyPair, AppError> {
    let Some(path) = path else {
        return Ok(PROJECT_KEY_PAIR.clone());
    };

    let raw = source::read_source(path)?;
    let keys: KeyPair = serde_json::from_str(&raw).map_err(|source| AppError::KeyFile {
        path: path.display().to_string(),
        source,
    })?;

    if !keys.is_consistent()? {
        warn!(
            "key file {}: decryption matrix is not the modular inverse of the encryption matrix",
            path.display()
        );
    }

    Ok(keys)
}

fn run_encrypt(cli: &Cli, keys: &KeyPair) -> Result<(), AppError> {
    let plaintext = source::load_and_clean_text(&cli.input)?;
    info!("encrypting {} characters", plaintext.len());

    let ciphertext = encrypt(&plaintext, &keys.encryption)?;

    println!("\n--- SAMPLE ENCRYPTION ---");
    println!("Original (first 50 chars):  {}", snippet(&plaintext, 50));
    println!("Encrypted (first 50 chars): {}", snippet(&ciphertext, 50));

    write_output(&cli.output, &ciphertext)?;
    println!("\nFull encrypted text saved to {}", cli.output.display());

    if let Some(histogram) = &cli.histogram {
        let frequencies = FrequencyReport::new(&plaintext, &ciphertext);
        report::save_histograms(&frequencies, histogram)?;
        println!("Histograms saved to {}", histogram.display());
    }

    Ok(())
}

fn run_decrypt(cli: &Cli, keys: &KeyPair) -> Result<(), AppError> {
    if cli.histogram.is_some() {
        warn!("--histogram only applies to encrypt mode, ignoring");
    }

    info!("reading encrypted text from {}", cli.input.display());
    let ciphertext = source::read_source(&cli.input)?.trim().to_string();

    let plaintext = decrypt(&ciphertext, &keys.decryption)?;

    write_output(&cli.output, &plaintext)?;
    println!("\nDecrypted text saved to {}", cli.output.display());
    println!("--- SNIPPET ---");
    println!("{}", snippet(&plaintext, 100));

    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|source| AppError::OutputWrite {
        path: path.display().to_string(),
        source,
    })
}

/// First `limit` characters; cipher input and output are ASCII, so byte
/// slicing is safe here.
fn snippet(text: &str, limit: usize) -> &str {
    &text[..text.len().min(limit)]
}
