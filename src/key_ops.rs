// src/key_ops.rs
//! Secret, IV and password generation
//!
//! Builds material that fits an algorithm's key/IV contract exactly, using
//! the unbiased generator. Alphanumeric output keeps byte length equal to
//! character count.

use tracing::debug;

use crate::config::{self, RandomSettings};
use crate::crypto::is_weak_triple_des_key;
use crate::enums::Algorithm;
use crate::error::{CipherError, Result};
use crate::random::RandomGenerator;

/// Generate a secret for `algorithm`, AES length taken from the loaded config
pub fn generate_secret(algorithm: Algorithm) -> Result<String> {
    let len = match algorithm {
        Algorithm::Aes => config::load()?.cipher.aes_key_length,
        other => other.spec().max_key_length(),
    };
    generate_secret_with_length(algorithm, len)
}

/// Generate a secret of `len` bytes, which must be accepted by `algorithm`
///
/// Triple-DES secrets that happen to be weak keys are redrawn.
pub fn generate_secret_with_length(algorithm: Algorithm, len: usize) -> Result<String> {
    let spec = algorithm.spec();
    if !spec.accepts_key_length(len) {
        return Err(CipherError::InvalidKeyLength {
            algorithm,
            expected: spec.describe_key_lengths(),
            actual: len,
        }
        .into());
    }

    let rng = RandomGenerator::new();
    loop {
        let secret = rng.next_alphanumeric(len)?;
        if algorithm != Algorithm::TripleDes || !is_weak_triple_des_key(secret.as_bytes()) {
            debug!(%algorithm, len, "generated secret");
            return Ok(secret);
        }
    }
}

/// Generate an IV for `algorithm`, `None` when its mode takes no IV
pub fn generate_iv(algorithm: Algorithm) -> Result<Option<String>> {
    match algorithm.spec().iv_length {
        Some(len) => Ok(Some(RandomGenerator::new().next_alphanumeric(len)?)),
        None => Ok(None),
    }
}

/// Password with the configured length and special characters
pub fn generate_password(settings: &RandomSettings) -> Result<String> {
    let password = RandomGenerator::new()
        .next_password_with_specials(settings.password_length, &settings.special_chars)?;
    Ok(password)
}
