// src/crypto/decrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::aliases::{KeyMaterial, PlainText};
use crate::enums::Algorithm;
use crate::error::CipherError;

use super::transform::decrypt_bytes;
use super::validate::validate;
use super::Result;

/// Decrypt standard base-64 ciphertext → UTF-8 text
///
/// Any mismatch (wrong key or IV, tampered bytes, invalid base-64, non-UTF-8
/// output) is a `CryptographicFailure`; no partial plaintext is returned.
pub fn decrypt(
    algorithm: Algorithm,
    cipher_text: &str,
    secret: &str,
    iv: Option<&str>,
) -> Result<String> {
    let key = KeyMaterial::new(secret.as_bytes().to_vec());
    let iv = iv.map(str::as_bytes);
    validate(algorithm, key.expose_secret(), iv)?;

    if cipher_text.is_empty() {
        debug!(%algorithm, "empty ciphertext, skipping transform");
        return Ok(String::new());
    }

    let raw = STANDARD
        .decode(cipher_text)
        .map_err(|e| CipherError::CryptographicFailure(format!("invalid base-64 input: {e}")))?;
    let plaintext = PlainText::new(decrypt_bytes(algorithm, key.expose_secret(), iv, &raw)?);

    let text = std::str::from_utf8(plaintext.expose_secret())
        .map_err(|_| {
            CipherError::CryptographicFailure("decrypted bytes are not valid UTF-8".into())
        })?
        .to_owned();
    debug!(%algorithm, ciphertext_len = raw.len(), "decrypted");
    Ok(text)
}

/// Inverse of [`super::des_encrypt`]
pub fn des_decrypt(cipher_text: &str, secret: &str, iv: &str) -> Result<String> {
    decrypt(Algorithm::Des, cipher_text, secret, Some(iv))
}

/// Inverse of [`super::triple_des_encrypt`]
pub fn triple_des_decrypt(cipher_text: &str, secret: &str, iv: &str) -> Result<String> {
    decrypt(Algorithm::TripleDes, cipher_text, secret, Some(iv))
}

/// Inverse of [`super::aes_encrypt`]
pub fn aes_decrypt(cipher_text: &str, secret: &str) -> Result<String> {
    decrypt(Algorithm::Aes, cipher_text, secret, None)
}
