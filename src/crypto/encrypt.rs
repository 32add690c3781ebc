// src/crypto/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::aliases::{KeyMaterial, PlainText};
use crate::enums::Algorithm;

use super::transform::encrypt_bytes;
use super::validate::validate;
use super::Result;

/// Encrypt UTF-8 text → standard base-64 ciphertext
///
/// `iv` must be `Some` for CBC algorithms and `None` for AES (ECB).
/// Empty plaintext yields an empty string once the key/IV have been validated.
pub fn encrypt(
    algorithm: Algorithm,
    plain_text: &str,
    secret: &str,
    iv: Option<&str>,
) -> Result<String> {
    let key = KeyMaterial::new(secret.as_bytes().to_vec());
    let iv = iv.map(str::as_bytes);
    validate(algorithm, key.expose_secret(), iv)?;

    if plain_text.is_empty() {
        debug!(%algorithm, "empty plaintext, skipping transform");
        return Ok(String::new());
    }

    let plaintext = PlainText::new(plain_text.as_bytes().to_vec());
    let raw = encrypt_bytes(algorithm, key.expose_secret(), iv, plaintext.expose_secret())?;
    debug!(
        %algorithm,
        plaintext_len = plain_text.len(),
        ciphertext_len = raw.len(),
        "encrypted"
    );
    Ok(STANDARD.encode(raw))
}

/// DES-CBC, PKCS#7. `secret` and `iv` must both be 8 bytes.
pub fn des_encrypt(plain_text: &str, secret: &str, iv: &str) -> Result<String> {
    encrypt(Algorithm::Des, plain_text, secret, Some(iv))
}

/// Triple-DES (EDE3) CBC, PKCS#7. 24-byte `secret`, 8-byte `iv`.
pub fn triple_des_encrypt(plain_text: &str, secret: &str, iv: &str) -> Result<String> {
    encrypt(Algorithm::TripleDes, plain_text, secret, Some(iv))
}

/// AES-ECB, PKCS#7. Key size (128/192/256) follows the 16/24/32-byte `secret`.
pub fn aes_encrypt(plain_text: &str, secret: &str) -> Result<String> {
    encrypt(Algorithm::Aes, plain_text, secret, None)
}
