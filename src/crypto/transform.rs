// src/crypto/transform.rs
//! Raw block transforms on byte buffers
//!
//! Callers must have validated key/IV lengths already; a length mismatch
//! here is still reported, never panicked on.

use cipher::block_padding::Pkcs7;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use crate::algo::CipherSpec;
use crate::enums::{Algorithm, BlockMode, Padding};
use crate::error::CipherError;

use super::Result;

/// Encrypt with the mode/padding in `algorithm`'s [`CipherSpec`]
pub(crate) fn encrypt_bytes(
    algorithm: Algorithm,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>> {
    let spec = algorithm.spec();
    match algorithm {
        Algorithm::Des => encrypt_with::<des::Des>(spec, key, iv, data),
        Algorithm::TripleDes => encrypt_with::<des::TdesEde3>(spec, key, iv, data),
        Algorithm::Aes => match key.len() {
            16 => encrypt_with::<aes::Aes128>(spec, key, iv, data),
            24 => encrypt_with::<aes::Aes192>(spec, key, iv, data),
            _ => encrypt_with::<aes::Aes256>(spec, key, iv, data),
        },
    }
}

/// Inverse of [`encrypt_bytes`]; padding mismatches become `CryptographicFailure`
pub(crate) fn decrypt_bytes(
    algorithm: Algorithm,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>> {
    let spec = algorithm.spec();
    if data.len() % spec.block_size != 0 {
        return Err(CipherError::CryptographicFailure(format!(
            "ciphertext length {} is not a multiple of the {}-byte block size",
            data.len(),
            spec.block_size
        )));
    }
    match algorithm {
        Algorithm::Des => decrypt_with::<des::Des>(spec, key, iv, data),
        Algorithm::TripleDes => decrypt_with::<des::TdesEde3>(spec, key, iv, data),
        Algorithm::Aes => match key.len() {
            16 => decrypt_with::<aes::Aes128>(spec, key, iv, data),
            24 => decrypt_with::<aes::Aes192>(spec, key, iv, data),
            _ => decrypt_with::<aes::Aes256>(spec, key, iv, data),
        },
    }
}

fn encrypt_with<C>(
    spec: &CipherSpec,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    match (spec.mode, spec.padding) {
        (BlockMode::Cbc, Padding::Pkcs7) => cbc_encrypt::<C>(key, require_iv(iv)?, data),
        (BlockMode::Ecb, Padding::Pkcs7) => ecb_encrypt::<C>(key, data),
    }
}

fn decrypt_with<C>(
    spec: &CipherSpec,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    match (spec.mode, spec.padding) {
        (BlockMode::Cbc, Padding::Pkcs7) => cbc_decrypt::<C>(key, require_iv(iv)?, data),
        (BlockMode::Ecb, Padding::Pkcs7) => ecb_decrypt::<C>(key, data),
    }
}

fn require_iv(iv: Option<&[u8]>) -> Result<&[u8]> {
    iv.ok_or_else(|| CipherError::CryptographicFailure("CBC mode requires an IV".into()))
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CipherError::CryptographicFailure(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CipherError::CryptographicFailure(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| bad_padding())
}

fn ecb_encrypt<C>(key: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = ecb::Encryptor::<C>::new_from_slice(key)
        .map_err(|e| CipherError::CryptographicFailure(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn ecb_decrypt<C>(key: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = ecb::Decryptor::<C>::new_from_slice(key)
        .map_err(|e| CipherError::CryptographicFailure(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| bad_padding())
}

fn bad_padding() -> CipherError {
    CipherError::CryptographicFailure(
        "padding is invalid and cannot be removed (wrong key, wrong IV or corrupted data)".into(),
    )
}
