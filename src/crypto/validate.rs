// src/crypto/validate.rs
//! Key, IV and weak-key checks, run before any cipher primitive is touched

use crate::enums::Algorithm;
use crate::error::CipherError;

use super::Result;

/// DES keys ignore the low bit of every byte (odd parity)
const DES_PARITY_MASK: u8 = 0xFE;
const DES_SEGMENT_LEN: usize = 8;

/// Full check in the fixed order: key length, IV length, weak key.
pub fn validate(algorithm: Algorithm, key: &[u8], iv: Option<&[u8]>) -> Result<()> {
    check_key_length(algorithm, key)?;
    check_iv_length(algorithm, iv)?;
    check_weak_key(algorithm, key)
}

pub fn check_key_length(algorithm: Algorithm, key: &[u8]) -> Result<()> {
    let spec = algorithm.spec();
    if spec.accepts_key_length(key.len()) {
        return Ok(());
    }
    Err(CipherError::InvalidKeyLength {
        algorithm,
        expected: spec.describe_key_lengths(),
        actual: key.len(),
    })
}

/// A missing IV counts as zero bytes; ECB algorithms accept no IV at all.
pub fn check_iv_length(algorithm: Algorithm, iv: Option<&[u8]>) -> Result<()> {
    let expected = algorithm.spec().iv_length.unwrap_or(0);
    let actual = iv.map_or(0, <[u8]>::len);
    if actual == expected {
        return Ok(());
    }
    Err(CipherError::InvalidIvLength {
        algorithm,
        expected,
        actual,
    })
}

pub fn check_weak_key(algorithm: Algorithm, key: &[u8]) -> Result<()> {
    if algorithm == Algorithm::TripleDes && is_weak_triple_des_key(key) {
        return Err(CipherError::WeakKey { algorithm });
    }
    Ok(())
}

/// True when a 24-byte EDE3 key degenerates to single DES.
///
/// With K1 == K2 the first encrypt/decrypt pair cancels out, with K2 == K3
/// the second one does. Parity bits are ignored, as the cipher ignores them.
pub fn is_weak_triple_des_key(key: &[u8]) -> bool {
    if key.len() != 3 * DES_SEGMENT_LEN {
        return false;
    }
    let (k1, rest) = key.split_at(DES_SEGMENT_LEN);
    let (k2, k3) = rest.split_at(DES_SEGMENT_LEN);
    same_des_key(k1, k2) || same_des_key(k2, k3)
}

fn same_des_key(a: &[u8], b: &[u8]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| x & DES_PARITY_MASK == y & DES_PARITY_MASK)
}
