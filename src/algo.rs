// src/algo.rs
//! Per-algorithm cipher descriptors

use crate::enums::{Algorithm, BlockMode, Padding};

/// Immutable key/IV/mode/padding contract of one block cipher.
///
/// Only reachable through [`Algorithm::spec`].
#[derive(Debug, PartialEq, Eq)]
pub struct CipherSpec {
    pub algorithm: Algorithm,
    /// Accepted key lengths in bytes
    pub key_lengths: &'static [usize],
    /// Required IV length in bytes, `None` for modes without an IV
    pub iv_length: Option<usize>,
    pub block_size: usize,
    pub mode: BlockMode,
    pub padding: Padding,
}

impl CipherSpec {
    pub fn accepts_key_length(&self, len: usize) -> bool {
        self.key_lengths.contains(&len)
    }

    /// Largest accepted key length
    pub fn max_key_length(&self) -> usize {
        self.key_lengths.iter().copied().max().unwrap_or(0)
    }

    /// Accepted key lengths rendered for error messages ("8", "16, 24 or 32")
    pub fn describe_key_lengths(&self) -> String {
        match self.key_lengths {
            [] => String::new(),
            [only] => only.to_string(),
            [init @ .., last] => {
                let head: Vec<String> = init.iter().map(ToString::to_string).collect();
                format!("{} or {last}", head.join(", "))
            }
        }
    }
}

pub static DES_SPEC: CipherSpec = CipherSpec {
    algorithm: Algorithm::Des,
    key_lengths: &[8],
    iv_length: Some(8),
    block_size: 8,
    mode: BlockMode::Cbc,
    padding: Padding::Pkcs7,
};

pub static TRIPLE_DES_SPEC: CipherSpec = CipherSpec {
    algorithm: Algorithm::TripleDes,
    key_lengths: &[24],
    iv_length: Some(8),
    block_size: 8,
    mode: BlockMode::Cbc,
    padding: Padding::Pkcs7,
};

pub static AES_SPEC: CipherSpec = CipherSpec {
    algorithm: Algorithm::Aes,
    key_lengths: &[16, 24, 32],
    iv_length: None,
    block_size: 16,
    mode: BlockMode::Ecb,
    padding: Padding::Pkcs7,
};
