// src/error.rs
//! Public error types for the entire crate
//!
//! Cipher and random failures have their own enums so callers can match on
//! the exact failure class; `CoreError` wraps both together with the
//! configuration errors.

use thiserror::Error;

use crate::enums::Algorithm;

/// Failures of the cipher engine.
///
/// Length errors are always raised before any cryptographic primitive runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key length for {algorithm}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        algorithm: Algorithm,
        /// Human-readable list of accepted lengths, e.g. "16, 24 or 32"
        expected: String,
        actual: usize,
    },

    #[error("invalid IV length for {algorithm}: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    /// Key collapses to a weaker keying option (Triple-DES degrading to single DES)
    #[error("specified key is a known weak key for {algorithm} and cannot be used")]
    WeakKey { algorithm: Algorithm },

    /// Wrong key/IV, corrupted ciphertext or bad padding
    #[error("cryptographic failure: {0}")]
    CryptographicFailure(String),
}

/// Failures of the random generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The character classes requested produce an unusable alphabet
    #[error("random generator misconfigured: {0}")]
    Configuration(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
