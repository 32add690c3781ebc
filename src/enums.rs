// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which block cipher,
//! and the mode/padding each one is bound to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algo::{CipherSpec, AES_SPEC, DES_SPEC, TRIPLE_DES_SPEC};
use crate::error::CoreError;

/// Supported block ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Des,
    TripleDes,
    #[default]
    Aes,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Des, Algorithm::TripleDes, Algorithm::Aes];

    /// Fixed key/IV/mode/padding contract of this algorithm
    pub fn spec(self) -> &'static CipherSpec {
        match self {
            Algorithm::Des => &DES_SPEC,
            Algorithm::TripleDes => &TRIPLE_DES_SPEC,
            Algorithm::Aes => &AES_SPEC,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Des => "DES",
            Algorithm::TripleDes => "Triple-DES",
            Algorithm::Aes => "AES",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "des" => Ok(Algorithm::Des),
            "tripledes" | "triple-des" | "3des" | "tdes" => Ok(Algorithm::TripleDes),
            "aes" => Ok(Algorithm::Aes),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown algorithm '{other}' (expected des, tripledes or aes)"
            ))),
        }
    }
}

/// Block chaining mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    /// Cipher block chaining, needs an IV
    Cbc,
    /// Electronic codebook, no IV
    Ecb,
}

impl BlockMode {
    pub fn uses_iv(self) -> bool {
        matches!(self, BlockMode::Cbc)
    }
}

/// Block padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    Pkcs7,
}
