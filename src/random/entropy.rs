// src/random/entropy.rs
//! Entropy sources feeding the random generator

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::RandomError;

use super::Result;

/// Source of cryptographically secure random bytes.
///
/// The generator only ever talks to this trait, so tests can swap in a
/// deterministic byte stream.
pub trait EntropySource {
    /// Fill `dest` completely or fail with [`RandomError::EntropyUnavailable`].
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system CSPRNG (`getrandom` under the hood).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEntropySource;

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomError::EntropyUnavailable(e.to_string()))
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}
