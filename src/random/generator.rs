// src/random/generator.rs
//! Unbiased random numbers and strings
//!
//! Bounded numbers come from a `StdRng` freshly seeded with four bytes of
//! entropy per call. Strings skip the PRNG entirely: raw entropy bytes are
//! mapped onto the alphabet with rejection sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use crate::aliases::EntropyBytes;
use crate::consts::{MAX_DECIMAL_DRAWS, MAX_DECIMAL_SCALE, SEED_BYTES};
use crate::error::RandomError;

use super::alphabet::{Alphabet, CharClasses};
use super::entropy::{EntropySource, SystemEntropySource};
use super::Result;

/// Random generator over an injectable entropy source.
///
/// Holds no state besides the source handle; every call draws fresh entropy.
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator<E = SystemEntropySource> {
    entropy: E,
}

impl RandomGenerator<SystemEntropySource> {
    pub fn new() -> Self {
        Self {
            entropy: SystemEntropySource,
        }
    }
}

impl<E: EntropySource> RandomGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Uniform integer in `[0, max)`
    pub fn next_int_max(&self, max: i32) -> Result<i32> {
        self.next_int(0, max)
    }

    /// Uniform integer in `[min, max)`
    pub fn next_int(&self, min: i32, max: i32) -> Result<i32> {
        if min >= max {
            return Err(RandomError::InvalidRange(format!(
                "min ({min}) must be less than max ({max})"
            )));
        }
        let mut rng = self.seeded_rng()?;
        Ok(rng.random_range(min..max))
    }

    /// Decimal in `[from, to)`, see [`next_decimal_with`]
    pub fn next_decimal(&self, from: Decimal, to: Decimal) -> Result<Decimal> {
        let mut rng = self.seeded_rng()?;
        next_decimal_with(&mut rng, from, to)
    }

    /// Every class enabled, default special characters
    pub fn next_string(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::all())
    }

    pub fn next_alphanumeric(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::alphanumeric())
    }

    pub fn next_alphanumeric_upper(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::alphanumeric_upper())
    }

    pub fn next_alphanumeric_lower(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::alphanumeric_lower())
    }

    pub fn next_numeric(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::numeric())
    }

    pub fn next_password(&self, length: usize) -> Result<String> {
        self.next_string_with(length, &CharClasses::all())
    }

    /// Password whose special class is `special_chars` instead of the default set
    pub fn next_password_with_specials(
        &self,
        length: usize,
        special_chars: &str,
    ) -> Result<String> {
        self.next_string_with(
            length,
            &CharClasses::all().with_special_chars(special_chars),
        )
    }

    /// `length` characters drawn uniformly from the alphabet built from `classes`.
    ///
    /// Each raw byte above [`Alphabet::max_unbiased_byte`] is replaced by a
    /// fresh single-byte draw until one is acceptable, so every symbol has the
    /// same probability whatever the alphabet length.
    pub fn next_string_with(&self, length: usize, classes: &CharClasses) -> Result<String> {
        let alphabet = Alphabet::from_classes(classes)?;
        let max_random = alphabet.max_unbiased_byte();

        let mut raw = vec![0u8; length];
        let filled = self.entropy.fill_bytes(&mut raw);
        let data = EntropyBytes::new(raw);
        filled?;

        let mut replacement = [0u8; 1];
        let mut rejected = 0usize;
        let mut out = String::with_capacity(length);

        for &byte in data.expose_secret() {
            let mut value = byte;
            while value > max_random {
                self.entropy.fill_bytes(&mut replacement)?;
                value = replacement[0];
                rejected += 1;
            }
            out.push(alphabet.char_for(value));
        }

        trace!(
            length,
            alphabet_len = alphabet.len(),
            rejected,
            "random string generated"
        );
        Ok(out)
    }

    /// Four entropy bytes read as a signed 32-bit seed
    fn seeded_rng(&self) -> Result<StdRng> {
        let mut buf = [0u8; SEED_BYTES];
        self.entropy.fill_bytes(&mut buf)?;
        let seed = i32::from_le_bytes(buf);
        Ok(StdRng::seed_from_u64(i64::from(seed) as u64))
    }
}

/// Decimal in `[from, to)` driven by a caller-supplied generator.
///
/// Three draws in `[0, i32::MAX)` form the 96-bit mantissa of a non-negative
/// decimal whose scale is the sum of the bounds' scales (capped at 28). It is
/// folded into the range with a remainder. When the range spans zero a side
/// is chosen first, with probability proportional to its width.
///
/// Near the 96-bit precision limit the folded sum is rounded and may land on
/// `to`; such draws are discarded and redrawn.
pub fn next_decimal_with<R: Rng>(rng: &mut R, from: Decimal, to: Decimal) -> Result<Decimal> {
    if from >= to {
        return Err(RandomError::InvalidRange(format!(
            "from ({from}) must be less than to ({to})"
        )));
    }

    let scale = (from.scale() + to.scale()).min(MAX_DECIMAL_SCALE);
    let spans_zero = from < Decimal::ZERO && to > Decimal::ZERO;
    let from_f = from.to_f64().unwrap_or(0.0);
    let to_f = to.to_f64().unwrap_or(0.0);

    for attempt in 0..MAX_DECIMAL_DRAWS {
        let lo = next_word(rng);
        let mid = next_word(rng);
        let hi = next_word(rng);
        let r = Decimal::from_parts(lo, mid, hi, false, scale);

        let candidate = if !spans_zero {
            fold(r, from, to)?
        } else if from_f + rng.random::<f64>() * (to_f - from_f) < 0.0 {
            fold(r, from, Decimal::ZERO)?
        } else {
            fold(r, Decimal::ZERO, to)?
        };

        match candidate {
            Some(value) if value >= from && value < to => return Ok(value),
            _ => trace!(attempt, %from, %to, "decimal draw rounded out of range"),
        }
    }

    Err(RandomError::InvalidRange(format!(
        "no decimal in [{from}, {to}) reachable at scale {scale}"
    )))
}

/// `lower + r mod (upper - lower)`, `None` when the sum overflows
fn fold(r: Decimal, lower: Decimal, upper: Decimal) -> Result<Option<Decimal>> {
    let width = upper
        .checked_sub(lower)
        .ok_or_else(|| RandomError::InvalidRange(format!("[{lower}, {upper}) is too wide")))?;
    Ok(lower.checked_add(remainder(r, width)?))
}

/// Non-negative 31-bit draw
fn next_word<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..i32::MAX) as u32
}

fn remainder(value: Decimal, modulus: Decimal) -> Result<Decimal> {
    value
        .checked_rem(modulus)
        .ok_or_else(|| RandomError::InvalidRange(format!("cannot reduce modulo {modulus}")))
}
