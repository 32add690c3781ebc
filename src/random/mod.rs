// src/random/mod.rs
//! Unbiased random generator
//!
//! The free functions below use the operating-system entropy source. Build a
//! [`RandomGenerator`] with [`RandomGenerator::with_entropy`] to inject a
//! different one.
mod alphabet;
mod entropy;
mod generator;

pub use alphabet::{Alphabet, CharClasses};
pub use entropy::{EntropySource, SystemEntropySource};
pub use generator::{next_decimal_with, RandomGenerator};

use rust_decimal::Decimal;

pub type Result<T> = std::result::Result<T, crate::error::RandomError>;

/// Uniform integer in `[0, max)`
pub fn next_int_max(max: i32) -> Result<i32> {
    RandomGenerator::new().next_int_max(max)
}

/// Uniform integer in `[min, max)`
pub fn next_int(min: i32, max: i32) -> Result<i32> {
    RandomGenerator::new().next_int(min, max)
}

/// Decimal in `[from, to)`
pub fn next_decimal(from: Decimal, to: Decimal) -> Result<Decimal> {
    RandomGenerator::new().next_decimal(from, to)
}

pub fn next_string(length: usize) -> Result<String> {
    RandomGenerator::new().next_string(length)
}

pub fn next_string_with(length: usize, classes: &CharClasses) -> Result<String> {
    RandomGenerator::new().next_string_with(length, classes)
}

pub fn next_alphanumeric(length: usize) -> Result<String> {
    RandomGenerator::new().next_alphanumeric(length)
}

pub fn next_alphanumeric_upper(length: usize) -> Result<String> {
    RandomGenerator::new().next_alphanumeric_upper(length)
}

pub fn next_alphanumeric_lower(length: usize) -> Result<String> {
    RandomGenerator::new().next_alphanumeric_lower(length)
}

pub fn next_numeric(length: usize) -> Result<String> {
    RandomGenerator::new().next_numeric(length)
}

pub fn next_password(length: usize) -> Result<String> {
    RandomGenerator::new().next_password(length)
}

pub fn next_password_with_specials(length: usize, special_chars: &str) -> Result<String> {
    RandomGenerator::new().next_password_with_specials(length, special_chars)
}
