// tests/common.rs
//! Shared test utilities: logging setup and fixed key material
#![allow(dead_code)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const PLAIN_TEXT: &str = "hello world";
pub const DES_SECRET: &str = "secret99";
pub const TRIPLE_DES_SECRET: &str = "secret99asdfghjkqwerty12";
pub const INIT_VECTOR: &str = "!@#$%^&*";
pub const AES_128_SECRET: &str = "!@#$%^&*()123456";
pub const AES_192_SECRET: &str = "!@#$%^&*()1234567890qwer";
pub const AES_256_SECRET: &str = "!@#$%^&*()123456!@#$%^&*()123456";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent
}

/// Two DES-family keys are the same key when they differ only in parity bits
pub fn des_equivalent(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x & 0xFE == y & 0xFE)
}
