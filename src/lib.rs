// src/lib.rs
//! textcrypt: block-cipher text encryption and unbiased secure random strings
//!
//! Features:
//! - DES / Triple-DES (CBC) and AES (ECB) with PKCS#7, base-64 ciphertext
//! - Strict key/IV length checks and Triple-DES weak-key detection
//! - Rejection-sampled random strings, integers and decimals
//! - secure-gate wrapped key material, zeroized after every call

pub mod algo;
pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod key_ops;
pub mod random;

#[cfg(feature = "logging")]
pub mod logging;

pub mod error;

// Re-export everything users need at the crate root
pub use algo::CipherSpec;
pub use config::load as load_config;
pub use config::Config;
pub use crypto::{
    aes_decrypt, aes_encrypt, decrypt, des_decrypt, des_encrypt, encrypt, triple_des_decrypt,
    triple_des_encrypt,
};
pub use enums::{Algorithm, BlockMode, Padding};
pub use error::{CipherError, CoreError, RandomError, Result};
pub use key_ops::{generate_iv, generate_password, generate_secret};
pub use random::{CharClasses, RandomGenerator};
