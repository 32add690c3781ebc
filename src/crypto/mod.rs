// src/crypto/mod.rs
//! Cipher engine: single-shot text encryption with DES, Triple-DES and AES
//!
//! Every call validates key material against the algorithm's
//! [`CipherSpec`](crate::algo::CipherSpec) first, then runs the block
//! transform on UTF-8 bytes and speaks standard base-64 at the boundary.
mod decrypt;
mod encrypt;
mod transform;
mod validate;

pub use decrypt::{aes_decrypt, decrypt, des_decrypt, triple_des_decrypt};
pub use encrypt::{aes_encrypt, des_encrypt, encrypt, triple_des_encrypt};
pub use validate::{is_weak_triple_des_key, validate};

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
