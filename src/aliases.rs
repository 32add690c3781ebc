// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! Key material, plaintext and raw entropy bytes live inside these for the
//! length of one call and are zeroized when dropped.

pub use secure_gate::dynamic_alias;

dynamic_alias!(KeyMaterial, Vec<u8>); // raw secret bytes, validated per algorithm
dynamic_alias!(PlainText, Vec<u8>); // UTF-8 bytes going in or coming out of a transform
dynamic_alias!(EntropyBytes, Vec<u8>); // raw bytes before they are mapped onto an alphabet
