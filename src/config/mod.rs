// src/config/mod.rs
//! Configuration system for textcrypt
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, CipherSettings, Config, RandomSettings};

mod app;
mod defaults;
