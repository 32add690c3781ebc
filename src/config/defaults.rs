// src/config/defaults.rs
use crate::config::app::{CipherSettings, RandomSettings};
use crate::consts::{DEFAULT_AES_KEY_LENGTH, DEFAULT_PASSWORD_LENGTH, DEFAULT_SPECIAL_CHARS};
use crate::enums::Algorithm;

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        default_algorithm: Algorithm::Aes,
        aes_key_length: DEFAULT_AES_KEY_LENGTH,
    }
}

pub fn default_random() -> RandomSettings {
    RandomSettings {
        special_chars: DEFAULT_SPECIAL_CHARS.into(),
        password_length: DEFAULT_PASSWORD_LENGTH,
    }
}
