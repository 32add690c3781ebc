// src/consts.rs
//! Shared constants: character classes and defaults

/// Uppercase character class
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase character class
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Numeric character class
pub const NUMERIC_CHARS: &str = "1234567890";

/// Default special character class, used unless a caller overrides it
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_=+";

/// Largest alphabet a single random byte can address
pub const MAX_ALPHABET_LEN: usize = 256;

/// Bytes of OS entropy used to seed one bounded draw
pub const SEED_BYTES: usize = 4;

/// Highest scale a `Decimal` can carry
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Redraws allowed when a folded decimal rounds out of its range
pub const MAX_DECIMAL_DRAWS: u32 = 64;

/// Default password length when no configuration overrides it
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Default AES key length for generated secrets (AES-256)
pub const DEFAULT_AES_KEY_LENGTH: usize = 32;

/// Environment variable naming the TOML configuration file
pub const CONFIG_PATH_ENV: &str = "TEXTCRYPT_CONFIG";

/// Environment variable overriding the default algorithm
pub const ALGORITHM_ENV: &str = "TEXTCRYPT_ALGORITHM";

/// Configuration file used when `TEXTCRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "textcrypt.toml";
