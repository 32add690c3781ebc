// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::{ALGORITHM_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use crate::enums::Algorithm;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSettings,
    pub random: RandomSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    /// Algorithm used when a caller (or the CLI) does not name one
    pub default_algorithm: Algorithm,
    /// Key length for generated AES secrets: 16, 24 or 32
    pub aes_key_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSettings {
    /// Special character class for generated passwords
    pub special_chars: String,
    pub password_length: usize,
}

impl Default for CipherSettings {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for RandomSettings {
    fn default() -> Self {
        default_random()
    }
}

impl Config {
    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let aes = Algorithm::Aes.spec();
        if !aes.accepts_key_length(self.cipher.aes_key_length) {
            return Err(CoreError::InvalidConfig(format!(
                "cipher.aes_key_length must be {}, got {}",
                aes.describe_key_lengths(),
                self.cipher.aes_key_length
            )));
        }
        if self.random.password_length == 0 {
            return Err(CoreError::InvalidConfig(
                "random.password_length must be at least 1".into(),
            ));
        }
        if self.random.special_chars.is_empty() {
            return Err(CoreError::InvalidConfig(
                "random.special_chars must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `TEXTCRYPT_ALGORITHM` replaces `cipher.default_algorithm`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(name) = std::env::var(ALGORITHM_ENV) {
            self.cipher.default_algorithm = name.parse()?;
        }
        Ok(())
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process; falls back to defaults if the file is missing
///
/// A file that exists but does not parse or validate is an error, not a
/// silent fallback.
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        debug!(path = %config_path, "loading configuration");
        Config::from_path(&config_path)?
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };
    conf.apply_env_overrides()?;

    Ok(CONFIG.get_or_init(|| conf))
}
