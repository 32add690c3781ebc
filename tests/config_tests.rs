// tests/config_tests.rs
mod common;
use common::*;

use std::io::Write;

use tempfile::NamedTempFile;

use textcrypt::config::{CipherSettings, Config, RandomSettings};
use textcrypt::consts::{ALGORITHM_ENV, DEFAULT_SPECIAL_CHARS};
use textcrypt::{Algorithm, CoreError};

#[test]
fn test_full_document_parses() {
    setup();
    let conf = Config::from_toml_str(
        r#"
        [cipher]
        default_algorithm = "tripledes"
        aes_key_length = 16

        [random]
        special_chars = "!?"
        password_length = 24
        "#,
    )
    .unwrap();

    assert_eq!(
        conf,
        Config {
            cipher: CipherSettings {
                default_algorithm: Algorithm::TripleDes,
                aes_key_length: 16,
            },
            random: RandomSettings {
                special_chars: "!?".into(),
                password_length: 24,
            },
        }
    );
}

#[test]
fn test_missing_keys_take_defaults() {
    let conf = Config::from_toml_str("").unwrap();
    assert_eq!(conf, Config::default());
    assert_eq!(conf.cipher.default_algorithm, Algorithm::Aes);
    assert_eq!(conf.cipher.aes_key_length, 32);
    assert_eq!(conf.random.special_chars, DEFAULT_SPECIAL_CHARS);
    assert_eq!(conf.random.password_length, 16);

    let conf = Config::from_toml_str("[random]\npassword_length = 40\n").unwrap();
    assert_eq!(conf.random.password_length, 40);
    assert_eq!(conf.random.special_chars, DEFAULT_SPECIAL_CHARS);
    assert_eq!(conf.cipher, CipherSettings::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        "[cipher]\naes_key_length = 20\n",
        "[random]\npassword_length = 0\n",
        "[random]\nspecial_chars = \"\"\n",
    ];
    for doc in cases {
        let result = Config::from_toml_str(doc);
        assert!(
            matches!(result, Err(CoreError::InvalidConfig(_))),
            "{doc:?}: {result:?}"
        );
    }
}

#[test]
fn test_malformed_toml_is_rejected() {
    assert!(matches!(
        Config::from_toml_str("[cipher\n"),
        Err(CoreError::Toml(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[cipher]\ndefault_algorithm = \"rot13\"\n"),
        Err(CoreError::Toml(_))
    ));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[cipher]\ndefault_algorithm = \"des\"").unwrap();

    let conf = Config::from_path(file.path()).unwrap();
    assert_eq!(conf.cipher.default_algorithm, Algorithm::Des);

    let missing = file.path().with_extension("does-not-exist");
    assert!(matches!(Config::from_path(missing), Err(CoreError::Io(_))));
}

#[test]
fn test_env_overrides_default_algorithm() {
    let mut conf = Config::default();

    std::env::set_var(ALGORITHM_ENV, "3des");
    conf.apply_env_overrides().unwrap();
    assert_eq!(conf.cipher.default_algorithm, Algorithm::TripleDes);

    std::env::set_var(ALGORITHM_ENV, "blowfish");
    assert!(matches!(
        conf.apply_env_overrides(),
        Err(CoreError::InvalidConfig(_))
    ));

    std::env::remove_var(ALGORITHM_ENV);
    conf.apply_env_overrides().unwrap();
    assert_eq!(conf.cipher.default_algorithm, Algorithm::TripleDes);
}

#[test]
fn test_algorithm_names_parse() {
    for (name, expected) in [
        ("DES", Algorithm::Des),
        ("TripleDES", Algorithm::TripleDes),
        ("triple-des", Algorithm::TripleDes),
        ("tdes", Algorithm::TripleDes),
        ("Aes", Algorithm::Aes),
    ] {
        assert_eq!(name.parse::<Algorithm>().unwrap(), expected, "{name}");
    }
}
