// src/random/alphabet.rs
//! Character classes and the alphabet assembled from them

use crate::consts::{
    DEFAULT_SPECIAL_CHARS, LOWER_CHARS, MAX_ALPHABET_LEN, NUMERIC_CHARS, UPPER_CHARS,
};
use crate::error::RandomError;

use super::Result;

/// Which character classes go into a generated string.
///
/// `special_chars` replaces the default special set; it is ignored when
/// `special` is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub numeric: bool,
    pub special: bool,
    pub special_chars: Option<String>,
}

impl CharClasses {
    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub const fn alphanumeric() -> Self {
        Self::new(true, true, true, false)
    }

    pub const fn alphanumeric_upper() -> Self {
        Self::new(true, false, true, false)
    }

    pub const fn alphanumeric_lower() -> Self {
        Self::new(false, true, true, false)
    }

    pub const fn numeric() -> Self {
        Self::new(false, false, true, false)
    }

    pub const fn new(upper: bool, lower: bool, numeric: bool, special: bool) -> Self {
        Self {
            upper,
            lower,
            numeric,
            special,
            special_chars: None,
        }
    }

    pub fn with_special_chars(mut self, chars: impl Into<String>) -> Self {
        self.special_chars = Some(chars.into());
        self
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::all()
    }
}

/// Ordered symbols a random byte is mapped onto.
///
/// Duplicates are kept as given; a duplicated symbol is simply twice as likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Classes are appended in order: upper, lower, numeric, special.
    pub fn from_classes(classes: &CharClasses) -> Result<Self> {
        let mut chars: Vec<char> = Vec::new();
        if classes.upper {
            chars.extend(UPPER_CHARS.chars());
        }
        if classes.lower {
            chars.extend(LOWER_CHARS.chars());
        }
        if classes.numeric {
            chars.extend(NUMERIC_CHARS.chars());
        }
        if classes.special {
            let special = classes
                .special_chars
                .as_deref()
                .unwrap_or(DEFAULT_SPECIAL_CHARS);
            chars.extend(special.chars());
        }

        if chars.is_empty() {
            return Err(RandomError::Configuration(
                "no characters available: enable at least one non-empty character class".into(),
            ));
        }
        if chars.len() > MAX_ALPHABET_LEN {
            return Err(RandomError::Configuration(format!(
                "alphabet has {} characters, at most {MAX_ALPHABET_LEN} are supported",
                chars.len()
            )));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Largest byte value that can be reduced modulo `len()` without bias.
    ///
    /// Bytes above it must be rejected: the values `0..=max` cover every
    /// symbol the same number of times.
    pub fn max_unbiased_byte(&self) -> u8 {
        let len = self.chars.len();
        // len is in 1..=256, so the result is in 0..=255
        (255 - (256 % len)) as u8
    }

    pub fn char_for(&self, byte: u8) -> char {
        self.chars[usize::from(byte) % self.chars.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_assembled_in_order() {
        let alphabet = Alphabet::from_classes(&CharClasses::all()).unwrap();
        let s: String = alphabet.as_chars().iter().collect();
        assert_eq!(
            s,
            format!("{UPPER_CHARS}{LOWER_CHARS}{NUMERIC_CHARS}{DEFAULT_SPECIAL_CHARS}")
        );
    }

    #[test]
    fn max_unbiased_byte_matches_alphabet_size() {
        let alnum = Alphabet::from_classes(&CharClasses::alphanumeric()).unwrap();
        assert_eq!(alnum.len(), 62);
        assert_eq!(alnum.max_unbiased_byte(), 247); // 248 = 4 * 62

        let digits = Alphabet::from_classes(&CharClasses::numeric()).unwrap();
        assert_eq!(digits.max_unbiased_byte(), 249); // 250 = 25 * 10

        let single = Alphabet::from_classes(
            &CharClasses::new(false, false, false, true).with_special_chars("x"),
        )
        .unwrap();
        assert_eq!(single.max_unbiased_byte(), 255);
    }

    #[test]
    fn special_override_ignored_when_class_disabled() {
        let classes = CharClasses::numeric().with_special_chars("~");
        let alphabet = Alphabet::from_classes(&classes).unwrap();
        assert!(!alphabet.as_chars().contains(&'~'));
    }

    #[test]
    fn empty_alphabet_is_a_configuration_error() {
        let none = CharClasses::new(false, false, false, false);
        assert!(matches!(
            Alphabet::from_classes(&none),
            Err(RandomError::Configuration(_))
        ));

        let empty_special = CharClasses::new(false, false, false, true).with_special_chars("");
        assert!(matches!(
            Alphabet::from_classes(&empty_special),
            Err(RandomError::Configuration(_))
        ));
    }

    #[test]
    fn oversized_alphabet_is_rejected() {
        let huge: String = ('\u{100}'..'\u{300}').collect();
        let classes = CharClasses::new(false, false, false, true).with_special_chars(huge);
        assert!(matches!(
            Alphabet::from_classes(&classes),
            Err(RandomError::Configuration(_))
        ));
    }
}
