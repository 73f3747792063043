//! # NEXGlab Locale Crate
//!
//! Language and text-direction state for the portal, plus the static
//! translation tables.
//!
//! - **Locale**: the closed set of supported languages and their direction
//! - **Key**: every translatable string, checked exhaustively per locale
//! - **Store**: per-client locale state hydrated from a preference store
//!
//! ## Usage
//!
//! ```rust
//! use nexglab_locale::{Direction, Key, Locale, LocaleStore, MemoryPreferences};
//!
//! let mut store = LocaleStore::init(MemoryPreferences::default(), Locale::Fr);
//! store.set(Locale::Ar);
//!
//! assert_eq!(store.get().direction, Direction::Rtl);
//! assert_eq!(store.text(Key::Language), "اللغة");
//! assert_eq!(store.translate("no-such-key"), "no-such-key");
//! ```

pub mod keys;
pub mod store;
mod tables;

pub use keys::Key;
pub use store::{
    DocumentAttributes, LocaleState, LocaleStore, MemoryPreferences, PreferenceStore,
    LANGUAGE_KEY,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Fr, Locale::En, Locale::Ar];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Arabic is the only right-to-left locale.
    pub const fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::Fr | Locale::En => Direction::Ltr,
        }
    }

    /// Name of the language written in that language, for the switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::Fr => "Français",
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Locale::Fr => "🇫🇷",
            Locale::En => "🇬🇧",
            Locale::Ar => "🇩🇿",
        }
    }

    pub fn text(self, key: Key) -> &'static str {
        tables::lookup(self, key)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == value)
            .ok_or_else(|| LocaleError::Unsupported(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes_round_trip_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_locale_parsing_is_exact() {
        assert!("FR".parse::<Locale>().is_err());
        assert!(" fr".parse::<Locale>().is_err());
        assert_eq!(
            "de".parse::<Locale>(),
            Err(LocaleError::Unsupported("de".to_string()))
        );
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::Fr.direction(), Direction::Ltr);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
    }

    #[test]
    fn test_default_locale_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
    }
}
