//! Per-client locale state.
//!
//! A [`LocaleStore`] is built once per client context from whatever the
//! client persisted earlier, mutated by [`LocaleStore::set`], and read while
//! rendering. Nothing here is process-global.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{Direction, Key, Locale};

/// Storage key under which the chosen locale is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// Client-writable key/value storage the locale is persisted to.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-process preference storage, used by tooling and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// Number of `save` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleState {
    pub locale: Locale,
    pub direction: Direction,
}

impl From<Locale> for LocaleState {
    fn from(locale: Locale) -> Self {
        Self {
            locale,
            direction: locale.direction(),
        }
    }
}

/// `lang` and `dir` of the document root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: Locale,
    pub dir: Direction,
}

impl DocumentAttributes {
    /// Attribute list for the `<html>` start tag.
    pub fn to_html_attrs(&self) -> String {
        format!("lang=\"{}\" dir=\"{}\"", self.lang, self.dir)
    }
}

impl From<LocaleState> for DocumentAttributes {
    fn from(state: LocaleState) -> Self {
        Self {
            lang: state.locale,
            dir: state.direction,
        }
    }
}

pub struct LocaleStore<S> {
    state: LocaleState,
    document: DocumentAttributes,
    persisted: Option<Locale>,
    preferences: S,
}

impl<S: PreferenceStore> LocaleStore<S> {
    /// Build the store, applying the persisted locale when it is one of the
    /// supported codes. Anything else leaves `default` active.
    pub fn init(preferences: S, default: Locale) -> Self {
        let persisted = preferences
            .load(LANGUAGE_KEY)
            .and_then(|saved| match saved.parse::<Locale>() {
                Ok(locale) => Some(locale),
                Err(error) => {
                    debug!(%error, "ignoring persisted locale");
                    None
                }
            });

        let state = LocaleState::from(persisted.unwrap_or(default));

        Self {
            state,
            document: state.into(),
            persisted,
            preferences,
        }
    }

    pub fn get(&self) -> LocaleState {
        self.state
    }

    pub fn locale(&self) -> Locale {
        self.state.locale
    }

    /// Switch locale, persist it, and update the document root attributes.
    ///
    /// Setting the locale that is already active and persisted writes nothing.
    pub fn set(&mut self, locale: Locale) {
        self.state = LocaleState::from(locale);
        self.document = self.state.into();

        if self.persisted != Some(locale) {
            self.preferences.save(LANGUAGE_KEY, locale.code());
            self.persisted = Some(locale);
        }
    }

    pub fn document(&self) -> DocumentAttributes {
        self.document
    }

    pub fn text(&self, key: Key) -> &'static str {
        self.state.locale.text(key)
    }

    /// Look up a key by name. Unknown names come back unchanged.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match key.parse::<Key>() {
            Ok(key) => self.text(key),
            Err(()) => key,
        }
    }

    pub fn preferences(&self) -> &S {
        &self.preferences
    }

    pub fn into_preferences(self) -> S {
        self.preferences
    }
}
