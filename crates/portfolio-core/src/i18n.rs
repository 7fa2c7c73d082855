//! Localization tables and key lookup.
//!
//! Tables are authored as nested JSON and flattened into dotted keys, so
//! `{"hero": {"title": "..."}}` is looked up as `hero.title`.
//!
//! Lookup never fails: the active language is consulted first, then the
//! default language, and finally the key itself is returned so a missing
//! translation shows up on screen instead of breaking the render.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::error::{PortfolioError, PortfolioResult};

const EN_TABLE: &str = include_str!("../locales/en.json");
const AM_TABLE: &str = include_str!("../locales/am.json");

/// Default language of the built-in tables
pub const DEFAULT_LANGUAGE: &str = "en";

/// One language: display metadata plus its flat key table
#[derive(Debug, Clone)]
pub struct Locale {
    /// Language code, e.g. `en`
    pub code: String,
    /// Native display name, e.g. `English`
    pub name: String,
    /// Flag shown next to the name in the selector
    pub flag: String,
    table: HashMap<String, String>,
}

impl Locale {
    /// Build a locale from an already-flat table
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        flag: impl Into<String>,
        table: HashMap<String, String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag: flag.into(),
            table,
        }
    }

    /// Build a locale from a nested JSON object
    pub fn from_json(
        code: impl Into<String>,
        name: impl Into<String>,
        flag: impl Into<String>,
        json: &str,
    ) -> PortfolioResult<Self> {
        let code = code.into();
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(PortfolioError::Locale(format!(
                "table for '{}' must be a JSON object",
                code
            )));
        }

        let mut table = HashMap::new();
        flatten_into(&mut table, String::new(), &value);
        Ok(Self::new(code, name, flag, table))
    }

    /// Translation for `key` in this language only
    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    /// Number of keys in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no keys
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate the table's keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

fn flatten_into(table: &mut HashMap<String, String>, prefix: String, value: &Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(table, join(key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(table, join(&index.to_string()), child);
            }
        }
        Value::String(s) => {
            table.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            table.insert(prefix, other.to_string());
        }
    }
}

/// Lookup over a fixed set of languages with one active language.
#[derive(Debug, Clone)]
pub struct Localizer {
    locales: Vec<Locale>,
    default: usize,
    active: usize,
}

impl Localizer {
    /// Create a localizer over `locales`.
    ///
    /// `default_code` must name one of them; it starts out active and is the
    /// fallback for keys the active language lacks.
    pub fn new(locales: Vec<Locale>, default_code: &str) -> PortfolioResult<Self> {
        let default = locales
            .iter()
            .position(|l| l.code == default_code)
            .ok_or_else(|| {
                PortfolioError::Locale(format!(
                    "default language '{}' is not among the supported languages",
                    default_code
                ))
            })?;

        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].iter().any(|l| l.code == locale.code) {
                return Err(PortfolioError::Locale(format!(
                    "language '{}' declared twice",
                    locale.code
                )));
            }
        }

        Ok(Self {
            locales,
            default,
            active: default,
        })
    }

    /// English and Amharic tables shipped with the crate, English default
    pub fn builtin() -> PortfolioResult<Self> {
        let locales = vec![
            Locale::from_json("en", "English", "\u{1F1EC}\u{1F1E7}", EN_TABLE)?,
            Locale::from_json("am", "አማርኛ", "\u{1F1EA}\u{1F1F9}", AM_TABLE)?,
        ];
        Self::new(locales, DEFAULT_LANGUAGE)
    }

    /// Single empty language; every lookup falls through to the raw key
    pub fn untranslated(code: &str) -> Self {
        Self {
            locales: vec![Locale::new(code, code, "", HashMap::new())],
            default: 0,
            active: 0,
        }
    }

    /// Translate `key`: active language, then default language, then the key
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// Translate `key` without the raw-key fallback
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.locales[self.active]
            .get(key)
            .or_else(|| self.locales[self.default].get(key))
    }

    /// Active language code
    pub fn language(&self) -> &str {
        &self.locales[self.active].code
    }

    /// Default language code
    pub fn default_language(&self) -> &str {
        &self.locales[self.default].code
    }

    /// Whether `code` is one of the supported languages
    pub fn is_supported(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l.code == code)
    }

    /// Supported languages in declaration order
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Supported language codes in declaration order
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    /// Switch the active language.
    ///
    /// Unsupported codes are ignored and `false` is returned.
    pub fn set_language(&mut self, code: &str) -> bool {
        match self.locales.iter().position(|l| l.code == code) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                debug!(code, "Ignoring unsupported language");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn localizer() -> Localizer {
        let en = Locale::new(
            "en",
            "English",
            "",
            table(&[("hero.title", "Developer"), ("nav.about", "About")]),
        );
        let am = Locale::new("am", "አማርኛ", "", table(&[("hero.title", "ገንቢ")]));
        Localizer::new(vec![en, am], "en").unwrap()
    }

    #[test]
    fn lookup_uses_active_then_default_then_key() {
        let mut l = localizer();
        assert!(l.set_language("am"));

        assert_eq!(l.t("hero.title"), "ገንቢ");
        assert_eq!(l.t("nav.about"), "About");
        assert_eq!(l.t("nav.missing"), "nav.missing");
        assert_eq!(l.lookup("nav.missing"), None);
    }

    #[test]
    fn unsupported_language_is_ignored() {
        let mut l = localizer();
        l.set_language("am");
        assert!(!l.set_language("fr"));
        assert!(!l.set_language(""));
        assert!(!l.set_language("EN"));
        assert_eq!(l.language(), "am");
    }

    #[test]
    fn default_must_be_supported() {
        let en = Locale::new("en", "English", "", HashMap::new());
        assert!(matches!(
            Localizer::new(vec![en], "am"),
            Err(PortfolioError::Locale(_))
        ));
    }

    #[test]
    fn duplicate_language_rejected() {
        let a = Locale::new("en", "English", "", HashMap::new());
        let b = Locale::new("en", "English", "", HashMap::new());
        assert!(Localizer::new(vec![a, b], "en").is_err());
    }

    #[test]
    fn nested_json_is_flattened() {
        let locale = Locale::from_json(
            "en",
            "English",
            "",
            r#"{"a": {"b": {"c": "deep"}}, "n": 3, "list": ["x", "y"], "gone": null}"#,
        )
        .unwrap();

        assert_eq!(locale.get("a.b.c"), Some("deep"));
        assert_eq!(locale.get("n"), Some("3"));
        assert_eq!(locale.get("list.1"), Some("y"));
        assert_eq!(locale.get("gone"), None);
        assert_eq!(locale.len(), 4);
    }

    #[test]
    fn untranslated_returns_keys() {
        let l = Localizer::untranslated("en");
        assert_eq!(l.language(), "en");
        assert_eq!(l.t("nav.home"), "nav.home");
        assert!(l.lookup("nav.home").is_none());
    }

    #[test]
    fn non_object_table_rejected() {
        assert!(Locale::from_json("en", "English", "", "[1, 2]").is_err());
        assert!(Locale::from_json("en", "English", "", "not json").is_err());
    }

    #[test]
    fn builtin_tables_cover_the_same_keys() {
        let l = Localizer::builtin().unwrap();
        let codes: Vec<&str> = l.language_codes().collect();
        assert_eq!(codes, ["en", "am"]);
        assert_eq!(l.language(), "en");

        let en = &l.locales()[0];
        let am = &l.locales()[1];
        for key in en.keys() {
            assert!(am.get(key).is_some(), "Amharic table is missing '{}'", key);
        }
        assert_eq!(en.len(), am.len());
    }
}
