//! Preference session: the single owner of theme and language state.
//!
//! The UI holds one `PreferenceSession` and routes every theme or language
//! change through it, so the in-memory value and the persisted value move
//! together.

use tracing::{debug, info};

use crate::i18n::Localizer;
use crate::preferences::{PreferenceStore, Theme};

pub struct PreferenceSession {
    store: PreferenceStore,
    theme: Theme,
    localizer: Localizer,
}

impl PreferenceSession {
    /// Restore persisted preferences into a new session.
    ///
    /// Stored values outside the supported sets fall back to the defaults.
    pub fn open(store: PreferenceStore, mut localizer: Localizer) -> Self {
        let theme = store.load_theme();

        let codes: Vec<String> = localizer.language_codes().map(str::to_string).collect();
        let allowed: Vec<&str> = codes.iter().map(String::as_str).collect();
        let language = store.load_language(&allowed, localizer.default_language());
        localizer.set_language(&language);

        info!(theme = %theme, language = %language, "Restored preferences");

        Self {
            store,
            theme,
            localizer,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change the theme, persisting it if it differs from the current one
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.store.save_theme(theme);
    }

    /// Flip between dark and light, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggle());
        self.theme
    }

    /// Active language code
    pub fn language(&self) -> &str {
        self.localizer.language()
    }

    /// Switch language.
    ///
    /// Unsupported codes leave the session untouched and return `false`.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.localizer.is_supported(code) {
            debug!(code, "Ignoring unsupported language");
            return false;
        }
        if self.localizer.language() != code {
            self.localizer.set_language(code);
            self.store.save_language(code);
        }
        true
    }

    /// Translate a key in the active language
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.localizer.t(key)
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FileStore, MemoryStore, LANGUAGE_KEY, THEME_KEY};

    #[test]
    fn unsupported_stored_language_resolves_to_default() {
        let store = PreferenceStore::new(MemoryStore::new().with_entry(LANGUAGE_KEY, "fr"));
        let session = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert_eq!(session.language(), "en");
    }

    #[test]
    fn stored_preferences_are_restored() {
        let store = PreferenceStore::new(
            MemoryStore::new()
                .with_entry(LANGUAGE_KEY, "am")
                .with_entry(THEME_KEY, "light"),
        );
        let session = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert_eq!(session.language(), "am");
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.t("nav.about"), "ስለ እኔ");
    }

    #[test]
    fn language_change_is_immediately_visible() {
        let store = PreferenceStore::new(MemoryStore::new());
        let mut session = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert_eq!(session.t("nav.contact"), "Contact");

        assert!(session.set_language("am"));
        assert_eq!(session.t("nav.contact"), "አግኙኝ");

        assert!(!session.set_language("fr"));
        assert_eq!(session.language(), "am");
    }

    #[test]
    fn unavailable_storage_still_works_in_memory() {
        let store = PreferenceStore::new(MemoryStore::unavailable());
        let mut session = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert!(session.set_language("am"));
        assert_eq!(session.language(), "am");
    }

    #[test]
    fn language_choice_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(FileStore::in_dir(dir.path()));
        let mut session = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert!(session.set_language("am"));
        drop(session);

        let store = PreferenceStore::new(FileStore::in_dir(dir.path()));
        let reopened = PreferenceSession::open(store, Localizer::builtin().unwrap());
        assert_eq!(reopened.language(), "am");
    }
}
