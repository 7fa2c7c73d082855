//! Shared state for the portfolio components.
//!
//! The App component provides the preference session and the portfolio
//! content; everything below it reads them through the hooks here.
//!
//! ## Usage
//!
//! ```ignore
//! let i18n = use_i18n();
//! let mut theme = use_theme();
//!
//! rsx! {
//!     button { onclick: move |_| theme.toggle(), "{i18n.t(\"theme.toLight\")}" }
//! }
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    FileStore, Localizer, MemoryStore, PortfolioData, PreferenceSession, PreferenceStore,
    Theme, DEFAULT_LANGUAGE,
};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the preference session backing the whole window.
///
/// Preferences go to `preferences.json` in the data directory unless the
/// app was started with `--ephemeral`.
pub fn open_session() -> PreferenceSession {
    let store = if crate::is_ephemeral() {
        PreferenceStore::new(MemoryStore::new())
    } else {
        PreferenceStore::new(FileStore::in_dir(get_data_dir()))
    };

    let localizer = Localizer::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in translations unusable, showing raw keys");
        Localizer::untranslated(DEFAULT_LANGUAGE)
    });

    PreferenceSession::open(store, localizer)
}

/// Shared content type for context.
pub type SharedContent = Rc<PortfolioData>;

/// Load the content chosen at startup.
pub fn load_content() -> SharedContent {
    Rc::new(crate::get_content())
}

/// Hook to access the preference session.
pub fn use_session() -> Signal<PreferenceSession> {
    use_context::<Signal<PreferenceSession>>()
}

/// Hook to access the portfolio content.
pub fn use_content() -> SharedContent {
    use_context::<SharedContent>()
}

/// Translation handle bound to the session.
///
/// Reading through it subscribes the calling component, so text re-renders
/// when the language changes.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    session: Signal<PreferenceSession>,
}

impl I18n {
    /// Translate a key in the active language
    pub fn t(&self, key: &str) -> String {
        self.session.read().t(key).to_string()
    }

    /// Translate a key, using `fallback` when no table has it
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.session
            .read()
            .localizer()
            .lookup(key)
            .unwrap_or(fallback)
            .to_string()
    }

    /// Active language code
    pub fn language(&self) -> String {
        self.session.read().language().to_string()
    }

    /// Switch language; unsupported codes are ignored
    pub fn set_language(&mut self, code: &str) -> bool {
        self.session.write().set_language(code)
    }

    /// `(code, label)` for every supported language, in table order
    pub fn languages(&self) -> Vec<(String, String)> {
        self.session
            .read()
            .localizer()
            .locales()
            .iter()
            .map(|l| (l.code.clone(), format!("{} {}", l.flag, l.name)))
            .collect()
    }
}

/// Hook to access translations.
pub fn use_i18n() -> I18n {
    I18n {
        session: use_session(),
    }
}

/// Theme handle bound to the session.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeHandle {
    session: Signal<PreferenceSession>,
}

impl ThemeHandle {
    pub fn get(&self) -> Theme {
        self.session.read().theme()
    }

    /// Flip between dark and light, persisting the result
    pub fn toggle(&mut self) -> Theme {
        let theme = self.session.write().toggle_theme();
        tracing::debug!(theme = %theme, "Theme toggled");
        theme
    }
}

/// Hook to access the active theme.
pub fn use_theme() -> ThemeHandle {
    ThemeHandle {
        session: use_session(),
    }
}
