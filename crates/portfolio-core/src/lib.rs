//! Portfolio Core Library
//!
//! The logic behind the single-page portfolio: everything that is not
//! markup or animation.
//!
//! ## Overview
//!
//! - **Preferences**: theme and language persisted best-effort to a
//!   key-value store, falling back to defaults on any failure
//! - **Localization**: dotted-key lookup across a fixed language set with
//!   default-language and raw-key fallback
//! - **Scroll tracking**: maps the scroll offset to the highlighted
//!   navigation section
//! - **Validation**: per-field contact form checks gating the `mailto:`
//!   dispatch
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{FileStore, Localizer, PreferenceSession, PreferenceStore};
//!
//! let store = PreferenceStore::new(FileStore::in_dir("~/.local/share/portfolio"));
//! let mut session = PreferenceSession::open(store, Localizer::builtin()?);
//!
//! session.set_language("am");
//! println!("{}", session.t("hero.viewProjects"));
//! ```

pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod preferences;
pub mod scroll;
pub mod session;
pub mod validation;

// Re-exports
pub use contact::{encode_uri_component, MailtoMessage};
pub use content::{
    display_url, next_index, AboutInfo, ContactInfo, InfoCard, PersonalInfo, PortfolioData,
    ProjectShowcase, ProjectsInfo, SkillCategory, SkillsInfo, BACKGROUND_ROTATION_SECS,
};
pub use error::{PortfolioError, PortfolioResult};
pub use i18n::{Locale, Localizer, DEFAULT_LANGUAGE};
pub use icons::IconKind;
pub use preferences::{
    FileStore, KeyValueStore, MemoryStore, PreferenceStore, Theme, LANGUAGE_KEY, THEME_KEY,
};
pub use scroll::{section_at, ScrollSample, ScrollTracker, SectionBounds, SectionId, HEADER_OFFSET};
pub use session::PreferenceSession;
pub use validation::{validate, ContactForm, FormField, ValidationError, ValidationResult};
