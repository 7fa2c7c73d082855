//! UI Components for the portfolio.
//!
//! Generic buttons, inputs and section scaffolding live in `portfolio-ui`;
//! these are the pieces that know about the session and the content.

pub mod icons;
mod info_card;
mod language_selector;
mod nav_bar;
mod project_card;
pub mod sections;
mod theme_toggle;

pub use info_card::InfoCard;
pub use language_selector::LanguageSelector;
pub use nav_bar::NavBar;
pub use project_card::ProjectCard;
pub use theme_toggle::ThemeToggle;
