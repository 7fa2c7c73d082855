//! Dark/light switch for the navigation bar.

use dioxus::prelude::*;
use portfolio_core::Theme;
use portfolio_ui::IconButton;

use crate::components::icons::{Glyph, Icon};
use crate::context::{use_i18n, use_theme};
use crate::theme::colors;

/// Sun while dark (switch to light), moon while light (switch to dark)
#[component]
pub fn ThemeToggle() -> Element {
    let i18n = use_i18n();
    let mut theme = use_theme();

    let (glyph, color, label) = match theme.get() {
        Theme::Dark => (Glyph::Sun, colors::SUN, i18n.t("theme.toLight")),
        Theme::Light => (Glyph::Moon, colors::MOON, i18n.t("theme.toDark")),
    };

    rsx! {
        IconButton {
            aria_label: label,
            onclick: move |_| {
                theme.toggle();
            },
            Icon { glyph, color: color.to_string() }
        }
    }
}
