//! Navigation Bar Component
//!
//! Desktop: logo, section links, theme toggle and language selector
//! Mobile: logo, theme toggle and a menu button opening a stacked menu

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::IconButton;

use crate::components::icons::{Glyph, Icon};
use crate::components::{LanguageSelector, ThemeToggle};
use crate::context::use_i18n;
use crate::scroll_bridge::{jump_to_section, use_active_section};

/// Brand mark at the left of the bar
const LOGO: &str = "M zeek";

/// CSS class for a menu entry
fn link_class(id: SectionId, active: SectionId) -> &'static str {
    if id == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn NavBar() -> Element {
    let i18n = use_i18n();
    let tracker = use_active_section();
    let mut menu_open = use_signal(|| false);

    let mut navigate = move |id: SectionId| {
        jump_to_section(tracker, id);
        menu_open.set(false);
    };

    let current = tracker.read().active();
    let home_label = i18n.t("nav.home");
    let menu_class = if menu_open() { "mobile-menu open" } else { "mobile-menu" };

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                // Logo returns to the top
                button {
                    class: "nav-logo",
                    r#type: "button",
                    title: "{home_label}",
                    onclick: move |_| navigate(SectionId::Hero),
                    "{LOGO}"
                }

                // Desktop menu
                div { class: "nav-links",
                    for id in SectionId::MENU {
                        button {
                            key: "{id}",
                            class: link_class(id, current),
                            r#type: "button",
                            onclick: move |_| navigate(id),
                            {i18n.t(id.nav_key())}
                        }
                    }

                    div { class: "nav-tools",
                        ThemeToggle {}
                        LanguageSelector {}
                    }
                }

                // Mobile toolbar
                div { class: "nav-mobile-tools",
                    ThemeToggle {}
                    IconButton {
                        aria_label: i18n.t("nav.toggleMenu"),
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon { glyph: Glyph::Close, size: 24 }
                        } else {
                            Icon { glyph: Glyph::Menu, size: 24 }
                        }
                    }
                }
            }

            // Mobile menu (hidden on desktop via CSS)
            div { class: "{menu_class}",
                for id in SectionId::MENU {
                    button {
                        key: "{id}",
                        class: link_class(id, current),
                        r#type: "button",
                        onclick: move |_| navigate(id),
                        {i18n.t(id.nav_key())}
                    }
                }
                div { class: "nav-tools",
                    LanguageSelector {}
                }
            }
        }
    }
}
