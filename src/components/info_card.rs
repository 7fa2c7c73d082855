//! About-section fact card.

use dioxus::prelude::*;
use portfolio_core::InfoCard as InfoCardData;

use crate::components::icons::{Glyph, Icon};
use crate::context::use_i18n;

/// Icon, title and one-line fact; text falls back to the content literal
/// when the active language has no entry for the card
#[component]
pub fn InfoCard(card: InfoCardData) -> Element {
    let i18n = use_i18n();
    let title = i18n.t_or(&card.title_key(), &card.title);
    let content = i18n.t_or(&card.content_key(), &card.content);

    rsx! {
        div { class: "info-card",
            div { class: "info-card-icon",
                Icon { glyph: Glyph::from(card.icon), size: 24 }
            }
            div {
                h3 { class: "info-card-title", "{title}" }
                p { class: "info-card-content", "{content}" }
            }
        }
    }
}
