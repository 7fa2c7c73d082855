//! About Section
//!
//! Bio paragraph followed by the grid of info cards.

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Section, SectionHeading, SectionTone};

use crate::components::InfoCard;
use crate::context::{use_content, use_i18n};

#[component]
pub fn AboutSection() -> Element {
    let i18n = use_i18n();
    let content = use_content();
    let about = &content.about;

    rsx! {
        Section { id: SectionId::About.as_str().to_string(), tone: SectionTone::Dark,
            SectionHeading { title: i18n.t("about.title") }
            p { class: "about-bio reveal", {i18n.t_or("about.bio", &about.bio)} }
            div { class: "card-grid stagger",
                for card in about.info_cards.iter() {
                    InfoCard { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}
