//! Hero Section
//!
//! Full-height greeting with a rotating project screenshot behind a dim
//! overlay, the profile photo and the three calls to action.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{next_index, SectionId, BACKGROUND_ROTATION_SECS};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::{use_content, use_i18n};
use crate::external::open_or_log;
use crate::scroll_bridge::scroll_to_section;

/// Band the "View Projects" action scrolls to
const VIEW_PROJECTS_TARGET: SectionId = SectionId::Projects;

/// Band the "Contact Me" action scrolls to
const CONTACT_TARGET: SectionId = SectionId::Contact;

#[component]
pub fn HeroSection() -> Element {
    let i18n = use_i18n();
    let content = use_content();
    let personal = content.personal.clone();
    let background_count = personal.hero_backgrounds.len();
    let mut background = use_signal(|| 0usize);

    // Rotate the background; the task ends with the component
    use_future(move || async move {
        if background_count < 2 {
            return;
        }
        loop {
            tokio::time::sleep(Duration::from_secs(BACKGROUND_ROTATION_SECS)).await;
            let next = next_index(*background.peek(), background_count);
            background.set(next);
        }
    });

    let cv_url = personal.cv_url.clone();
    let background_url = personal.hero_backgrounds.get(background()).cloned();

    rsx! {
        section { id: SectionId::Hero.as_str(), class: "hero",
            if let Some(url) = background_url {
                // Keyed so each image change replays the fade
                div {
                    key: "{url}",
                    class: "hero-background",
                    style: "background-image: url('{url}');",
                }
            }
            div { class: "hero-overlay" }

            div { class: "hero-content",
                div { class: "hero-photo",
                    img { src: "{personal.photo_url}", alt: "{personal.name}" }
                }

                div { class: "hero-text stagger",
                    h2 { class: "hero-greeting", {i18n.t("hero.greeting")} }
                    h1 { class: "hero-name", {i18n.t_or("hero.name", &personal.name)} }
                    p { class: "hero-title", {i18n.t_or("hero.title", &personal.title)} }
                    p { class: "hero-location", {i18n.t_or("hero.location", &personal.location)} }

                    div { class: "hero-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| scroll_to_section(VIEW_PROJECTS_TARGET),
                            {i18n.t("hero.viewProjects")}
                        }
                        Button {
                            variant: ButtonVariant::Glass,
                            onclick: move |_| open_or_log(&cv_url),
                            {i18n.t("hero.downloadCV")}
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| scroll_to_section(CONTACT_TARGET),
                            {i18n.t("hero.contactMe")}
                        }
                    }
                }
            }
        }
    }
}
