//! Experience Section
//!
//! Accomplishment list under the `projects` anchor.

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Section, SectionHeading, SectionTone};

use crate::components::icons::{Glyph, Icon};
use crate::context::{use_content, use_i18n};

#[component]
pub fn ExperienceSection() -> Element {
    let i18n = use_i18n();
    let content = use_content();

    rsx! {
        Section { id: SectionId::Projects.as_str().to_string(), tone: SectionTone::Darker,
            SectionHeading { title: i18n.t("projects.title") }
            ul { class: "accomplishments stagger",
                for item in content.projects.accomplishments.iter() {
                    li { key: "{item}", class: "accomplishment",
                        Icon { glyph: Glyph::CircleCheck, size: 20 }
                        span { "{item}" }
                    }
                }
            }
        }
    }
}
