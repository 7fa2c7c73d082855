//! Skills Section
//!
//! Skill categories, then the project showcase, both under the `skills`
//! anchor. "View Projects" scrolls past them to the `projects` band.

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Section, SectionHeading, SectionTone};

use crate::components::ProjectCard;
use crate::context::{use_content, use_i18n};

#[component]
pub fn SkillsSection() -> Element {
    let i18n = use_i18n();
    let content = use_content();
    let skills = &content.skills;

    rsx! {
        Section { tone: SectionTone::Darker,
            SectionHeading { title: i18n.t("skills.title") }
            div { class: "skills-grid stagger",
                for category in skills.categories.iter() {
                    div { key: "{category.title}", class: "skill-category",
                        h3 { "{category.title}" }
                        ul {
                            for skill in category.skills.iter() {
                                li { key: "{skill}", "{skill}" }
                            }
                        }
                    }
                }
            }
        }

        Section { id: SectionId::Skills.as_str().to_string(), tone: SectionTone::Dark,
            SectionHeading { title: i18n.t("skills.showcaseTitle") }
            div { class: "project-grid stagger",
                for project in skills.project_showcases.iter() {
                    ProjectCard { key: "{project.id}", project: project.clone() }
                }
            }
        }
    }
}
