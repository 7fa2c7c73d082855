//! Project showcase card with demo and repository links.

use dioxus::prelude::*;
use portfolio_core::ProjectShowcase;
use portfolio_ui::{Button, ButtonVariant};

use crate::components::icons::{Glyph, Icon};
use crate::context::use_i18n;
use crate::external::open_or_log;

#[component]
pub fn ProjectCard(project: ProjectShowcase) -> Element {
    let i18n = use_i18n();
    let stack = project.tech_stack.join(", ");
    let demo_url = project.live_demo_url.clone();
    let repo_url = project.github_url.clone();

    rsx! {
        article { class: "project-card",
            div { class: "project-image",
                img {
                    src: "{project.image_url}",
                    alt: "{project.title}",
                    loading: "lazy",
                }
            }

            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                p { class: "project-tech",
                    strong { {i18n.t("projects.tech")} }
                    " {stack}"
                }

                div { class: "project-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| open_or_log(&demo_url),
                        Icon { glyph: Glyph::ExternalLink, size: 14 }
                        {i18n.t("projects.liveDemo")}
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| open_or_log(&repo_url),
                        Icon { glyph: Glyph::Github, size: 16 }
                        {i18n.t("projects.github")}
                    }
                }
            }
        }
    }
}
