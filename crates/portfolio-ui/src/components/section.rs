//! Section scaffolding
//!
//! Every page section shares the same padding, width cap and heading style.

use dioxus::prelude::*;

/// Background shade of a section band
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SectionTone {
    #[default]
    Dark,
    Darker,
}

impl SectionTone {
    pub fn class(&self) -> &'static str {
        match self {
            SectionTone::Dark => "section-dark",
            SectionTone::Darker => "section-darker",
        }
    }
}

/// Full-width section band with a centered content column
#[component]
pub fn Section(
    /// Anchor id; sections without one are not navigation targets
    #[props(default)]
    id: Option<String>,
    #[props(default)]
    tone: SectionTone,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: id.clone(),
            class: "page-section {tone.class()}",
            div { class: "section-inner", {children} }
        }
    }
}

/// Section title that fades in on first render
#[component]
pub fn SectionHeading(title: String) -> Element {
    rsx! {
        h2 { class: "section-heading reveal", "{title}" }
    }
}
