//! The single scrolling page.

use dioxus::prelude::*;

use crate::components::sections::{
    AboutSection, ContactSection, ExperienceSection, HeroSection, SkillsSection,
};
use crate::components::NavBar;

#[component]
pub fn Home() -> Element {
    rsx! {
        NavBar {}
        main {
            HeroSection {}
            AboutSection {}
            SkillsSection {}
            ExperienceSection {}
            ContactSection {}
        }
    }
}
