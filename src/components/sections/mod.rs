//! The five page sections, top to bottom.

mod about;
mod contact;
mod experience;
mod hero;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use skills::SkillsSection;
