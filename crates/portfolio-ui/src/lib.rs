//! Portfolio UI Components
//!
//! Dioxus building blocks shared by the portfolio sections.
//!
//! ## Design
//!
//! - **Emerald (#10B981)**: primary actions, active navigation, icons
//! - **Surface (#151922)**: cards and form panels on the dark theme
//! - **Border (#374151)**: card and input outlines
//!
//! Every color is a CSS custom property, so the light theme only swaps the
//! variables on the application shell.

pub mod components;

pub use components::*;
