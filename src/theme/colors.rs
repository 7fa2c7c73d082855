//! Color constants for inline SVG fills.
//!
//! Everything else reads the CSS custom properties in `styles.rs`.

/// Sun icon shown while the dark theme is active
pub const SUN: &str = "#FACC15";

/// Moon icon shown while the light theme is active
pub const MOON: &str = "#8B5CF6";
