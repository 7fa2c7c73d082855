//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use portfolio_core::IconKind;

/// Every icon the portfolio draws
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Sun,
    Moon,
    Menu,
    Close,
    Mail,
    Phone,
    Linkedin,
    Github,
    ExternalLink,
    CircleCheck,
    Download,
    GraduationCap,
    Code,
    Atom,
    ChartLine,
}

impl From<IconKind> for Glyph {
    fn from(kind: IconKind) -> Self {
        match kind {
            IconKind::GraduationCap => Glyph::GraduationCap,
            IconKind::Code => Glyph::Code,
            IconKind::React => Glyph::Atom,
            IconKind::ChartLine => Glyph::ChartLine,
        }
    }
}

impl Glyph {
    /// Path data; shapes other than paths are drawn in [`Icon`]
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Sun => &[
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::Mail => &["m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"],
            Glyph::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
            Glyph::Linkedin => &["M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"],
            Glyph::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Glyph::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Glyph::CircleCheck => &["m9 12 2 2 4-4"],
            Glyph::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            Glyph::GraduationCap => &[
                "M22 10v6M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            Glyph::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Glyph::Atom => &[
                "M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z",
                "M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z",
            ],
            Glyph::ChartLine => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
        }
    }
}

/// Circles and rects that accompany the paths
fn shapes(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Sun => rsx! { circle { cx: "12", cy: "12", r: "4" } },
        Glyph::Mail => rsx! { rect { x: "2", y: "4", width: "20", height: "16", rx: "2" } },
        Glyph::Linkedin => rsx! {
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        Glyph::CircleCheck => rsx! { circle { cx: "12", cy: "12", r: "10" } },
        Glyph::Atom => rsx! { circle { cx: "12", cy: "12", r: "1" } },
        _ => rsx! {},
    }
}

/// Inline Lucide icon
#[component]
pub fn Icon(
    glyph: Glyph,
    #[props(default = 20)] size: u32,
    /// Stroke color; defaults to the surrounding text color
    #[props(default = "currentColor".to_string())]
    color: String,
) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",

            {shapes(glyph)}

            for d in glyph.paths() {
                path { d: *d }
            }
        }
    }
}
