//! Icon kinds referenced by portfolio content.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known icons for info cards.
///
/// Content refers to icons by tag; unknown tags resolve to [`IconKind::Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconKind {
    GraduationCap,
    #[default]
    Code,
    React,
    ChartLine,
}

impl IconKind {
    /// Resolve a content tag. Both `graduation-cap` and `FaGraduationCap`
    /// spellings are accepted.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.strip_prefix("Fa").unwrap_or(tag);
        let normalized: String = tag
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "graduationcap" => IconKind::GraduationCap,
            "code" => IconKind::Code,
            "react" => IconKind::React,
            "chartline" => IconKind::ChartLine,
            _ => IconKind::default(),
        }
    }

    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            IconKind::GraduationCap => "graduation-cap",
            IconKind::Code => "code",
            IconKind::React => "react",
            IconKind::ChartLine => "chart-line",
        }
    }
}

impl Serialize for IconKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for IconKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(IconKind::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tags() {
        assert_eq!(IconKind::from_tag("FaGraduationCap"), IconKind::GraduationCap);
        assert_eq!(IconKind::from_tag("graduation-cap"), IconKind::GraduationCap);
        assert_eq!(IconKind::from_tag("FaReact"), IconKind::React);
        assert_eq!(IconKind::from_tag("chart_line"), IconKind::ChartLine);
    }

    #[test]
    fn unknown_tag_falls_back_to_code() {
        assert_eq!(IconKind::from_tag("FaRocket"), IconKind::Code);
        assert_eq!(IconKind::from_tag(""), IconKind::Code);
    }

    #[test]
    fn serde_uses_canonical_tag() {
        let json = serde_json::to_string(&IconKind::ChartLine).unwrap();
        assert_eq!(json, "\"chart-line\"");
        let back: IconKind = serde_json::from_str("\"FaChartLine\"").unwrap();
        assert_eq!(back, IconKind::ChartLine);
    }
}
