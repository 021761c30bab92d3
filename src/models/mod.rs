// Data models for storage folders, cleanup methods and danger classification

use crate::errors::BloatkillError;
use egui::Color32;
use std::fmt;
use std::str::FromStr;

/// One Windows storage location under review.
/// Carries its presentation colors alongside the reference text.
#[derive(Clone, Debug)]
pub struct FolderEntry {
    /// Unique short identifier, also used as the tab caption
    pub key: &'static str,
    /// Glyph drawn in front of the key on the tab
    pub icon: &'static str,
    /// Accent color for the tab, info card and expanded methods
    pub color: Color32,
    /// Translucent glow drawn around the active tab
    pub glow: Color32,
    /// Human-readable approximate size range
    pub size: &'static str,
    /// Canonical path, display only
    pub location: &'static str,
    /// What the folder is
    pub description: &'static str,
    /// Warning rendered unconditionally under the description
    pub risks: &'static str,
    /// Cleanup techniques in display order
    pub methods: &'static [CleanupMethod],
}

impl FolderEntry {
    /// Returns the method at `index`, if the folder has that many.
    pub fn method(&self, index: usize) -> Option<&CleanupMethod> {
        self.methods.get(index)
    }
}

/// One way to remediate a folder.
#[derive(Clone, Debug)]
pub struct CleanupMethod {
    /// Short name of the technique
    pub label: &'static str,
    /// Literal command text, never parsed or executed
    pub cmd: &'static str,
    /// Caveat shown above the command when expanded
    pub note: &'static str,
    /// Coarse risk tag
    pub danger: Danger,
}

/// Coarse risk classification attached to a cleanup method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Danger {
    /// Read-only or purely informational
    Safe,
    /// Supported cleanup with built-in safety windows
    Low,
    /// Deprecated or partially destructive tooling
    Medium,
    /// Irreversible
    High,
}

impl Danger {
    /// All tags, mildest first.
    pub const ALL: [Danger; 4] = [Danger::Safe, Danger::Low, Danger::Medium, Danger::High];

    /// Lowercase tag as written by content authors.
    pub fn tag(self) -> &'static str {
        match self {
            Danger::Safe => "safe",
            Danger::Low => "low",
            Danger::Medium => "medium",
            Danger::High => "high",
        }
    }
}

impl fmt::Display for Danger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Danger {
    type Err = BloatkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Danger::ALL
            .into_iter()
            .find(|d| d.tag() == s)
            .ok_or_else(|| BloatkillError::UnknownDanger { tag: s.to_string() })
    }
}

/// Badge styling and caption for a danger tag.
#[derive(Clone, Debug, PartialEq)]
pub struct DangerClassification {
    /// Badge fill (translucent variant of the text color)
    pub background: Color32,
    /// Badge outline
    pub border: Color32,
    /// Caption color
    pub text: Color32,
    /// Uppercase caption
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_tags_parse_back() {
        for d in Danger::ALL {
            assert_eq!(d.tag().parse::<Danger>().unwrap(), d);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "critical".parse::<Danger>().unwrap_err();
        assert!(matches!(err, BloatkillError::UnknownDanger { ref tag } if tag == "critical"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("HIGH".parse::<Danger>().is_err());
    }
}
