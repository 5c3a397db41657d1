//! Descriptive records attached to routes for help output.

use serde::Deserialize;

/// Help metadata for one route.
///
/// `about` and `description` stay `None` when nothing was exported; the
/// presenter decides how to render their absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Last route segment, or the joined program name for the "self" record.
    #[serde(skip)]
    pub name: String,
    /// Longer text shown under the usage line of a group.
    pub about: Option<String>,
    /// One-line summary shown next to the name in a parent's listing.
    pub description: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the name, keeping every exported field.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
