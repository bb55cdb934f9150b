//! Resource manifest consumed once by the asset loader at startup.
//!
//! A manifest is an ordered list of batches, each an ordered list of entries.
//! Entries are either named (`{ "name": "cat", "location": "img/cat.png" }`)
//! or a bare location string, whose name is then the location itself.
//! Locations are relative to the configured asset root.
//!
//! ```ignore
//! let manifest = ResourceManifest::new()
//!     .with_batch([ManifestEntry::named("cat", "img/cat.png")])
//!     .with_batch([ManifestEntry::named("spritesheet", "img/spritesheet.json")]);
//! ```

use serde::Deserialize;

/// One resource to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Named {
        name: String,
        #[serde(alias = "url")]
        location: String,
    },
    Location(String),
}

impl ManifestEntry {
    pub fn named(name: impl Into<String>, location: impl Into<String>) -> Self {
        ManifestEntry::Named {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn location(location: impl Into<String>) -> Self {
        ManifestEntry::Location(location.into())
    }

    /// Key the resource is stored under once loaded.
    pub fn name(&self) -> &str {
        match self {
            ManifestEntry::Named { name, .. } => name,
            ManifestEntry::Location(location) => location,
        }
    }

    /// Path of the resource relative to the asset root.
    pub fn path(&self) -> &str {
        match self {
            ManifestEntry::Named { location, .. } => location,
            ManifestEntry::Location(location) => location,
        }
    }
}

impl From<&str> for ManifestEntry {
    fn from(location: &str) -> Self {
        ManifestEntry::location(location)
    }
}

/// Ordered batches of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ResourceManifest {
    batches: Vec<Vec<ManifestEntry>>,
}

impl ResourceManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch after the existing ones.
    pub fn with_batch(mut self, entries: impl IntoIterator<Item = ManifestEntry>) -> Self {
        self.batches.push(entries.into_iter().collect());
        self
    }

    /// Parse a manifest written as a JSON array of batches.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn batches(&self) -> &[Vec<ManifestEntry>] {
        &self.batches
    }

    /// All entries in declaration order, batch after batch.
    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.batches.iter().flatten()
    }

    /// Total number of resources across all batches.
    pub fn len(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_location_is_its_own_name() {
        let entry = ManifestEntry::from("img/cat.png");
        assert_eq!(entry.name(), "img/cat.png");
        assert_eq!(entry.path(), "img/cat.png");
    }

    #[test]
    fn test_entries_follow_batch_order() {
        let manifest = ResourceManifest::new()
            .with_batch([ManifestEntry::named("cat", "img/cat.png")])
            .with_batch([
                ManifestEntry::named("sheet", "img/sheet.json"),
                ManifestEntry::location("img/dog.png"),
            ]);

        let names: Vec<&str> = manifest.entries().map(ManifestEntry::name).collect();
        assert_eq!(names, vec!["cat", "sheet", "img/dog.png"]);
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.batches().len(), 2);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ResourceManifest::new();
        assert!(manifest.is_empty());
        assert_eq!(manifest.entries().count(), 0);
    }

    #[test]
    fn test_from_json_accepts_both_entry_forms() {
        let manifest = ResourceManifest::from_json_str(
            r#"[
                [{ "name": "cat", "url": "img/cat.png" }],
                [{ "name": "sheet", "location": "img/sheet.json" }, "img/dog.png"]
            ]"#,
        )
        .unwrap();

        assert_eq!(
            manifest,
            ResourceManifest::new()
                .with_batch([ManifestEntry::named("cat", "img/cat.png")])
                .with_batch([
                    ManifestEntry::named("sheet", "img/sheet.json"),
                    ManifestEntry::location("img/dog.png"),
                ])
        );
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(ResourceManifest::from_json_str(r#"{ "cat": "img/cat.png" }"#).is_err());
    }
}
