//! Effect manifest parsing.
//!
//! Each installed effect ships an `effect.toml` describing its metadata.
//! The `type` tag is the capability filter: only records tagged `"effect"`
//! belong to the compositor's effect pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EffectsError, EffectsResult};

/// Manifest file name looked for in each plugin directory.
pub const MANIFEST_FILE: &str = "effect.toml";

/// Value of the `type` tag identifying compositor effect plugins.
pub const EFFECT_TYPE: &str = "effect";

/// Metadata record for one installed effect plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectManifest {
    /// Display name (unique within one plugin directory in practice,
    /// but nothing enforces global uniqueness).
    pub name: String,
    /// Plugin type tag.
    #[serde(rename = "type")]
    pub plugin_type: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Plugin author.
    #[serde(default)]
    pub author: String,
    /// Author contact address.
    #[serde(default)]
    pub email: String,
    /// License identifier.
    #[serde(default)]
    pub license: String,
    /// Plugin version string.
    #[serde(default)]
    pub version: String,
    /// Category used for grouping.
    #[serde(default)]
    pub category: String,
}

impl EffectManifest {
    /// Parse a manifest from a TOML string.
    pub fn from_toml(content: &str) -> EffectsResult<Self> {
        toml::from_str(content).map_err(|e| EffectsError::InvalidManifest(e.to_string()))
    }

    /// Parse a manifest from a file.
    pub fn from_file(path: &Path) -> EffectsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Whether this record is tagged as a compositor effect.
    pub fn is_effect(&self) -> bool {
        self.plugin_type == EFFECT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = EffectManifest::from_toml(
            r#"
name = "Show Fps"
type = "effect"
description = "Paints the current frame rate"
author = "Jane Doe"
email = "jane@example.org"
license = "GPL"
version = "2.1"
category = "Tools"
"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "Show Fps");
        assert_eq!(manifest.category, "Tools");
        assert!(manifest.is_effect());
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let manifest = EffectManifest::from_toml(
            r#"
name = "Blur"
type = "effect"
"#,
        )
        .unwrap();

        assert_eq!(manifest.description, "");
        assert_eq!(manifest.author, "");
        assert_eq!(manifest.version, "");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let result = EffectManifest::from_toml("type = \"effect\"\n");
        assert!(matches!(result, Err(EffectsError::InvalidManifest(_))));
    }

    #[test]
    fn test_non_effect_type() {
        let manifest = EffectManifest::from_toml(
            r#"
name = "Window Decorations"
type = "decoration"
"#,
        )
        .unwrap();
        assert!(!manifest.is_effect());
    }
}
