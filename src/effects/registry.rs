//! Effect plugin discovery.

use std::fs;
use std::path::PathBuf;

use super::manifest::{EffectManifest, MANIFEST_FILE};

/// Source of installed effect metadata.
pub trait EffectSource: Send + Sync {
    /// Enumerate installed effects. Pure read; an unavailable source
    /// yields an empty sequence rather than an error.
    fn discover(&self) -> Vec<EffectManifest>;
}

/// Discovers effects by scanning a plugins directory.
///
/// Layout: `<dir>/<plugin>/effect.toml`. Entries are visited in
/// lexicographic path order so discovery order is deterministic across
/// runs on the same tree.
pub struct DirectoryRegistry {
    dir: PathBuf,
}

impl DirectoryRegistry {
    /// Create a registry over the given plugins directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl EffectSource for DirectoryRegistry {
    fn discover(&self) -> Vec<EffectManifest> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Plugin directory unavailable"
                );
                return Vec::new();
            }
        };

        let mut plugin_dirs: Vec<PathBuf> =
            entries.filter_map(|e| e.ok().map(|e| e.path())).filter(|p| p.is_dir()).collect();
        // read_dir order is platform-defined; sort for a stable scan.
        plugin_dirs.sort();

        let mut effects = Vec::new();
        for plugin_dir in plugin_dirs {
            let manifest_path = plugin_dir.join(MANIFEST_FILE);
            if !manifest_path.exists() {
                continue;
            }

            match EffectManifest::from_file(&manifest_path) {
                Ok(manifest) if manifest.is_effect() => effects.push(manifest),
                Ok(manifest) => {
                    tracing::debug!(name = %manifest.name, "Skipping non-effect plugin");
                }
                Err(e) => {
                    tracing::warn!(
                        path = %manifest_path.display(),
                        error = %e,
                        "Skipping unreadable effect manifest"
                    );
                }
            }
        }

        tracing::debug!(dir = %self.dir.display(), count = effects.len(), "Discovered effects");
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, plugin: &str, body: &str) {
        let plugin_dir = dir.join(plugin);
        fs::create_dir_all(&plugin_dir).unwrap();
        fs::write(plugin_dir.join(MANIFEST_FILE), body).unwrap();
    }

    #[test]
    fn test_discover_orders_by_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "zoom", "name = \"Zoom\"\ntype = \"effect\"\n");
        write_manifest(temp_dir.path(), "blur", "name = \"Blur\"\ntype = \"effect\"\n");

        let registry = DirectoryRegistry::new(temp_dir.path());
        let names: Vec<_> = registry.discover().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Blur", "Zoom"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let registry = DirectoryRegistry::new("/nonexistent/effects");
        assert!(registry.discover().is_empty());
    }

    #[test]
    fn test_non_effect_and_broken_manifests_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "blur", "name = \"Blur\"\ntype = \"effect\"\n");
        write_manifest(temp_dir.path(), "deco", "name = \"Deco\"\ntype = \"decoration\"\n");
        write_manifest(temp_dir.path(), "broken", "not valid toml [");
        // A plugin directory without a manifest at all.
        fs::create_dir_all(temp_dir.path().join("empty")).unwrap();

        let registry = DirectoryRegistry::new(temp_dir.path());
        let effects = registry.discover();
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].name, "Blur");
    }
}
