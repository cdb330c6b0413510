//! Persisted effect state.
//!
//! Enabled flags live in the shared compositor config file as
//! `<serviceName>Enabled` keys inside the `[Plugins]` table. The file is
//! shared with the compositor process itself; this handle adds no locking
//! on top of the filesystem, so racing writers are last-writer-wins per
//! key. Writes are queued on the handle and only hit disk on [`sync`].
//!
//! [`sync`]: StateStore::sync

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::{EffectsError, EffectsResult};

/// Config table holding the enabled flags.
pub const PLUGINS_GROUP: &str = "Plugins";

const ENABLED_SUFFIX: &str = "Enabled";

/// Handle on the shared effect-state config file.
///
/// Each component constructs its own handle over the same path; there is
/// no process-wide shared instance.
pub struct StateStore {
    path: PathBuf,
    document: Table,
    queued: BTreeMap<String, bool>,
}

impl StateStore {
    /// Open a handle. A missing or unparseable file is an empty store,
    /// never an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = read_document(&path);
        Self { path, document, queued: BTreeMap::new() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read an effect's persisted flag. Queued writes on this handle are
    /// visible; an absent key reads as `false`.
    pub fn read_enabled(&self, service_name: &str) -> bool {
        if let Some(queued) = self.queued.get(service_name) {
            return *queued;
        }

        self.document
            .get(PLUGINS_GROUP)
            .and_then(Value::as_table)
            .and_then(|group| group.get(&entry_key(service_name)))
            .is_some_and(value_as_bool)
    }

    /// Queue a flag write. Nothing is persisted until [`StateStore::sync`].
    pub fn write_enabled(&mut self, service_name: &str, enabled: bool) {
        self.queued.insert(service_name.to_string(), enabled);
    }

    /// Flush all queued writes to disk in one write.
    ///
    /// The file is re-read first so keys written by other processes since
    /// `open()` survive the rewrite. Flags are stored as stringified
    /// booleans, matching the store's native representation.
    pub fn sync(&mut self) -> EffectsResult<()> {
        if self.queued.is_empty() {
            return Ok(());
        }

        self.document = read_document(&self.path);
        let group = self
            .document
            .entry(PLUGINS_GROUP.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        let group = group
            .as_table_mut()
            .ok_or_else(|| EffectsError::Config(format!("[{PLUGINS_GROUP}] is not a table")))?;

        for (service_name, enabled) in &self.queued {
            group.insert(entry_key(service_name), Value::String(enabled.to_string()));
        }
        self.queued.clear();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(&self.document).map_err(|e| EffectsError::Config(e.to_string()))?;
        fs::write(&self.path, content)?;

        tracing::debug!(path = %self.path.display(), "Synced effect state");
        Ok(())
    }

    /// Drop the in-memory view and re-read from disk. Queued writes are
    /// kept.
    pub fn refresh(&mut self) {
        self.document = read_document(&self.path);
    }
}

fn entry_key(service_name: &str) -> String {
    format!("{service_name}{ENABLED_SUFFIX}")
}

fn read_document(path: &Path) -> Table {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Config file unreadable");
            }
            return Table::new();
        }
    };

    match content.parse::<Table>() {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unparseable config file");
            Table::new()
        }
    }
}

fn value_as_bool(value: &Value) -> bool {
    match value {
        Value::String(s) => s == "true",
        Value::Boolean(b) => *b,
        _ => false,
    }
}
