//! Batched enable/disable edits.

use std::collections::BTreeMap;

use super::descriptor::service_name;
use super::store::StateStore;
use super::EffectsResult;

/// Accumulates enable/disable edits from one settings session and
/// persists them as a batch.
///
/// `flush()` only writes the config file; it issues no compositor
/// notifications and does not clear the accumulated edits. Pushing the
/// new state to the compositor is a separate step: the caller triggers a
/// model reload after flushing.
pub struct EditSession {
    store: StateStore,
    pending: BTreeMap<String, bool>,
}

impl EditSession {
    /// Create an empty session over the given state-store handle.
    pub fn new(store: StateStore) -> Self {
        Self { store, pending: BTreeMap::new() }
    }

    /// Record the desired flag for an effect, overwriting any earlier
    /// edit for the same effect in this session. Keyed by the derived
    /// service name, so names differing only in case or spacing land on
    /// the same entry.
    pub fn set_pending(&mut self, effect_name: &str, enabled: bool) {
        self.pending.insert(service_name(effect_name), enabled);
    }

    /// Number of recorded edits.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Persist every recorded edit, then sync once at the end — a single
    /// durability barrier for the whole batch. The edits stay recorded
    /// afterwards.
    pub fn flush(&mut self) -> EffectsResult<()> {
        for (service_name, enabled) in &self.pending {
            self.store.write_enabled(service_name, *enabled);
        }
        self.store.sync()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flush_persists_derived_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("effects.toml");

        let mut session = EditSession::new(StateStore::open(&path));
        session.set_pending("Blur", true);
        session.set_pending("Show Fps", false);
        session.flush().unwrap();

        let store = StateStore::open(&path);
        assert!(store.read_enabled("kwin4_effect_blur"));
        assert!(!store.read_enabled("kwin4_effect_showfps"));
    }

    #[test]
    fn test_later_edit_overwrites_earlier_one() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("effects.toml");

        let mut session = EditSession::new(StateStore::open(&path));
        session.set_pending("Blur", true);
        session.set_pending("blur", false);
        assert_eq!(session.pending_count(), 1);
        session.flush().unwrap();

        let store = StateStore::open(&path);
        assert!(!store.read_enabled("kwin4_effect_blur"));
    }

    #[test]
    fn test_flush_keeps_pending_edits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("effects.toml");

        let mut session = EditSession::new(StateStore::open(&path));
        session.set_pending("Blur", true);
        session.flush().unwrap();
        assert_eq!(session.pending_count(), 1);

        // A second flush rewrites the same entries.
        std::fs::remove_file(&path).unwrap();
        session.flush().unwrap();
        let store = StateStore::open(&path);
        assert!(store.read_enabled("kwin4_effect_blur"));
    }

    #[test]
    fn test_empty_flush_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("effects.toml");

        let mut session = EditSession::new(StateStore::open(&path));
        session.flush().unwrap();
        assert!(!path.exists());
    }
}
