//! The effect list model.

use super::compositor::CompositorHandle;
use super::descriptor::{service_name, EffectDescriptor, EffectField, FieldValue};
use super::registry::EffectSource;
use super::store::StateStore;

/// Ordered, read-only view over installed effects.
///
/// The model owns its descriptor sequence exclusively. `load()` rebuilds
/// it from scratch and reconciles the running compositor with the
/// persisted state; there is no incremental diffing.
pub struct EffectListModel {
    source: Box<dyn EffectSource>,
    store: StateStore,
    compositor: Box<dyn CompositorHandle>,
    effects: Vec<EffectDescriptor>,
}

impl EffectListModel {
    /// Create an empty model. Call [`EffectListModel::load`] to populate it.
    pub fn new(
        source: Box<dyn EffectSource>,
        store: StateStore,
        compositor: Box<dyn CompositorHandle>,
    ) -> Self {
        Self { source, store, compositor, effects: Vec::new() }
    }

    /// Rebuild the descriptor sequence and reconcile the compositor.
    ///
    /// For every discovered effect the persisted flag is read from the
    /// state store, keyed by the derived service name. The sequence is
    /// sorted by category ascending; the sort is stable, so rows within
    /// one category keep registry discovery order.
    ///
    /// Every load re-sends the desired state of every effect, one
    /// notification per descriptor, whether or not anything changed.
    /// The compositor treats repeats as no-ops.
    pub fn load(&mut self) {
        self.store.refresh();

        let mut effects: Vec<EffectDescriptor> = self
            .source
            .discover()
            .into_iter()
            .map(|manifest| {
                let service_name = service_name(&manifest.name);
                let enabled = self.store.read_enabled(&service_name);
                EffectDescriptor {
                    name: manifest.name,
                    description: manifest.description,
                    author_name: manifest.author,
                    author_email: manifest.email,
                    license: manifest.license,
                    version: manifest.version,
                    category: manifest.category,
                    service_name,
                    enabled,
                }
            })
            .collect();
        effects.sort_by(|a, b| a.category.cmp(&b.category));

        for effect in &effects {
            if effect.enabled {
                self.compositor.load_effect(&effect.service_name);
            } else {
                self.compositor.unload_effect(&effect.service_name);
            }
        }

        tracing::debug!(count = effects.len(), "Loaded effect list");
        self.effects = effects;
    }

    /// Discard the current sequence and rebuild from scratch. O(n) in
    /// plugin count; counts are tens, not thousands.
    pub fn reload(&mut self) {
        self.effects.clear();
        self.load();
    }

    /// Number of rows in the current sequence.
    pub fn row_count(&self) -> usize {
        self.effects.len()
    }

    /// Field access by row and field tag. An out-of-range row yields
    /// `None`, never a panic.
    pub fn get(&self, row: usize, field: EffectField) -> Option<FieldValue<'_>> {
        self.effects.get(row).map(|effect| effect.field(field))
    }

    /// Typed access to a whole row.
    pub fn descriptor(&self, row: usize) -> Option<&EffectDescriptor> {
        self.effects.get(row)
    }

    /// The current sequence, in list order.
    pub fn effects(&self) -> &[EffectDescriptor] {
        &self.effects
    }
}
