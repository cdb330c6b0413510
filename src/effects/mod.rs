//! Effect-registry synchronization.
//!
//! Keeps three views of "which effects are enabled" consistent:
//!
//! - the plugin registry ([`DirectoryRegistry`]), which knows what is
//!   installed,
//! - the persisted state store ([`StateStore`]), which records what the
//!   user wants enabled,
//! - the running compositor ([`CompositorHandle`]), which is told the
//!   desired state of every effect on each model load.
//!
//! The read path merges the first two into an [`EffectListModel`]; the
//! write path batches UI edits in an [`EditSession`] and flushes them to
//! the store. Flushing and compositor sync are deliberately two steps:
//! `flush()` only persists, and the next model `load()`/`reload()` is
//! what pushes the state out. Callers own that second step.

mod compositor;
mod descriptor;
mod error;
mod manifest;
mod model;
mod registry;
mod session;
mod store;

pub use compositor::{CompositorHandle, SocketNotifier, SOCKET_NAME};
pub use descriptor::{service_name, EffectDescriptor, EffectField, FieldValue, SERVICE_PREFIX};
pub use error::{EffectsError, EffectsResult};
pub use manifest::{EffectManifest, EFFECT_TYPE, MANIFEST_FILE};
pub use model::EffectListModel;
pub use registry::{DirectoryRegistry, EffectSource};
pub use session::EditSession;
pub use store::{StateStore, PLUGINS_GROUP};
