//! # effectsctl
//!
//! Settings backend for a compositor's visual-effect plugins: enumerate
//! installed effects, reflect their enabled/disabled state to and from
//! the shared configuration file, and notify the running compositor so
//! it can load or unload effects live.
//!
//! The compositor itself (rendering, frame scheduling, plugin loading
//! mechanics) is an external collaborator reached only through its
//! control socket and the shared config file.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod effects;

// Re-export commonly used types
pub use effects::{
    service_name, CompositorHandle, DirectoryRegistry, EditSession, EffectDescriptor, EffectField,
    EffectListModel, EffectManifest, EffectSource, EffectsError, EffectsResult, FieldValue,
    SocketNotifier, StateStore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "effectsctl";
