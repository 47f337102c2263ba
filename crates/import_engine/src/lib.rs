//! Import engine: collaborators and IO behind the wizard's effects.
mod config;
mod icon;
mod ids;
mod labels;
mod manifest;
mod persist;

pub use config::EngineConfig;
pub use icon::{ExtensionIconResolver, DEFAULT_ICON};
pub use ids::NanoIdGenerator;
pub use labels::{LabelCatalog, LabelError};
pub use manifest::{write_sources_manifest, MANIFEST_FILENAME};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
