//! Feature catalog: TOML-defined, validated once, immutable afterwards.
//!
//! - `types.rs`: serde schema of a feature pack
//! - `descriptor.rs`: compiled `FeatureDescriptor` and availability model
//! - `loader.rs`: TOML parsing and validation into descriptors
//! - `source.rs`: pluggable pack sources (directory, in-memory)
//! - `registry.rs`: the `Catalog` itself: built-ins, custom packs, fallback

pub mod descriptor;
pub mod diagnostics;
pub mod loader;
pub mod registry;
pub mod source;
pub mod types;

pub use descriptor::{Availability, BrowserSupport, FeatureDescriptor, SupportVersion, HIT_GROUP};
pub use diagnostics::CatalogDiagnostics;
pub use registry::Catalog;
pub use source::{CatalogSource, DirectorySource, PackText, StaticSource};
