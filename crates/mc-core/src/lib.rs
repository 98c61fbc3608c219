//! MechCAD Core
//!
//! This crate provides:
//! - The component request model with per-subtype dimension domains
//! - The cascading catalog resolver
//! - Closed-form geometric feasibility checks
//! - The generation pipeline bridging kernel, exporter and transient storage
//! - The artifact lifecycle (download slot and scoped transient files)

pub mod artifact;
pub mod constants;
pub mod pipeline;
pub mod request;
pub mod resolver;
pub mod validate;

// Re-exports for convenience
pub use artifact::{Artifact, ArtifactSlot, with_transient_file};
pub use pipeline::{GenerateError, Pipeline, suggested_name};
pub use request::{
    Category, CatalogSelection, ComponentRequest, DimensionDomain, Dimensions, FastenerKind,
    GearKind, RequestError,
};
pub use resolver::{SelectionLevel, options_for};
pub use validate::{FeasibilityResult, validate};
