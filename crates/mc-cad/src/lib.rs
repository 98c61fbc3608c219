//! Collaborator Interfaces for MechCAD
//!
//! This crate provides:
//! - Abstract geometry kernel and STEP exporter traits
//! - Kernel-facing parameter sets for every component kind
//! - The catalog interface for class/type/size tables, with a built-in
//!   static catalog of the supported hardware

pub mod catalog;
pub mod kernel;
pub mod params;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, CatalogFamily, CatalogResult, StaticCatalog};
pub use kernel::{
    ExportFormat, GeometryKernel, KernelError, KernelResult, NullExporter, NullKernel, Solid,
    StepExporter,
};
pub use params::ComponentParams;
