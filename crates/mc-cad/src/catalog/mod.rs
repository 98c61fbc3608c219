//! Catalog interface for class/type/size tables
//!
//! Catalog-backed components (bearings, nuts, screws, washers) draw their
//! valid parameter combinations from fixed tables rather than continuous
//! dimensions. The `Catalog` trait is the lookup interface; `StaticCatalog`
//! is the built-in implementation backed by the tables in `tables.rs`.

mod tables;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown type {fastener_type} for class {class}")]
    UnknownType {
        class: String,
        fastener_type: String,
    },

    #[error("Catalog lookup failed: {0}")]
    LookupFailed(String),
}

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The catalog-backed component families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogFamily {
    /// Rolling bearings
    Bearing,
    /// Nuts
    Nut,
    /// Screws
    Screw,
    /// Washers
    Washer,
}

impl CatalogFamily {
    /// Whether this family has a type level between class and size
    ///
    /// Bearing size tables are keyed by class alone; the catalog standard is
    /// fixed rather than user-selected.
    pub fn has_type_level(&self) -> bool {
        !matches!(self, CatalogFamily::Bearing)
    }
}

/// The catalog lookup interface
///
/// Each level's options depend on the selections above it; every lookup can
/// fail with a `CatalogError` that callers surface locally.
pub trait Catalog: Send + Sync {
    /// List the classes of a family
    fn classes_of(&self, family: CatalogFamily) -> CatalogResult<Vec<String>>;

    /// List the types available within a class
    fn types_of(&self, family: CatalogFamily, class: &str) -> CatalogResult<Vec<String>>;

    /// List the sizes available for a (class, type) pair
    fn sizes_of(
        &self,
        family: CatalogFamily,
        class: &str,
        fastener_type: &str,
    ) -> CatalogResult<Vec<String>>;
}

/// Built-in catalog backed by fixed tables
#[derive(Debug, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    /// Create a new static catalog
    pub fn new() -> Self {
        Self
    }
}

impl Catalog for StaticCatalog {
    fn classes_of(&self, family: CatalogFamily) -> CatalogResult<Vec<String>> {
        Ok(tables::classes(family)
            .iter()
            .map(|s| s.to_string())
            .collect())
    }

    fn types_of(&self, family: CatalogFamily, class: &str) -> CatalogResult<Vec<String>> {
        let entry = tables::class_entry(family, class)
            .ok_or_else(|| CatalogError::UnknownClass(class.to_string()))?;
        Ok(entry.types.iter().map(|t| t.name.to_string()).collect())
    }

    fn sizes_of(
        &self,
        family: CatalogFamily,
        class: &str,
        fastener_type: &str,
    ) -> CatalogResult<Vec<String>> {
        let entry = tables::class_entry(family, class)
            .ok_or_else(|| CatalogError::UnknownClass(class.to_string()))?;
        let type_entry = entry
            .types
            .iter()
            .find(|t| t.name == fastener_type)
            .ok_or_else(|| CatalogError::UnknownType {
                class: class.to_string(),
                fastener_type: fastener_type.to_string(),
            })?;
        Ok(type_entry.sizes.iter().map(|s| s.to_string()).collect())
    }
}
