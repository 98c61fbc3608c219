//! Cascading catalog resolver
//!
//! Exposes the class → type → size option lists for catalog-backed
//! components. Each level's options depend on the selections above it; with
//! an unset predecessor the level simply has no options. Lookup faults are
//! returned as structured errors for local surfacing and never escape as
//! panics.

use serde::{Deserialize, Serialize};

use mc_cad::{Catalog, CatalogResult};

use crate::constants::BEARING_STANDARD;
use crate::request::ComponentRequest;

/// The strictly ordered cascade levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionLevel {
    Class,
    Type,
    Size,
}

/// Options for one cascade level given the request's current selections
///
/// Parametric subtypes have no catalog levels and always yield an empty list.
/// Bearings skip the type level; their size table is keyed by class under the
/// fixed catalog standard.
pub fn options_for(
    catalog: &dyn Catalog,
    request: &ComponentRequest,
    level: SelectionLevel,
) -> CatalogResult<Vec<String>> {
    let Some(family) = request.catalog_family() else {
        return Ok(Vec::new());
    };

    let result = match level {
        SelectionLevel::Class => catalog.classes_of(family),

        SelectionLevel::Type => {
            if !family.has_type_level() {
                return Ok(Vec::new());
            }
            match &request.selection.class {
                Some(class) => catalog.types_of(family, class),
                None => Ok(Vec::new()),
            }
        }

        SelectionLevel::Size => {
            let Some(class) = &request.selection.class else {
                return Ok(Vec::new());
            };
            if family.has_type_level() {
                match &request.selection.fastener_type {
                    Some(fastener_type) => catalog.sizes_of(family, class, fastener_type),
                    None => Ok(Vec::new()),
                }
            } else {
                catalog.sizes_of(family, class, BEARING_STANDARD)
            }
        }
    };

    if let Err(e) = &result {
        tracing::warn!(level = ?level, error = %e, "catalog lookup failed");
    }
    result
}
