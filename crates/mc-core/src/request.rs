//! Component request model
//!
//! A `ComponentRequest` captures everything the user has chosen so far:
//! category, subtype, cascading catalog selection and numeric dimensions.
//! Dimension domains are fixed per subtype; values are clamped on write.
//! Completeness gates whether generation may be attempted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mc_cad::{CatalogFamily, ComponentParams};

use crate::constants::BEARING_STANDARD;

/// Request-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Request is not complete")]
    Incomplete,
}

/// Top-level component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Bearing,
    Gear,
    Fastener,
}

impl Category {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bearing => "Bearing",
            Category::Gear => "Gear",
            Category::Fastener => "Fastener",
        }
    }
}

/// Gear subtypes (parametric components)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GearKind {
    Spur,
    Bevel,
    CrossedHelical,
    Rack,
    Ring,
    Worm,
}

impl GearKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GearKind::Spur => "Spur Gear",
            GearKind::Bevel => "Bevel Gear",
            GearKind::CrossedHelical => "Crossed Helical Gear",
            GearKind::Rack => "Rack Gear",
            GearKind::Ring => "Ring Gear",
            GearKind::Worm => "Worm Gear",
        }
    }

    /// Filename stem for exported models of this kind
    pub fn file_stem(&self) -> &'static str {
        match self {
            GearKind::Spur => "spur_gear",
            GearKind::Bevel => "bevel_gear",
            GearKind::CrossedHelical => "crossed_helical_gear",
            GearKind::Rack => "rack_gear",
            GearKind::Ring => "ring_gear",
            GearKind::Worm => "worm_gear",
        }
    }

    /// Dimension domains for this kind, in input order
    pub fn domains(&self) -> &'static [(&'static str, DimensionDomain)] {
        match self {
            GearKind::Spur => SPUR_DOMAINS,
            GearKind::Bevel => BEVEL_DOMAINS,
            GearKind::CrossedHelical => CROSSED_HELICAL_DOMAINS,
            GearKind::Rack => RACK_DOMAINS,
            GearKind::Ring => RING_DOMAINS,
            GearKind::Worm => WORM_DOMAINS,
        }
    }
}

/// Fastener subtypes (catalog-backed components)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FastenerKind {
    Nut,
    Screw,
    Washer,
}

impl FastenerKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            FastenerKind::Nut => "Nut",
            FastenerKind::Screw => "Screw",
            FastenerKind::Washer => "Washer",
        }
    }

    /// Dimension domains for this kind (screws carry a free length)
    pub fn domains(&self) -> &'static [(&'static str, DimensionDomain)] {
        match self {
            FastenerKind::Screw => SCREW_DOMAINS,
            FastenerKind::Nut | FastenerKind::Washer => &[],
        }
    }

    fn family(&self) -> CatalogFamily {
        match self {
            FastenerKind::Nut => CatalogFamily::Nut,
            FastenerKind::Screw => CatalogFamily::Screw,
            FastenerKind::Washer => CatalogFamily::Washer,
        }
    }
}

/// Allowed range for one numeric dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionDomain {
    /// Minimum allowed value
    pub min: f64,
    /// Maximum allowed value, if the input imposes one
    pub max: Option<f64>,
    /// Input step (advisory, for the presentation layer)
    pub step: f64,
    /// Default value
    pub default: f64,
}

impl DimensionDomain {
    /// Clamp a value into this domain
    pub fn clamp(&self, value: f64) -> f64 {
        let v = value.max(self.min);
        match self.max {
            Some(max) => v.min(max),
            None => v,
        }
    }
}

const SPUR_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("teeth_number", DimensionDomain { min: 3.0, max: None, step: 1.0, default: 19.0 }),
    ("width", DimensionDomain { min: 0.1, max: None, step: 0.5, default: 5.0 }),
    ("bore_d", DimensionDomain { min: 0.0, max: None, step: 0.5, default: 5.0 }),
];

const BEVEL_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("teeth_number", DimensionDomain { min: 5.0, max: None, step: 1.0, default: 25.0 }),
    ("cone_angle", DimensionDomain { min: 1.0, max: Some(179.0), step: 1.0, default: 45.0 }),
    ("face_width", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 8.0 }),
    ("bore_d", DimensionDomain { min: 0.0, max: None, step: 0.5, default: 5.0 }),
];

const CROSSED_HELICAL_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("teeth_number", DimensionDomain { min: 3.0, max: None, step: 1.0, default: 20.0 }),
    ("width", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 10.0 }),
    ("helix_angle", DimensionDomain { min: -89.0, max: Some(89.0), step: 1.0, default: 45.0 }),
    ("bore_d", DimensionDomain { min: 0.0, max: None, step: 0.5, default: 5.0 }),
];

const RACK_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("length", DimensionDomain { min: 10.0, max: None, step: 1.0, default: 100.0 }),
    ("width", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 10.0 }),
    ("height", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 5.0 }),
];

const RING_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("teeth_number", DimensionDomain { min: 10.0, max: None, step: 1.0, default: 60.0 }),
    ("width", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 10.0 }),
    ("rim_width", DimensionDomain { min: 1.0, max: None, step: 0.5, default: 5.0 }),
];

const WORM_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("module", DimensionDomain { min: 0.1, max: None, step: 0.1, default: 1.0 }),
    ("lead_angle", DimensionDomain { min: 1.0, max: Some(89.0), step: 1.0, default: 10.0 }),
    ("n_threads", DimensionDomain { min: 1.0, max: None, step: 1.0, default: 1.0 }),
    ("length", DimensionDomain { min: 5.0, max: None, step: 1.0, default: 50.0 }),
    ("bore_d", DimensionDomain { min: 0.0, max: None, step: 0.5, default: 8.0 }),
];

const SCREW_DOMAINS: &[(&str, DimensionDomain)] = &[
    ("length", DimensionDomain { min: 1.0, max: None, step: 1.0, default: 10.0 }),
];

/// One named dimension with its domain and current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Parameter name
    pub name: String,
    /// Allowed range
    pub domain: DimensionDomain,
    /// Current value, always within the domain
    pub value: f64,
}

/// The set of numeric dimensions for the current subtype
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    entries: Vec<Dimension>,
}

impl Dimensions {
    /// Seed dimensions from a domain table, each at its default value
    pub fn from_domains(domains: &'static [(&'static str, DimensionDomain)]) -> Self {
        Self {
            entries: domains
                .iter()
                .map(|(name, domain)| Dimension {
                    name: (*name).to_string(),
                    domain: *domain,
                    value: domain.default,
                })
                .collect(),
        }
    }

    /// Get a dimension value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|d| d.name == name).map(|d| d.value)
    }

    /// Set a dimension value, clamped to its domain
    ///
    /// Returns false when the subtype has no such dimension.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.entries.iter_mut().find(|d| d.name == name) {
            Some(dim) => {
                dim.value = dim.domain.clamp(value);
                true
            }
            None => false,
        }
    }

    /// Iterate dimensions in input order
    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.entries.iter()
    }

    /// Check whether the subtype has any dimensions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Nested class/type/size selection for catalog-backed components
///
/// Each field may be set only when its predecessor is set; unsetting a
/// predecessor clears all dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSelection {
    /// Selected class label
    pub class: Option<String>,
    /// Selected type (standard) within the class
    pub fastener_type: Option<String>,
    /// Selected size designation
    pub size: Option<String>,
}

impl CatalogSelection {
    /// Unset all three levels
    pub fn clear(&mut self) {
        self.class = None;
        self.fastener_type = None;
        self.size = None;
    }
}

/// Everything the user has configured for one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRequest {
    /// Chosen category
    pub category: Option<Category>,
    /// Chosen gear kind (when category is Gear)
    pub gear: Option<GearKind>,
    /// Chosen fastener kind (when category is Fastener)
    pub fastener: Option<FastenerKind>,
    /// Cascading catalog selection (catalog-backed subtypes)
    pub selection: CatalogSelection,
    /// Numeric dimensions (parametric subtypes and screw length)
    pub dimensions: Dimensions,
    /// Suppress modeled threads on nuts and screws
    pub simple_threads: bool,
}

impl Default for ComponentRequest {
    fn default() -> Self {
        Self {
            category: None,
            gear: None,
            fastener: None,
            selection: CatalogSelection::default(),
            dimensions: Dimensions::default(),
            simple_threads: true,
        }
    }
}

impl ComponentRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the category, resetting every dependent field
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.gear = None;
        self.fastener = None;
        self.selection.clear();
        self.dimensions = Dimensions::default();
    }

    /// Change the gear kind, re-seeding dimension defaults
    pub fn set_gear_kind(&mut self, kind: Option<GearKind>) {
        self.gear = kind;
        self.selection.clear();
        self.dimensions = match kind {
            Some(kind) => Dimensions::from_domains(kind.domains()),
            None => Dimensions::default(),
        };
    }

    /// Change the fastener kind, re-seeding dimension defaults
    pub fn set_fastener_kind(&mut self, kind: Option<FastenerKind>) {
        self.fastener = kind;
        self.selection.clear();
        self.dimensions = match kind {
            Some(kind) => Dimensions::from_domains(kind.domains()),
            None => Dimensions::default(),
        };
    }

    /// Select a class, unsetting type and size
    pub fn select_class(&mut self, class: Option<String>) {
        self.selection.class = class;
        self.selection.fastener_type = None;
        self.selection.size = None;
    }

    /// Select a type, unsetting size
    ///
    /// Ignored when no class is selected or the subtype has no type level.
    pub fn select_type(&mut self, fastener_type: Option<String>) {
        let has_type_level = self
            .catalog_family()
            .is_some_and(|f| f.has_type_level());
        if self.selection.class.is_none() || !has_type_level {
            return;
        }
        self.selection.fastener_type = fastener_type;
        self.selection.size = None;
    }

    /// Select a size
    ///
    /// Ignored when the predecessor level is not selected.
    pub fn select_size(&mut self, size: Option<String>) {
        let ready = match self.catalog_family() {
            Some(family) if family.has_type_level() => self.selection.fastener_type.is_some(),
            Some(_) => self.selection.class.is_some(),
            None => false,
        };
        if !ready {
            return;
        }
        self.selection.size = size;
    }

    /// The catalog family backing this request, if any
    pub fn catalog_family(&self) -> Option<CatalogFamily> {
        match self.category? {
            Category::Bearing => Some(CatalogFamily::Bearing),
            Category::Fastener => self.fastener.map(|k| k.family()),
            Category::Gear => None,
        }
    }

    /// Whether every required field for the chosen subtype is set
    pub fn is_complete(&self) -> bool {
        match self.category {
            None => false,
            Some(Category::Gear) => self.gear.is_some(),
            Some(Category::Bearing) => {
                self.selection.class.is_some() && self.selection.size.is_some()
            }
            Some(Category::Fastener) => {
                self.fastener.is_some()
                    && self.selection.class.is_some()
                    && self.selection.fastener_type.is_some()
                    && self.selection.size.is_some()
            }
        }
    }

    /// Build the kernel-facing parameter set for this request
    pub fn params(&self) -> Result<ComponentParams, RequestError> {
        if !self.is_complete() {
            return Err(RequestError::Incomplete);
        }

        let dim = |name: &str| self.dimensions.get(name).ok_or(RequestError::Incomplete);

        match self.category.ok_or(RequestError::Incomplete)? {
            Category::Gear => match self.gear.ok_or(RequestError::Incomplete)? {
                GearKind::Spur => Ok(ComponentParams::SpurGear {
                    module: dim("module")?,
                    teeth_number: dim("teeth_number")?.round() as u32,
                    width: dim("width")?,
                    bore_d: dim("bore_d")?,
                }),
                GearKind::Bevel => Ok(ComponentParams::BevelGear {
                    module: dim("module")?,
                    teeth_number: dim("teeth_number")?.round() as u32,
                    cone_angle: dim("cone_angle")?,
                    face_width: dim("face_width")?,
                    bore_d: dim("bore_d")?,
                }),
                GearKind::CrossedHelical => Ok(ComponentParams::CrossedHelicalGear {
                    module: dim("module")?,
                    teeth_number: dim("teeth_number")?.round() as u32,
                    width: dim("width")?,
                    helix_angle: dim("helix_angle")?,
                    bore_d: dim("bore_d")?,
                }),
                GearKind::Ring => Ok(ComponentParams::RingGear {
                    module: dim("module")?,
                    teeth_number: dim("teeth_number")?.round() as u32,
                    width: dim("width")?,
                    rim_width: dim("rim_width")?,
                }),
                GearKind::Rack => Ok(ComponentParams::RackGear {
                    module: dim("module")?,
                    length: dim("length")?,
                    width: dim("width")?,
                    height: dim("height")?,
                }),
                GearKind::Worm => Ok(ComponentParams::Worm {
                    module: dim("module")?,
                    lead_angle: dim("lead_angle")?,
                    n_threads: dim("n_threads")?.round() as u32,
                    length: dim("length")?,
                    bore_d: dim("bore_d")?,
                }),
            },
            Category::Bearing => Ok(ComponentParams::Bearing {
                class: self.selection.class.clone().ok_or(RequestError::Incomplete)?,
                size: self.selection.size.clone().ok_or(RequestError::Incomplete)?,
                bearing_type: BEARING_STANDARD.to_string(),
            }),
            Category::Fastener => {
                let class = self.selection.class.clone().ok_or(RequestError::Incomplete)?;
                let size = self.selection.size.clone().ok_or(RequestError::Incomplete)?;
                let fastener_type = self
                    .selection
                    .fastener_type
                    .clone()
                    .ok_or(RequestError::Incomplete)?;
                match self.fastener.ok_or(RequestError::Incomplete)? {
                    FastenerKind::Nut => Ok(ComponentParams::Nut {
                        class,
                        size,
                        fastener_type,
                        simple: self.simple_threads,
                    }),
                    FastenerKind::Screw => Ok(ComponentParams::Screw {
                        class,
                        size,
                        fastener_type,
                        length: dim("length")?,
                        simple: self.simple_threads,
                    }),
                    FastenerKind::Washer => Ok(ComponentParams::Washer {
                        class,
                        size,
                        fastener_type,
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spur_request() -> ComponentRequest {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Gear));
        request.set_gear_kind(Some(GearKind::Spur));
        request
    }

    #[test]
    fn test_gear_defaults_seeded() {
        let request = spur_request();
        assert_eq!(request.dimensions.get("module"), Some(1.0));
        assert_eq!(request.dimensions.get("teeth_number"), Some(19.0));
        assert_eq!(request.dimensions.get("width"), Some(5.0));
        assert_eq!(request.dimensions.get("bore_d"), Some(5.0));
        assert!(request.is_complete());
    }

    #[test]
    fn test_dimension_clamped_to_domain() {
        let mut request = spur_request();
        assert!(request.dimensions.set("module", 0.01));
        assert_eq!(request.dimensions.get("module"), Some(0.1));

        request.set_gear_kind(Some(GearKind::Bevel));
        assert!(request.dimensions.set("cone_angle", 200.0));
        assert_eq!(request.dimensions.get("cone_angle"), Some(179.0));
    }

    #[test]
    fn test_unknown_dimension_rejected() {
        let mut request = spur_request();
        assert!(!request.dimensions.set("cone_angle", 45.0));
    }

    #[test]
    fn test_category_change_resets_everything() {
        let mut request = spur_request();
        request.set_category(Some(Category::Fastener));
        assert!(request.gear.is_none());
        assert!(request.dimensions.is_empty());
        assert!(!request.is_complete());
    }

    #[test]
    fn test_fastener_completeness_requires_full_cascade() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Fastener));
        request.set_fastener_kind(Some(FastenerKind::Nut));
        assert!(!request.is_complete());

        request.select_class(Some("Hex Nut".to_string()));
        assert!(!request.is_complete());

        request.select_type(Some("iso4032".to_string()));
        assert!(!request.is_complete());

        request.select_size(Some("M5-0.8".to_string()));
        assert!(request.is_complete());
    }

    #[test]
    fn test_bearing_completeness_skips_type_level() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Bearing));
        request.select_class(Some("Single Row Deep Groove Ball Bearing".to_string()));
        // size may follow class directly
        request.select_size(Some("M8-22-7".to_string()));
        assert!(request.is_complete());
    }

    #[test]
    fn test_size_ignored_without_predecessor() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Fastener));
        request.set_fastener_kind(Some(FastenerKind::Screw));
        request.select_class(Some("Set Screw".to_string()));
        request.select_size(Some("M5-0.8".to_string()));
        assert!(request.selection.size.is_none());
    }

    #[test]
    fn test_class_change_clears_dependents() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Fastener));
        request.set_fastener_kind(Some(FastenerKind::Nut));
        request.select_class(Some("Hex Nut".to_string()));
        request.select_type(Some("iso4032".to_string()));
        request.select_size(Some("M5-0.8".to_string()));

        request.select_class(Some("Square Nut".to_string()));
        assert!(request.selection.fastener_type.is_none());
        assert!(request.selection.size.is_none());
    }

    #[test]
    fn test_type_change_clears_size() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Fastener));
        request.set_fastener_kind(Some(FastenerKind::Nut));
        request.select_class(Some("Hex Nut".to_string()));
        request.select_type(Some("iso4032".to_string()));
        request.select_size(Some("M5-0.8".to_string()));

        request.select_type(Some("iso4035".to_string()));
        assert!(request.selection.size.is_none());
    }

    #[test]
    fn test_spur_params() {
        let request = spur_request();
        let params = request.params().unwrap();
        assert_eq!(
            params,
            ComponentParams::SpurGear {
                module: 1.0,
                teeth_number: 19,
                width: 5.0,
                bore_d: 5.0,
            }
        );
    }

    #[test]
    fn test_incomplete_params_rejected() {
        let request = ComponentRequest::new();
        assert_eq!(request.params(), Err(RequestError::Incomplete));
    }

    #[test]
    fn test_bearing_params_use_fixed_standard() {
        let mut request = ComponentRequest::new();
        request.set_category(Some(Category::Bearing));
        request.select_class(Some("Single Row Tapered Roller Bearing".to_string()));
        request.select_size(Some("M15-42-14.25".to_string()));
        let params = request.params().unwrap();
        assert!(matches!(
            params,
            ComponentParams::Bearing { bearing_type, .. } if bearing_type == BEARING_STANDARD
        ));
    }
}
