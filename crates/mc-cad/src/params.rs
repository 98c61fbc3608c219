//! Kernel-facing parameter sets
//!
//! One variant per component kind, carrying exactly the fields the geometry
//! kernel needs to construct that kind of hardware. These are produced from a
//! validated request and consumed opaquely by the kernel collaborator.

use serde::{Deserialize, Serialize};

/// The full parameter set for one component, ready for the kernel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentParams {
    /// Spur gear
    SpurGear {
        /// Gear module in mm
        module: f64,
        /// Number of teeth
        teeth_number: u32,
        /// Gear thickness in mm
        width: f64,
        /// Bore diameter in mm
        bore_d: f64,
    },

    /// Bevel gear
    BevelGear {
        /// Gear module in mm
        module: f64,
        /// Number of teeth
        teeth_number: u32,
        /// Pitch cone angle in degrees
        cone_angle: f64,
        /// Face width in mm
        face_width: f64,
        /// Bore diameter in mm
        bore_d: f64,
    },

    /// Crossed helical gear
    CrossedHelicalGear {
        /// Gear module in mm
        module: f64,
        /// Number of teeth
        teeth_number: u32,
        /// Gear width in mm
        width: f64,
        /// Helix angle in degrees
        helix_angle: f64,
        /// Bore diameter in mm
        bore_d: f64,
    },

    /// Ring (internal) gear
    RingGear {
        /// Gear module in mm
        module: f64,
        /// Number of teeth
        teeth_number: u32,
        /// Gear width in mm
        width: f64,
        /// Thickness of the solid outer ring in mm
        rim_width: f64,
    },

    /// Rack gear
    RackGear {
        /// Gear module in mm
        module: f64,
        /// Rack length in mm
        length: f64,
        /// Rack width in mm
        width: f64,
        /// Height of the rack base in mm, excluding teeth
        height: f64,
    },

    /// Worm
    Worm {
        /// Gear module in mm
        module: f64,
        /// Lead angle in degrees
        lead_angle: f64,
        /// Number of thread starts
        n_threads: u32,
        /// Worm length in mm
        length: f64,
        /// Bore diameter in mm
        bore_d: f64,
    },

    /// Catalog-backed rolling bearing
    Bearing {
        /// Catalog class label
        class: String,
        /// Catalog size designation
        size: String,
        /// Catalog standard the size table belongs to
        bearing_type: String,
    },

    /// Catalog-backed nut
    Nut {
        /// Catalog class label
        class: String,
        /// Catalog size designation
        size: String,
        /// Catalog type (standard) within the class
        fastener_type: String,
        /// Suppress modeled threads
        simple: bool,
    },

    /// Catalog-backed screw
    Screw {
        /// Catalog class label
        class: String,
        /// Catalog size designation
        size: String,
        /// Catalog type (standard) within the class
        fastener_type: String,
        /// Screw length in mm
        length: f64,
        /// Suppress modeled threads
        simple: bool,
    },

    /// Catalog-backed washer
    Washer {
        /// Catalog class label
        class: String,
        /// Catalog size designation
        size: String,
        /// Catalog type (standard) within the class
        fastener_type: String,
    },
}

impl ComponentParams {
    /// Get the kind name of this parameter set
    pub fn kind_name(&self) -> &'static str {
        match self {
            ComponentParams::SpurGear { .. } => "SpurGear",
            ComponentParams::BevelGear { .. } => "BevelGear",
            ComponentParams::CrossedHelicalGear { .. } => "CrossedHelicalGear",
            ComponentParams::RingGear { .. } => "RingGear",
            ComponentParams::RackGear { .. } => "RackGear",
            ComponentParams::Worm { .. } => "Worm",
            ComponentParams::Bearing { .. } => "Bearing",
            ComponentParams::Nut { .. } => "Nut",
            ComponentParams::Screw { .. } => "Screw",
            ComponentParams::Washer { .. } => "Washer",
        }
    }
}
