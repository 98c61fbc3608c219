//! Closed-form geometric feasibility checks
//!
//! These run before any kernel call. The kernel fails expensively on the same
//! conditions, so the ordering is mandatory rather than an optimization.
//!
//! Only spur and crossed-helical gears (bore bound) and bevel gears (face
//! width bound) have closed-form pre-checks; every other subtype relies on
//! domain clamping and the kernel's own rejection of bad geometry.

use serde::{Deserialize, Serialize};

use mc_cad::ComponentParams;

/// Outcome of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Whether the parameters are geometrically realizable
    pub ok: bool,
    /// The violated numeric bound, when the failure is a limit violation
    pub bound: Option<f64>,
    /// Human-readable failure description (always present when !ok)
    pub message: Option<String>,
}

impl FeasibilityResult {
    /// A passing result
    pub fn pass() -> Self {
        Self {
            ok: true,
            bound: None,
            message: None,
        }
    }

    /// A failing result carrying the violated bound
    pub fn fail(bound: f64, message: String) -> Self {
        Self {
            ok: false,
            bound: Some(bound),
            message: Some(message),
        }
    }
}

/// Check whether a parameter set is geometrically realizable
pub fn validate(params: &ComponentParams) -> FeasibilityResult {
    match params {
        ComponentParams::SpurGear {
            module,
            teeth_number,
            bore_d,
            ..
        } => check_bore(*module, *teeth_number, *bore_d),

        ComponentParams::CrossedHelicalGear {
            module,
            teeth_number,
            helix_angle,
            bore_d,
            ..
        } => {
            let transverse_module = module / helix_angle.to_radians().cos();
            check_bore(transverse_module, *teeth_number, *bore_d)
        }

        ComponentParams::BevelGear {
            module,
            teeth_number,
            cone_angle,
            face_width,
            ..
        } => {
            let pitch_radius = module * f64::from(*teeth_number) / 2.0;
            let cone_distance = pitch_radius / cone_angle.to_radians().sin();
            if *face_width >= cone_distance {
                FeasibilityResult::fail(
                    cone_distance,
                    format!(
                        "Face Width is too large. Must be less than {:.2} mm.",
                        cone_distance
                    ),
                )
            } else {
                FeasibilityResult::pass()
            }
        }

        // No closed-form pre-check for the remaining subtypes; the kernel
        // rejects infeasible combinations at generation time.
        _ => FeasibilityResult::pass(),
    }
}

fn check_bore(effective_module: f64, teeth_number: u32, bore_d: f64) -> FeasibilityResult {
    let max_bore_d = effective_module * (f64::from(teeth_number) - 2.5);
    if bore_d >= max_bore_d {
        FeasibilityResult::fail(
            max_bore_d,
            format!("Bore Diameter is too large. Maximum is {:.2} mm.", max_bore_d),
        )
    } else {
        FeasibilityResult::pass()
    }
}
