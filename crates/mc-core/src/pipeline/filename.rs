//! Deterministic output filenames
//!
//! Filenames are pure functions of the request's identifying fields.
//! Catalog size labels may contain `/` (imperial thread designations), which
//! is replaced before use in a path.

use mc_cad::ComponentParams;

use crate::constants::SAFE_SEPARATOR;

/// Replace path-unsafe separator characters in a catalog label
pub fn sanitize_label(label: &str) -> String {
    label.replace(['/', '\\'], SAFE_SEPARATOR)
}

/// The download filename for a component
///
/// Parametric gears use the subtype name; catalog-backed components combine
/// class and size, with the screw length appended for disambiguation.
pub fn suggested_name(params: &ComponentParams) -> String {
    match params {
        ComponentParams::SpurGear { .. } => "spur_gear.step".to_string(),
        ComponentParams::BevelGear { .. } => "bevel_gear.step".to_string(),
        ComponentParams::CrossedHelicalGear { .. } => "crossed_helical_gear.step".to_string(),
        ComponentParams::RingGear { .. } => "ring_gear.step".to_string(),
        ComponentParams::RackGear { .. } => "rack_gear.step".to_string(),
        ComponentParams::Worm { .. } => "worm_gear.step".to_string(),
        ComponentParams::Bearing { class, size, .. }
        | ComponentParams::Nut { class, size, .. }
        | ComponentParams::Washer { class, size, .. } => {
            format!("{}_{}.step", class, sanitize_label(size))
        }
        ComponentParams::Screw {
            class,
            size,
            length,
            ..
        } => format!("{}_{}_x{}.step", class, sanitize_label(size), length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_names() {
        let params = ComponentParams::SpurGear {
            module: 1.0,
            teeth_number: 19,
            width: 5.0,
            bore_d: 5.0,
        };
        assert_eq!(suggested_name(&params), "spur_gear.step");
    }

    #[test]
    fn test_nut_name_sanitizes_size() {
        let params = ComponentParams::Nut {
            class: "Square Nut".into(),
            size: "1/4-20".into(),
            fastener_type: "asme18.2.2".into(),
            simple: true,
        };
        assert_eq!(suggested_name(&params), "Square Nut_1_4-20.step");
    }

    #[test]
    fn test_screw_name_embeds_length() {
        let params = ComponentParams::Screw {
            class: "Socket Head Cap Screw".into(),
            size: "M5-0.8".into(),
            fastener_type: "iso4762".into(),
            length: 10.0,
            simple: true,
        };
        assert_eq!(
            suggested_name(&params),
            "Socket Head Cap Screw_M5-0.8_x10.step"
        );
    }

    #[test]
    fn test_bearing_name() {
        let params = ComponentParams::Bearing {
            class: "Single Row Deep Groove Ball Bearing".into(),
            size: "M8-22-7".into(),
            bearing_type: "SKT".into(),
        };
        assert_eq!(
            suggested_name(&params),
            "Single Row Deep Groove Ball Bearing_M8-22-7.step"
        );
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("1/4-20"), "1_4-20");
        assert_eq!(sanitize_label("M5-0.8"), "M5-0.8");
    }
}
