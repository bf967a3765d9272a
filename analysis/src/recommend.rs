//! # Frame selection and compatibility scoring
//!
//! Pure functions over [`Frame`] and [`FaceAnalysis`]. The result view
//! calls [`recommended_frames`] once per analysis and renders one card
//! per frame with its [`compatibility`] score.

use crate::models::{FaceAnalysis, Frame, FrameMeasurements};

/// Frame width assumed when a frame carries no parseable width.
const FALLBACK_FRAME_WIDTH_MM: f64 = 140.0;

/// Face width assumed when the analysis carries no parseable width.
const FALLBACK_FACE_WIDTH_CM: f64 = 18.5;

/// Selects the frames to show for a completed analysis.
///
/// Active catalog frames win outright; the built-in trio only appears
/// when the catalog has nothing active to offer. Catalog order is
/// preserved as-is.
pub fn recommended_frames(user_frames: &[Frame], face_shape: &str) -> Vec<Frame> {
    let active: Vec<Frame> = user_frames
        .iter()
        .filter(|frame| frame.is_active)
        .cloned()
        .collect();
    if active.is_empty() {
        default_frames(face_shape)
    } else {
        active
    }
}

/// The three built-in frames shown when the catalog is empty.
///
/// Descriptions mention the detected face shape so the fallback still
/// reads as personalized.
pub fn default_frames(face_shape: &str) -> Vec<Frame> {
    let shape = face_shape.to_lowercase();
    vec![
        Frame {
            id: "default-1".into(),
            name: "Classic Rectangular".into(),
            style: "Rectangular".into(),
            description: format!("A versatile choice that complements {shape} face shapes"),
            price: "$129.99".into(),
            image_url: "/placeholder-frame1.jpg".into(),
            purchase_link: String::new(),
            is_active: true,
            measurements: FrameMeasurements {
                width: "140mm".into(),
                height: "50mm".into(),
                bridge: "18mm".into(),
                temple: "145mm".into(),
            },
        },
        Frame {
            id: "default-2".into(),
            name: "Modern Round".into(),
            style: "Round".into(),
            description: format!("Soft curves that balance {shape} features"),
            price: "$159.99".into(),
            image_url: "/placeholder-frame2.jpg".into(),
            purchase_link: String::new(),
            is_active: true,
            measurements: FrameMeasurements {
                width: "135mm".into(),
                height: "45mm".into(),
                bridge: "16mm".into(),
                temple: "140mm".into(),
            },
        },
        Frame {
            id: "default-3".into(),
            name: "Premium Aviator".into(),
            style: "Aviator".into(),
            description: format!("A timeless style suited to {shape} faces"),
            price: "$199.99".into(),
            image_url: "/placeholder-frame3.jpg".into(),
            purchase_link: String::new(),
            is_active: true,
            measurements: FrameMeasurements {
                width: "142mm".into(),
                height: "48mm".into(),
                bridge: "19mm".into(),
                temple: "148mm".into(),
            },
        },
    ]
}

/// Compatibility score between a frame and a face, as an integer
/// percentage in `70..=95`.
///
/// The score penalizes the absolute difference between frame width and
/// face width (both in millimeters) at two points per millimeter.
/// Unparseable measurements fall back to typical values rather than
/// failing, so every card always shows a score.
pub fn compatibility(frame: &Frame, analysis: &FaceAnalysis) -> u8 {
    let frame_width_mm =
        parse_leading_number(&frame.measurements.width).unwrap_or(FALLBACK_FRAME_WIDTH_MM);
    let face_width_cm = parse_leading_number(&analysis.measurements.face_width)
        .unwrap_or(FALLBACK_FACE_WIDTH_CM);
    let face_width_mm = face_width_cm * 10.0;
    let diff = (frame_width_mm - face_width_mm).abs();
    (100.0 - diff * 2.0).clamp(70.0, 95.0).round() as u8
}

/// Parses the leading numeric portion of a measurement string, ignoring
/// any unit suffix such as `mm` or `cm`.
fn parse_leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaceMeasurements;

    fn analysis_with_width(face_width: &str) -> FaceAnalysis {
        FaceAnalysis {
            face_shape: "Oval".into(),
            skin_tone: "Warm".into(),
            measurements: FaceMeasurements {
                face_width: face_width.into(),
                ..Default::default()
            },
        }
    }

    fn frame_with_width(width: &str) -> Frame {
        Frame {
            id: "f1".into(),
            name: "Test".into(),
            style: "Rectangular".into(),
            description: String::new(),
            price: "$0".into(),
            image_url: String::new(),
            purchase_link: String::new(),
            is_active: true,
            measurements: FrameMeasurements {
                width: width.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn perfect_match_caps_at_95() {
        let score = compatibility(&frame_with_width("140mm"), &analysis_with_width("14 cm"));
        assert_eq!(score, 95);
    }

    #[test]
    fn large_mismatch_floors_at_70() {
        let score = compatibility(&frame_with_width("300mm"), &analysis_with_width("10 cm"));
        assert_eq!(score, 70);
    }

    #[test]
    fn moderate_mismatch_scores_between_bounds() {
        // 140mm frame vs 150mm face: diff 10, 100 - 20 = 80.
        let score = compatibility(&frame_with_width("140mm"), &analysis_with_width("15 cm"));
        assert_eq!(score, 80);
    }

    #[test]
    fn unparseable_measurements_use_fallbacks() {
        // 140mm vs 185mm: diff 45 clamps to 70.
        let score = compatibility(&frame_with_width("wide"), &analysis_with_width(""));
        assert_eq!(score, 70);
    }

    #[test]
    fn decimal_widths_parse() {
        let score = compatibility(&frame_with_width("142.5mm"), &analysis_with_width("14.25 cm"));
        assert_eq!(score, 95);
    }

    #[test]
    fn active_frames_win_over_defaults() {
        let mut inactive = frame_with_width("140mm");
        inactive.is_active = false;
        let active = frame_with_width("135mm");
        let picked = recommended_frames(&[inactive, active.clone()], "Oval");
        assert_eq!(picked, vec![active]);
    }

    #[test]
    fn catalog_order_is_preserved() {
        let first = Frame {
            id: "a".into(),
            ..frame_with_width("140mm")
        };
        let second = Frame {
            id: "b".into(),
            ..frame_with_width("135mm")
        };
        let picked = recommended_frames(&[first, second], "Round");
        let ids: Vec<&str> = picked.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn empty_catalog_falls_back_to_three_defaults() {
        let picked = recommended_frames(&[], "Square");
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|f| f.is_active));
        assert!(picked[0].description.contains("square"));
    }

    #[test]
    fn inactive_only_catalog_falls_back() {
        let mut frame = frame_with_width("140mm");
        frame.is_active = false;
        let picked = recommended_frames(&[frame], "Heart");
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].id, "default-1");
    }
}
