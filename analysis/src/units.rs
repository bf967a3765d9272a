//! # Pixel-to-unit conversion and optometry sizing
//!
//! The analyzer reports landmark distances in pixels. These helpers
//! turn them into centimeters or millimeters through a calibration
//! factor and derive the sizing labels an optician would quote.

/// Calibration assumed when no reference object is in frame.
pub const DEFAULT_PIXELS_PER_CM: f64 = 26.2;

/// Pixel-to-real-unit calibration for one photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactor {
    pub pixels_per_cm: f64,
}

impl Default for ConversionFactor {
    fn default() -> Self {
        Self {
            pixels_per_cm: DEFAULT_PIXELS_PER_CM,
        }
    }
}

impl ConversionFactor {
    pub fn new(pixels_per_cm: f64) -> Self {
        Self { pixels_per_cm }
    }

    pub fn pixels_per_mm(&self) -> f64 {
        self.pixels_per_cm / 10.0
    }

    /// Approximate capture resolution implied by the calibration.
    pub fn estimated_dpi(&self) -> f64 {
        self.pixels_per_cm * 2.54
    }

    pub fn to_cm(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_cm
    }

    pub fn to_mm(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_mm()
    }
}

/// A sizing recommendation with its label and millimeter range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRecommendation {
    pub label: &'static str,
    pub range_mm: &'static str,
}

/// Bridge size from the inter-pupillary distance in centimeters.
pub fn bridge_recommendation(pupil_distance_cm: f64) -> SizeRecommendation {
    if pupil_distance_cm < 5.5 {
        SizeRecommendation {
            label: "Narrow",
            range_mm: "16-18",
        }
    } else if pupil_distance_cm < 6.0 {
        SizeRecommendation {
            label: "Standard",
            range_mm: "18-20",
        }
    } else {
        SizeRecommendation {
            label: "Wide",
            range_mm: "20-22",
        }
    }
}

/// Lens caliber from the cheekbone width in centimeters.
///
/// The usable lens width is taken as 90% of the cheekbone span.
pub fn caliber_recommendation(cheek_width_cm: f64) -> SizeRecommendation {
    let caliber_mm = cheek_width_cm * 0.9 * 10.0;
    if caliber_mm < 50.0 {
        SizeRecommendation {
            label: "Small",
            range_mm: "48-52",
        }
    } else if caliber_mm < 56.0 {
        SizeRecommendation {
            label: "Medium",
            range_mm: "52-56",
        }
    } else {
        SizeRecommendation {
            label: "Large",
            range_mm: "56-60",
        }
    }
}

/// Absolute height difference between the two pupils in centimeters.
pub fn pupil_asymmetry_cm(left_height_cm: f64, right_height_cm: f64) -> f64 {
    (left_height_cm - right_height_cm).abs()
}

/// Formats a centimeter value the way the result view displays it,
/// one decimal with a unit suffix.
pub fn format_cm(value: f64) -> String {
    format!("{value:.1} cm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration_converts_typical_face_width() {
        let factor = ConversionFactor::default();
        let cm = factor.to_cm(367.0);
        assert!((cm - 14.0).abs() < 0.1);
    }

    #[test]
    fn mm_is_ten_times_cm() {
        let factor = ConversionFactor::new(30.0);
        assert!((factor.to_mm(300.0) - factor.to_cm(300.0) * 10.0).abs() < 1e-9);
    }

    #[test]
    fn dpi_follows_calibration() {
        let factor = ConversionFactor::new(100.0);
        assert!((factor.estimated_dpi() - 254.0).abs() < 1e-9);
    }

    #[test]
    fn bridge_bands() {
        assert_eq!(bridge_recommendation(5.2).label, "Narrow");
        assert_eq!(bridge_recommendation(5.7).label, "Standard");
        assert_eq!(bridge_recommendation(5.7).range_mm, "18-20");
        assert_eq!(bridge_recommendation(6.3).label, "Wide");
    }

    #[test]
    fn caliber_bands() {
        assert_eq!(caliber_recommendation(5.0).label, "Small");
        assert_eq!(caliber_recommendation(6.0).label, "Medium");
        assert_eq!(caliber_recommendation(7.0).label, "Large");
        assert_eq!(caliber_recommendation(7.0).range_mm, "56-60");
    }

    #[test]
    fn asymmetry_is_symmetric() {
        assert_eq!(pupil_asymmetry_cm(2.4, 2.1), pupil_asymmetry_cm(2.1, 2.4));
        assert!((pupil_asymmetry_cm(2.4, 2.1) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn cm_formatting_keeps_one_decimal() {
        assert_eq!(format_cm(14.25), "14.2 cm");
        assert_eq!(format_cm(14.0), "14.0 cm");
    }
}
