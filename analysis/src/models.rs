//! # Domain models for face analysis and eyewear frames
//!
//! The analysis and frame types are `Serialize + Deserialize` so they
//! can cross the server/client boundary via Dioxus server functions.
//! They serialize with camelCase field names because the same structs form
//! the JSON body of the outbound PDF-generation request, whose contract
//! (`faceAnalysis`, `recommendedFrames`, `imageUrl`, ...) is owned by
//! the external report service.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`FaceAnalysis`] | The completed analysis of one photo: shape label, skin-tone label, and display-ready measurements. Produced by the external analyzer, never computed here. |
//! | [`FaceMeasurements`] | Facial measurements as display strings with unit suffixes (e.g. `"14.2 cm"`). |
//! | [`Frame`] | One eyewear catalog item with commerce metadata and physical measurements. Owned by the catalog; this crate only reads and filters it. |
//! | [`FrameMeasurements`] | Frame measurements as display strings with `mm` suffixes. |
//! | [`FrameColor`] | A recommended frame color swatch rendered by the result view. |

use serde::{Deserialize, Serialize};

/// Completed face analysis for a single captured photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnalysis {
    /// Shape label, e.g. "Oval" or "Square".
    pub face_shape: String,
    /// Skin-tone label, e.g. "Warm".
    pub skin_tone: String,
    pub measurements: FaceMeasurements,
}

/// Facial measurements as display strings, unit suffix included.
///
/// Empty strings mean the analyzer could not produce the value; the
/// view renders those as "Not available".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMeasurements {
    /// e.g. "14.2 cm"
    pub face_width: String,
    /// e.g. "19.8 cm"
    pub face_height: String,
    /// e.g. "6.1 cm"
    pub eye_distance: String,
    /// e.g. "2.4 cm"
    pub eye_height: String,
}

/// An eyewear frame from the user's catalog (or a synthesized default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: String,
    pub name: String,
    /// Style label, e.g. "Rectangular".
    pub style: String,
    pub description: String,
    /// Display price, e.g. "$129.99".
    pub price: String,
    pub image_url: String,
    pub purchase_link: String,
    /// Inactive frames are never displayed.
    pub is_active: bool,
    pub measurements: FrameMeasurements,
}

/// Physical frame measurements as display strings with `mm` suffixes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMeasurements {
    /// Total front width, e.g. "140mm".
    pub width: String,
    /// Lens height, e.g. "50mm".
    pub height: String,
    /// Bridge width, e.g. "18mm".
    pub bridge: String,
    /// Temple length, e.g. "145mm".
    pub temple: String,
}

/// A recommended frame color swatch. Render-only, never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub description: &'static str,
}

/// Static color palette shown on the result screen.
pub const RECOMMENDED_COLORS: [FrameColor; 2] = [
    FrameColor {
        name: "Classic Black",
        hex: "#000000",
        description: "Elegant and versatile",
    },
    FrameColor {
        name: "Silver Gray",
        hex: "#C0C0C0",
        description: "Refined and contemporary",
    },
];
