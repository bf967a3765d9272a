//! HTTP client for the external face-analysis backend.
//!
//! The backend owns the computer-vision pipeline and the PDF renderer;
//! this module only speaks its JSON contract. Analyzer responses come
//! wrapped in a `{ success, data, error }` envelope with millimeter
//! measurements; [`AnalyzerReport::into_analysis`] converts them into
//! the display strings the rest of the workspace consumes.

use std::time::Duration;

use analysis::units::format_cm;
use analysis::{FaceAnalysis, FaceMeasurements, Frame};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend answered with status {code}")]
    Status { code: reqwest::StatusCode },
    #[error("backend returned an empty document")]
    EmptyDocument,
    #[error("backend rejected the request: {message}")]
    Rejected { message: String },
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    image: &'a str,
}

/// Body of the outbound report request. Field names follow the JSON
/// contract of the report renderer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PdfReportRequest<'a> {
    image: &'a str,
    face_analysis: &'a FaceAnalysis,
    recommended_frames: &'a [Frame],
}

/// Envelope every analyzer endpoint answers with.
#[derive(Debug, Deserialize)]
struct AnalyzerEnvelope {
    success: bool,
    data: Option<AnalyzerReport>,
    error: Option<String>,
}

/// Raw analyzer output. Measurements arrive in millimeters; a missing
/// value means the landmark could not be detected in the photo.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerReport {
    face_shape: String,
    skin_tone: String,
    #[serde(default)]
    measurements: AnalyzerMeasurements,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzerMeasurements {
    face_width_mm: Option<f64>,
    face_height_mm: Option<f64>,
    eye_distance_mm: Option<f64>,
    eye_height_mm: Option<f64>,
}

impl AnalyzerReport {
    /// Converts the raw millimeter report into the display-ready
    /// analysis. Undetected measurements become empty strings, which
    /// the result view renders as "Not available".
    pub fn into_analysis(self) -> FaceAnalysis {
        FaceAnalysis {
            face_shape: self.face_shape,
            skin_tone: self.skin_tone,
            measurements: FaceMeasurements {
                face_width: display_cm(self.measurements.face_width_mm),
                face_height: display_cm(self.measurements.face_height_mm),
                eye_distance: display_cm(self.measurements.eye_distance_mm),
                eye_height: display_cm(self.measurements.eye_height_mm),
            },
        }
    }
}

fn display_cm(millimeters: Option<f64>) -> String {
    millimeters.map(|mm| format_cm(mm / 10.0)).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            base: base.into(),
            http,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, BackendError> {
        Self::new(settings.services.backend.clone())
    }

    /// Full analysis of one captured photo.
    pub async fn analyze_complete(&self, image: &str) -> Result<AnalyzerReport, BackendError> {
        let response = self
            .http
            .post(format!("{}/analyze-complete", self.base))
            .json(&AnalyzeRequest { image })
            .send()
            .await?;
        let status = response.status();
        let envelope: AnalyzerEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            // Some failure paths answer with a non-JSON body; fall
            // back to the status code in that case.
            Err(_) if !status.is_success() => {
                return Err(BackendError::Status { code: status })
            }
            Err(error) => return Err(error.into()),
        };
        match envelope {
            AnalyzerEnvelope {
                success: true,
                data: Some(report),
                ..
            } => Ok(report),
            AnalyzerEnvelope { error, .. } => Err(BackendError::Rejected {
                message: error.unwrap_or_else(|| "analysis produced no result".into()),
            }),
        }
    }

    /// Renders the report PDF for a completed analysis.
    ///
    /// A 2xx answer with an empty body still counts as a failure, the
    /// renderer produces at least a one-page document.
    pub async fn generate_pdf_report(
        &self,
        image: &str,
        face_analysis: &FaceAnalysis,
        recommended_frames: &[Frame],
    ) -> Result<Vec<u8>, BackendError> {
        let response = self
            .http
            .post(format!("{}/generate-pdf-report", self.base))
            .header(reqwest::header::ACCEPT, "application/pdf")
            .json(&PdfReportRequest {
                image,
                face_analysis,
                recommended_frames,
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { code: status });
        }
        let document = response.bytes().await?;
        if document.is_empty() {
            return Err(BackendError::EmptyDocument);
        }
        Ok(document.to_vec())
    }

    /// Liveness probe against the backend service.
    pub async fn status(&self) -> Result<String, BackendError> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }
        let response = self
            .http
            .get(format!("{}/health", self.base))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { code: status });
        }
        let health: Health = response.json().await?;
        Ok(health.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_measurements_convert_to_display_centimeters() {
        let report = AnalyzerReport {
            face_shape: "Oval".into(),
            skin_tone: "Warm".into(),
            measurements: AnalyzerMeasurements {
                face_width_mm: Some(142.0),
                face_height_mm: Some(198.4),
                eye_distance_mm: Some(61.0),
                eye_height_mm: None,
            },
        };
        let analysis = report.into_analysis();
        assert_eq!(analysis.face_shape, "Oval");
        assert_eq!(analysis.measurements.face_width, "14.2 cm");
        assert_eq!(analysis.measurements.face_height, "19.8 cm");
        assert_eq!(analysis.measurements.eye_distance, "6.1 cm");
        assert_eq!(analysis.measurements.eye_height, "");
    }

    #[test]
    fn envelope_without_measurements_still_deserializes() {
        let json = r#"{"success":true,"data":{"faceShape":"Square","skinTone":"Cool"}}"#;
        let envelope: AnalyzerEnvelope = serde_json::from_str(json).unwrap();
        let report = envelope.data.unwrap();
        assert_eq!(report.into_analysis().measurements.face_width, "");
    }
}
