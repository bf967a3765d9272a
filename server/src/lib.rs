//! This crate contains all shared fullstack server functions.
//!
//! Client builds compile only the function signatures; the bodies run
//! on the server, where they reach Postgres and the analysis backend.

use analysis::{FaceAnalysis, Frame};
use dioxus::prelude::*;

#[cfg(feature = "server")]
mod application;
#[cfg(feature = "server")]
mod clients;
#[cfg(feature = "server")]
mod database;
#[cfg(feature = "server")]
mod settings;

#[cfg(feature = "server")]
pub use application::launch;

#[cfg(feature = "server")]
fn backend_client() -> Result<clients::BackendClient, ServerFnError> {
    let settings = settings::Settings::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    clients::BackendClient::from_settings(&settings).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Run a captured photo through the analysis backend.
#[server(AnalyzeFace)]
pub async fn analyze_face(image: String) -> Result<FaceAnalysis, ServerFnError> {
    let client = backend_client()?;
    let report = client
        .analyze_complete(&image)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(report.into_analysis())
}

/// Render the analysis report as a PDF document.
#[server(GeneratePdfReport)]
pub async fn generate_pdf_report(
    image: String,
    face_analysis: FaceAnalysis,
    recommended_frames: Vec<Frame>,
) -> Result<Vec<u8>, ServerFnError> {
    tracing::info!(frames = recommended_frames.len(), "rendering pdf report");
    let client = backend_client()?;
    client
        .generate_pdf_report(&image, &face_analysis, &recommended_frames)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Status string reported by the analysis backend's liveness probe.
#[server(BackendStatus)]
pub async fn backend_status() -> Result<String, ServerFnError> {
    let client = backend_client()?;
    client
        .status()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
