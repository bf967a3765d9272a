//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod components;
pub use components::{Badge, Button, ButtonVariant, Card, ProgressBar};

mod progress;
pub use progress::GenerationProgress;

mod download;
pub use download::{save_document, REPORT_FILE_NAME};

mod analysis_result;
pub use analysis_result::AnalysisResult;

mod photo_upload;
pub use photo_upload::PhotoUpload;
