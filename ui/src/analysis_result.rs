//! Result view shown after an analysis completes.
//!
//! Renders the detected measurements, face structure, recommended
//! colors and frames, and drives the PDF report download.

use analysis::models::RECOMMENDED_COLORS;
use analysis::{compatibility, recommended_frames, FaceAnalysis, Frame};
use dioxus::prelude::*;

use crate::components::{Badge, Button, ButtonVariant, Card, ProgressBar};
use crate::download::{save_document, REPORT_FILE_NAME};
use crate::icons::{FaArrowsRotate, FaCheck, FaDownload};
use crate::progress::{GenerationProgress, TICK_MILLIS};
use crate::Icon;

#[component]
pub fn AnalysisResult(
    face_analysis: FaceAnalysis,
    #[props(default)] user_frames: Vec<Frame>,
    #[props(default)] captured_image: Option<String>,
    on_new_analysis: EventHandler<()>,
) -> Element {
    let mut generating = use_signal(|| false);
    let mut show_progress = use_signal(|| false);
    let mut progress = use_signal(GenerationProgress::default);
    let mut notice = use_signal(|| None::<String>);

    let from_catalog = user_frames.iter().any(|frame| frame.is_active);
    let shape = face_analysis.face_shape.clone();
    let frames =
        use_memo(use_reactive!(|(user_frames, shape)| recommended_frames(
            &user_frames,
            &shape
        )));

    let report_analysis = face_analysis.clone();
    let report_image = captured_image.clone();
    let generate_pdf = move |_| {
        // One generation at a time; the disabled button alone does not
        // guard against queued events.
        if generating() {
            return;
        }
        let Some(image) = report_image.clone() else {
            notice.set(Some(
                "No captured photo is available for the report.".to_string(),
            ));
            return;
        };
        let analysis = report_analysis.clone();
        let recommended = frames();

        generating.set(true);
        show_progress.set(true);
        progress.set(GenerationProgress::default());
        notice.set(None);

        spawn(async move {
            let ticker = spawn(async move {
                loop {
                    sleep_ms(TICK_MILLIS).await;
                    progress.with_mut(|p| p.tick());
                }
            });

            let result = server::generate_pdf_report(image, analysis, recommended).await;
            // The ticker must not outlive the call, whichever way it went.
            ticker.cancel();

            match result {
                Ok(document) if !document.is_empty() => {
                    progress.with_mut(|p| p.settle());
                    match save_document(&document, REPORT_FILE_NAME) {
                        Ok(()) => {
                            progress.with_mut(|p| p.finish());
                            sleep_ms(1000).await;
                        }
                        Err(error) => {
                            tracing::error!("report download failed: {error}");
                            notice.set(Some("The report could not be saved.".to_string()));
                        }
                    }
                }
                Ok(_) => {
                    tracing::warn!("report service returned an empty document");
                    notice.set(Some(
                        "Report generation failed. Please try again.".to_string(),
                    ));
                }
                Err(error) => {
                    tracing::error!("report generation failed: {error}");
                    notice.set(Some(
                        "Report generation failed. Please try again.".to_string(),
                    ));
                }
            }

            generating.set(false);
            show_progress.set(false);
            progress.with_mut(|p| p.reset());
        });
    };

    rsx! {
        div {
            class: "result",

            header {
                class: "result__header",
                span {
                    class: "result__check",
                    Icon { icon: FaCheck, width: 20, height: 20 }
                }
                h2 { "Analysis complete" }
                p {
                    if from_catalog {
                        "Based on your facial features, here are matching frames from your catalog."
                    } else {
                        "Based on your facial features, here are our recommendations."
                    }
                }
            }

            Card {
                class: "result__measurements",
                h3 { "Detected facial measurements" }
                div {
                    class: "measure-grid",
                    MeasurementCell { label: "Face width", value: face_analysis.measurements.face_width.clone() }
                    MeasurementCell { label: "Face height", value: face_analysis.measurements.face_height.clone() }
                    MeasurementCell { label: "Eye distance", value: face_analysis.measurements.eye_distance.clone() }
                    MeasurementCell { label: "Eye height", value: face_analysis.measurements.eye_height.clone() }
                }
            }

            div {
                class: "result__structure",
                Card {
                    h3 { "Face shape" }
                    p { class: "structure-value", "{face_analysis.face_shape}" }
                }
                Card {
                    h3 { "Skin tone" }
                    p { class: "structure-value", "{face_analysis.skin_tone}" }
                }
            }

            Card {
                class: "result__colors",
                h3 { "Recommended colors" }
                div {
                    class: "color-row",
                    for color in RECOMMENDED_COLORS {
                        div {
                            class: "color-swatch",
                            span {
                                class: "color-swatch__chip",
                                style: "background-color: {color.hex};",
                            }
                            div {
                                span { class: "color-swatch__name", "{color.name}" }
                                span { class: "color-swatch__desc", "{color.description}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "result__frames",
                h3 { "Recommended frames" }
                div {
                    class: "frame-grid",
                    for frame in frames() {
                        Card {
                            class: "frame-card",
                            img {
                                class: "frame-card__image",
                                src: "{frame.image_url}",
                                alt: "{frame.name}",
                            }
                            div {
                                class: "frame-card__title",
                                h4 { "{frame.name}" }
                                Badge {
                                    class: "badge--score",
                                    "{compatibility(&frame, &face_analysis)}% match"
                                }
                            }
                            Badge { class: "badge--style", "{frame.style}" }
                            p { class: "frame-card__desc", "{frame.description}" }
                            div {
                                class: "frame-card__measures",
                                span { "Width: {frame.measurements.width}" }
                                span { "Height: {frame.measurements.height}" }
                                span { "Bridge: {frame.measurements.bridge}" }
                                span { "Temple: {frame.measurements.temple}" }
                            }
                            div {
                                class: "frame-card__footer",
                                span { class: "frame-card__price", "{frame.price}" }
                                if !frame.purchase_link.is_empty() {
                                    a {
                                        class: "frame-card__link",
                                        href: "{frame.purchase_link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "View product"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "result__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: generating(),
                    onclick: generate_pdf,
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    if generating() {
                        "Generating report..."
                    } else {
                        "Download PDF report"
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_new_analysis.call(()),
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    "New analysis"
                }
            }

            if let Some(message) = notice() {
                div {
                    class: "result__notice",
                    "{message}"
                }
            }

            if show_progress() {
                Card {
                    class: "result__progress",
                    p { "Generating your report..." }
                    ProgressBar { value: progress().value() }
                    span { class: "result__progress-pct", "{progress().value()}%" }
                }
            }
        }
    }
}

/// One cell of the measurements grid. Empty analyzer output renders
/// as "Not available".
#[component]
fn MeasurementCell(label: String, value: String) -> Element {
    let display = if value.trim().is_empty() {
        "Not available".to_string()
    } else {
        value
    };
    rsx! {
        div {
            class: "measure-cell",
            span { class: "measure-cell__label", "{label}" }
            span { class: "measure-cell__value", "{display}" }
        }
    }
}

async fn sleep_ms(millis: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(millis)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
}
