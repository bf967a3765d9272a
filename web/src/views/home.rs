//! Landing view: hero copy, photo upload, and the analyze action.

use dioxus::prelude::*;
use ui::{Button, ButtonVariant, PhotoUpload};

use crate::{AppState, Route};

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut analyzing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let analyze = move |_| {
        if analyzing() {
            return;
        }
        let Some(image) = state().captured_image else {
            error.set(Some("Choose a photo first.".to_string()));
            return;
        };
        analyzing.set(true);
        error.set(None);
        spawn(async move {
            match server::analyze_face(image).await {
                Ok(result) => {
                    state.with_mut(|s| s.analysis = Some(result));
                    nav.push(Route::Analysis {});
                }
                Err(e) => {
                    tracing::error!("analysis failed: {e}");
                    error.set(Some(
                        "We could not analyze that photo. Please try again.".to_string(),
                    ));
                }
            }
            analyzing.set(false);
        });
    };

    rsx! {
        div {
            class: "home",
            section {
                class: "hero",
                h1 { "OptiScan" }
                p {
                    class: "hero__tagline",
                    "Find the frames that fit your face. Upload a front-facing photo and let the analyzer do the rest."
                }
            }

            PhotoUpload {
                captured: state().captured_image,
                on_capture: move |image| {
                    state.with_mut(|s| {
                        s.captured_image = Some(image);
                        s.analysis = None;
                    });
                },
            }

            Button {
                variant: ButtonVariant::Primary,
                disabled: analyzing(),
                onclick: analyze,
                if analyzing() {
                    "Analyzing..."
                } else {
                    "Analyze my face"
                }
            }

            if let Some(message) = error() {
                div {
                    class: "home__error",
                    "{message}"
                }
            }
        }
    }
}
