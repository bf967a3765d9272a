//! Results view for a completed analysis.

use dioxus::prelude::*;
use ui::AnalysisResult;

use crate::{AppState, Route};

#[component]
pub fn Analysis() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    // Deep links without a completed analysis land back on Home.
    let Some(analysis) = state().analysis else {
        nav.replace(Route::Home {});
        return rsx! {};
    };

    rsx! {
        AnalysisResult {
            face_analysis: analysis,
            captured_image: state().captured_image,
            on_new_analysis: move |_| {
                state.set(AppState::default());
                nav.push(Route::Home {});
            },
        }
    }
}
