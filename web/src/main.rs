use analysis::FaceAnalysis;
use dioxus::prelude::*;

use views::{Analysis, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        server::launch(App);
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

/// Analysis state shared between views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Data-URL encoded photo chosen on the Home view.
    pub captured_image: Option<String>,
    /// Set once the analyzer has answered.
    pub analysis: Option<FaceAnalysis>,
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
