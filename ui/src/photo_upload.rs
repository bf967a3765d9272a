//! Photo capture, expressed as a file upload.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;

use crate::icons::FaCamera;
use crate::Icon;

/// File input that reads one image and emits it as a data URL.
#[component]
pub fn PhotoUpload(
    on_capture: EventHandler<String>,
    #[props(default)] captured: Option<String>,
) -> Element {
    let mut reading = use_signal(|| false);

    let handle_change = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        reading.set(true);
        match engine.read_file(&name).await {
            Some(bytes) => {
                let mime = mime_for(&name);
                let encoded = STANDARD.encode(&bytes);
                on_capture.call(format!("data:{mime};base64,{encoded}"));
            }
            None => {
                tracing::warn!("could not read selected file {name}");
            }
        }
        reading.set(false);
    };

    rsx! {
        div {
            class: "photo-upload",
            label {
                class: "photo-upload__label",
                Icon { icon: FaCamera, width: 18, height: 18 }
                span {
                    if reading() {
                        "Reading photo..."
                    } else {
                        "Choose a photo"
                    }
                }
                input {
                    r#type: "file",
                    accept: "image/*",
                    style: "display: none;",
                    onchange: handle_change,
                }
            }
            if let Some(image) = captured {
                img {
                    class: "photo-upload__preview",
                    src: "{image}",
                    alt: "Captured photo",
                }
            }
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_their_mime() {
        assert_eq!(mime_for("selfie.png"), "image/png");
        assert_eq!(mime_for("selfie.WEBP"), "image/webp");
        assert_eq!(mime_for("selfie.jpg"), "image/jpeg");
    }

    #[test]
    fn unknown_or_missing_extension_defaults_to_jpeg() {
        assert_eq!(mime_for("selfie"), "image/jpeg");
        assert_eq!(mime_for("selfie.heic"), "image/jpeg");
    }
}
