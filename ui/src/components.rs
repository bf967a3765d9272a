//! Small shared presentation primitives styled by the app stylesheet.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Card(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}

#[component]
pub fn Badge(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        span {
            class: "badge {class}",
            {children}
        }
    }
}

/// Horizontal progress bar, `value` in `0..=100`.
#[component]
pub fn ProgressBar(value: u8) -> Element {
    rsx! {
        div {
            class: "progress-track",
            div {
                class: "progress-fill",
                style: "width: {value}%;",
            }
        }
    }
}
