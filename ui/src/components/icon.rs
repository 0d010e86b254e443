use dioxus::prelude::*;

/// Named icon glyph. The stylesheet maps `data-icon` values to artwork.
#[component]
pub fn Icon(name: String, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        span {
            class: class.as_deref(),
            role: "img",
            aria_hidden: "true",
            "data-icon": "{name}",
        }
    }
}
