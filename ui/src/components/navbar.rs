//! Navigation toolbar with a back button.
//!
//! ```ignore
//! ConfigProvider { config,
//!     Navbar {
//!         mode: Some("ios".to_string()),
//!         onback: move |_| navigator().go_back(),
//!         end: rsx! { Button { "Edit" } },
//!         h1 { "Inbox" }
//!     }
//! }
//! ```
//!
//! Layout, in order: background layer, back button, the `start`,
//! `mode_start`, `mode_end` and `end` insertion points, then a content wrapper
//! holding `children`. The back button is always rendered so layout does not
//! shift; `hide_back_button` only toggles its `hidden` attribute.
//!
//! Any [`Button`](crate::components::Button) rendered below the navbar picks
//! up [`ToolbarContext`] when it is created and styles itself as a bar button,
//! following the navbar's current mode.

use dioxus::prelude::*;

use crate::components::Icon;
use crate::core::config::keys;
use crate::core::{resolve_back_button, themed_classes, use_config, BackButtonContent};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Context a navbar provides to its subtree.
///
/// The mode follows the navbar on every render; the registration count only
/// ever grows, one step per button instance.
#[derive(Clone, Copy, Debug)]
pub struct ToolbarContext {
    mode: Signal<Option<String>>,
    marked: Signal<usize>,
}

impl ToolbarContext {
    fn new(mode: Option<String>) -> Self {
        Self {
            mode: Signal::new(mode),
            marked: Signal::new(0),
        }
    }

    /// Current theme mode of the owning navbar. Subscribes the caller.
    pub fn mode(&self) -> Option<String> {
        self.mode.read().clone()
    }

    fn sync_mode(mut self, mode: Option<&str>) {
        if self.mode.peek().as_deref() != mode {
            self.mode.set(mode.map(str::to_string));
        }
    }

    pub(crate) fn mark_button(mut self) {
        *self.marked.write() += 1;
    }

    /// How many buttons have registered as bar buttons.
    pub fn marked_buttons(&self) -> usize {
        *self.marked.peek()
    }
}

/// Stylesheet for toolbars and buttons. Mount once near the app root.
#[component]
pub fn ToolbarStylesheet() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
    }
}

#[component]
pub fn Navbar(
    #[props(default)] mode: Option<String>,
    #[props(default)] color: Option<String>,
    #[props(default)] hide_back_button: bool,
    #[props(default)] back_button_text: Option<String>,
    #[props(default)] back_button_icon: Option<String>,
    #[props(default)] hidden: bool,
    /// Called after a back-button click has been swallowed.
    #[props(default)]
    onback: Option<EventHandler<()>>,
    #[props(default)] start: Option<Element>,
    #[props(default)] mode_start: Option<Element>,
    #[props(default)] mode_end: Option<Element>,
    #[props(default)] end: Option<Element>,
    children: Element,
) -> Element {
    crate::i18n::init();

    let config = use_config();
    let mode = mode
        .filter(|m| !m.is_empty())
        .or_else(|| Some(config.get(keys::MODE, "")).filter(|m| !m.is_empty()));
    let mode = mode.as_deref();
    let color = color.as_deref();

    let toolbar = use_context_provider(|| ToolbarContext::new(mode.map(str::to_string)));
    toolbar.sync_mode(mode);

    let host_css = themed_classes(mode, color, "toolbar").with_flag(
        "statusbar-padding",
        config.get_boolean(keys::STATUSBAR_PADDING),
    );
    let background_css = themed_classes(mode, color, "toolbar-background");
    let content_css = themed_classes(mode, color, "toolbar-content");
    let back_button_css = themed_classes(mode, color, "back-button");
    let back_button_icon_css = themed_classes(mode, color, "back-button-icon");
    let back_button_text_css = themed_classes(mode, color, "back-button-text");

    let BackButtonContent {
        icon: back_icon,
        text: back_text,
    } = resolve_back_button(
        back_button_icon.as_deref(),
        back_button_text.as_deref(),
        &config,
        &t!("back-button-text"),
    );
    let back_label = t!("back-button-label");

    #[cfg(debug_assertions)]
    tracing::debug!(
        mode = mode.unwrap_or("<none>"),
        hide_back_button,
        "Navbar render"
    );

    rsx! {
        div {
            class: "{host_css}",
            "data-theme": "toolbar",
            hidden,
            div { class: "{background_css}" }
            button {
                class: "{back_button_css}",
                hidden: hide_back_button,
                aria_label: "{back_label}",
                onclick: move |evt: MouseEvent| handle_back_click(&evt, onback),
                if let Some(icon) = back_icon {
                    Icon { name: icon, class: Some(back_button_icon_css.to_string()) }
                }
                span { class: "{back_button_text_css}", "{back_text}" }
            }
            {start}
            {mode_start}
            {mode_end}
            {end}
            div { class: "{content_css}", {children} }
        }
    }
}

/// The part of a DOM event the back button needs.
pub(crate) trait Cancelable {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl Cancelable for Event<MouseData> {
    fn prevent_default(&self) {
        Event::<MouseData>::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Event::<MouseData>::stop_propagation(self);
    }
}

/// Swallow the click so enclosing gesture handlers never see it.
fn handle_back_click(evt: &impl Cancelable, onback: Option<EventHandler<()>>) {
    evt.prevent_default();
    evt.stop_propagation();
    tracing::info!("back button click");
    if let Some(handler) = onback {
        handler.call(());
    }
}
