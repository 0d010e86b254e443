//! Themed button that restyles itself when placed inside a toolbar.

use dioxus::prelude::*;

use crate::components::navbar::ToolbarContext;
use crate::core::themed_classes;

/// Rendering flavour of a [`Button`]; doubles as the theme base class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    /// Compact styling used inside a toolbar.
    BarButton,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::BarButton => "bar-button",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] mode: Option<String>,
    #[props(default)] color: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    // Registration happens once per instance; the mode is re-read every render.
    let toolbar = use_hook(|| {
        let toolbar = try_consume_context::<ToolbarContext>();
        if let Some(toolbar) = toolbar {
            toolbar.mark_button();
        }
        toolbar
    });
    let button_type = match toolbar {
        Some(_) => ButtonType::BarButton,
        None => ButtonType::Button,
    };
    let inherited_mode = toolbar.and_then(|toolbar| toolbar.mode());

    let mode = mode.filter(|m| !m.is_empty()).or(inherited_mode);
    let mut classes = themed_classes(mode.as_deref(), color.as_deref(), button_type.as_str());
    if let Some(extra) = class {
        classes.push(extra);
    }

    rsx! {
        button {
            class: "{classes}",
            "button-type": button_type.as_str(),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
