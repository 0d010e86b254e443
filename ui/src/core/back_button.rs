//! Back-button label and icon resolution.

use super::config::{keys, Config};

/// Icon shown when neither the caller nor the config names one.
pub const DEFAULT_BACK_ICON: &str = "arrow-back";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackButtonContent {
    /// `None` means the icon element is omitted entirely.
    pub icon: Option<String>,
    /// Always rendered, possibly empty.
    pub text: String,
}

/// Resolve what the back button shows.
///
/// An explicit, non-empty property wins; otherwise the config is consulted,
/// and `default_text` is the last resort for the label. With
/// `legacyBackButtonKeys` set the config keys are read crosswise, which is
/// how older toolbar builds behaved.
pub fn resolve_back_button(
    icon: Option<&str>,
    text: Option<&str>,
    config: &Config,
    default_text: &str,
) -> BackButtonContent {
    let (icon_key, icon_default, text_key, text_default) =
        if config.get_boolean(keys::LEGACY_BACK_BUTTON_KEYS) {
            (keys::BACK_BUTTON_TEXT, default_text, keys::BACK_BUTTON_ICON, default_text)
        } else {
            (keys::BACK_BUTTON_ICON, DEFAULT_BACK_ICON, keys::BACK_BUTTON_TEXT, default_text)
        };

    let icon = match icon.filter(|i| !i.is_empty()) {
        Some(icon) => icon.to_string(),
        None => config.get(icon_key, icon_default),
    };
    let text = match text.filter(|t| !t.is_empty()) {
        Some(text) => text.to_string(),
        None => config.get(text_key, text_default),
    };

    BackButtonContent {
        icon: Some(icon).filter(|i| !i.is_empty()),
        text,
    }
}
