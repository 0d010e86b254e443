//! Toolbar components for Dioxus apps: a themed navbar with a back button,
//! bar-aware buttons, and the config/theme/i18n plumbing they share.

pub mod core;
pub mod i18n;

pub mod components {
    pub mod button;
    pub mod icon;
    pub mod navbar;

    pub use button::{Button, ButtonType};
    pub use icon::Icon;
    pub use navbar::{Navbar, ToolbarContext, ToolbarStylesheet};
}
