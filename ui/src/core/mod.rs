//! Configuration, theming and back-button resolution shared by the components.

pub mod back_button;
pub mod config;
pub mod provider;
pub mod theme;

pub use back_button::{resolve_back_button, BackButtonContent};
pub use config::{Config, ConfigBuilder, ConfigError};
pub use provider::{use_config, ConfigProvider};
pub use theme::{themed_classes, ThemedClasses};
