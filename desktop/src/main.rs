#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config as WindowConfig};
use dioxus::prelude::*;

use ui::components::{Button, Navbar};
use ui::core::{Config, ConfigProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Library {},
    #[route("/settings")]
    Settings {},
}

// Desktop builds always inline the toolbar stylesheet.
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            WindowConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Navkit – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Desktop windows draw under the title bar on macOS.
    let config = Config::builder()
        .set("mode", if cfg!(target_os = "macos") { "ios" } else { "md" })
        .set("statusbarPadding", cfg!(target_os = "macos"))
        .build();

    rsx! {
        document::Style { "{NAVBAR_CSS_INLINE}" }
        ConfigProvider { config,
            Router::<Route> {}
        }
    }
}

#[component]
fn DesktopNavbar() -> Element {
    let route = use_route::<Route>();
    let on_settings = matches!(route, Route::Settings {});

    rsx! {
        Navbar {
            hide_back_button: !on_settings,
            onback: move |_| navigator().go_back(),
            end: rsx! {
                if !on_settings {
                    Button {
                        onclick: move |_| {
                            navigator().push(Route::Settings {});
                        },
                        "Settings"
                    }
                }
            },
            h1 { if on_settings { "Settings" } else { "Library" } }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Library() -> Element {
    rsx! {
        p { "Nothing here yet." }
    }
}

#[component]
fn Settings() -> Element {
    rsx! {
        p { "Settings live in the config document." }
    }
}
