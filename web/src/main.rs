use dioxus::prelude::*;

use ui::components::{Button, Navbar, ToolbarStylesheet};
use ui::core::{Config, ConfigProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Inbox {},
    #[route("/message/:id")]
    Message { id: u32 },
}

/// Demo configuration; a real app would ship its own.
const CONFIG_JSON: &str = r#"{
    "mode": "md",
    "statusbarPadding": false
}"#;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        ToolbarStylesheet {}
        ConfigProvider { config: Config::from_json_or_default(CONFIG_JSON),
            Router::<Route> {}
        }
    }
}

/// Navbar layout shared by every route; the back button pops history.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();
    let title = match route {
        Route::Inbox {} => "Inbox".to_string(),
        Route::Message { id } => format!("Message {id}"),
    };

    rsx! {
        Navbar {
            hide_back_button: matches!(route, Route::Inbox {}),
            onback: move |_| navigator().go_back(),
            end: rsx! {
                Button { onclick: move |_| log_action("refresh"), "Refresh" }
            },
            h1 { "{title}" }
        }
        Outlet::<Route> {}
    }
}

fn log_action(action: &str) {
    dioxus::logger::tracing::info!(action, "toolbar action");
}

#[component]
fn Inbox() -> Element {
    rsx! {
        ul {
            for id in 1..=3u32 {
                li { key: "{id}",
                    Link { to: Route::Message { id }, "Message {id}" }
                }
            }
        }
    }
}

#[component]
fn Message(id: u32) -> Element {
    rsx! {
        p { "Body of message {id}." }
    }
}
