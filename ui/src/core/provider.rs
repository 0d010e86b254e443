//! Context plumbing that hands a [`Config`] to components.

use dioxus::prelude::*;

use super::config::Config;

#[derive(Clone, Copy)]
struct SharedConfig(Signal<Config>);

/// Makes `config` available to every component below it.
///
/// Replacing the `config` prop re-renders every component that read it
/// through [`use_config`].
#[component]
pub fn ConfigProvider(config: Config, children: Element) -> Element {
    let SharedConfig(mut shared) = use_context_provider(|| SharedConfig(Signal::new(config.clone())));
    if *shared.peek() != config {
        shared.set(config);
    }
    rsx! { {children} }
}

/// Config from context, or an empty config when no provider is mounted.
pub fn use_config() -> Config {
    try_use_context::<SharedConfig>()
        .map(|SharedConfig(shared)| shared.read().clone())
        .unwrap_or_default()
}
