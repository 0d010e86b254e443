#![cfg(test)]
//! Lint for the toolbar stylesheet the desktop shell embeds.
//!
//! The navbar and button components emit themed class names; a selector
//! dropped or renamed in `ui/assets/styling/navbar.css` would only show up as
//! broken styling at runtime. If you rename a class, update the component
//! markup and `REQUIRED_SELECTORS` together.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Host
    ".toolbar {",
    ".toolbar[hidden]",
    ".toolbar.statusbar-padding",
    // Regions
    ".toolbar-background {",
    ".toolbar-content {",
    // Back button
    ".back-button {",
    ".back-button[hidden]",
    ".back-button-icon {",
    ".back-button-text {",
    // Buttons
    ".button {",
    ".bar-button {",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in navbar stylesheet:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn stylesheet_hides_hidden_back_button() {
    let rule = NAVBAR_CSS
        .split_once(".back-button[hidden]")
        .map(|(_, rest)| rest.split('}').next().unwrap_or_default())
        .expect("hidden back-button rule present");
    assert!(rule.contains("display: none"), "rule body: {rule}");
}

#[test]
fn stylesheet_not_trivially_empty() {
    let non_ws_len = NAVBAR_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_000,
        "Embedded stylesheet appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
