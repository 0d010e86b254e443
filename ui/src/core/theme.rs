//! Theme class derivation.
//!
//! Every themed region of a component gets its class list from the same
//! `(mode, color, base)` triple, so a stylesheet can target the plain base
//! class, the mode-scoped variant, or the mode+color variant.

use std::fmt;

/// Ordered, duplicate-free set of CSS class tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ThemedClasses {
    tokens: Vec<String>,
}

impl ThemedClasses {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends `token` unless it is empty or already present.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() && !self.contains(&token) {
            self.tokens.push(token);
        }
    }

    /// Adds `token` only when `enabled` holds (host-level conditional classes).
    pub fn with_flag(mut self, token: &str, enabled: bool) -> Self {
        if enabled {
            self.push(token);
        }
        self
    }
}

/// Space separated, ready for a `class` attribute.
impl fmt::Display for ThemedClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Derive the class set for `base` under the given mode and color.
///
/// Empty strings are treated the same as `None`. A color without a mode
/// contributes nothing.
pub fn themed_classes(mode: Option<&str>, color: Option<&str>, base: &str) -> ThemedClasses {
    let mode = mode.filter(|m| !m.is_empty());
    let color = color.filter(|c| !c.is_empty());

    let mut classes = ThemedClasses::default();
    classes.push(base);
    if let Some(mode) = mode {
        classes.push(format!("{base}-{mode}"));
        if let Some(color) = color {
            classes.push(format!("{base}-{mode}-{color}"));
        }
    }
    classes
}
