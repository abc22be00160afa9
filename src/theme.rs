//! Theme mode and the class-marker contract.
//!
//! The entire theme system is one bit of state: dark or light. The generator
//! stamps the initial mode onto the root element as a class marker
//! (`<html class="dark">`), the stylesheet binds the dark palette to
//! `:root.dark`, and the embedded toggle script flips exactly that class.
//! First paint therefore matches the configured mode with no flash and no
//! JavaScript required.
//!
//! The mode is owned by the page composer and passed into renderers as an
//! immutable parameter — there is no module-level theme state anywhere.

use serde::{Deserialize, Serialize};

/// Class added to the root element while dark mode is active. The toggle
/// script and the generated CSS both key off this exact name.
pub const DARK_CLASS: &str = "dark";

/// localStorage key used when theme persistence is enabled.
pub const STORAGE_KEY: &str = "simple-folio-theme";

/// The display mode a page starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// The opposite mode. Toggling twice returns the original mode.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Root-element class attribute for this mode, or `None` for light
    /// (light is the unmarked state).
    pub fn class_marker(self) -> Option<&'static str> {
        match self {
            ThemeMode::Dark => Some(DARK_CLASS),
            ThemeMode::Light => None,
        }
    }
}

/// JavaScript emitted ahead of the app script when `theme.persist` is on:
/// restores a saved mode and installs the save hook the toggle handler calls.
///
/// Without this snippet the page carries no storage access at all — every
/// load starts in the configured initial mode.
pub fn persistence_snippet() -> String {
    format!(
        r#"(function () {{
  var saved = localStorage.getItem("{key}");
  if (saved === "dark") document.documentElement.classList.add("{class}");
  if (saved === "light") document.documentElement.classList.remove("{class}");
  window.__persistTheme = function (dark) {{
    localStorage.setItem("{key}", dark ? "dark" : "light");
  }};
}})();"#,
        key = STORAGE_KEY,
        class = DARK_CLASS,
    )
}
