//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` that
//! sits next to `portfolio.toml` in the content directory. The site has a
//! single page, so there is one config file — user values are merged over
//! stock defaults and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! initial_mode = "dark"     # First-paint palette: "dark" or "light"
//! persist = false           # Remember toggled mode in localStorage
//!
//! [animation]
//! enabled = true            # Scroll-triggered entrance animations
//! duration_ms = 450         # Length of one entrance transition
//! stagger_ms = 60           # Extra delay per card in a list
//! translate_y = "16px"      # Upward shift distance during entrance
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f8fafc"       # Card and header backgrounds
//! text = "#0f172a"
//! text_muted = "#64748b"    # Period/location lines, captions
//! border = "#e2e8f0"
//! accent = "#0f172a"        # Filled buttons, chips
//! accent_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#020617"
//! surface = "#0f172a"
//! text = "#f1f5f9"
//! text_muted = "#94a3b8"
//! border = "#1e293b"
//! accent = "#f1f5f9"
//! accent_text = "#020617"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only start in light mode
//! [theme]
//! initial_mode = "light"
//! ```

use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Theme toggle behavior (initial mode, persistence).
    pub theme: ThemeConfig,
    /// Entrance animation settings.
    pub animation: AnimationConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.duration_ms == 0 || self.animation.duration_ms > 5000 {
            return Err(ConfigError::Validation(
                "animation.duration_ms must be 1-5000".into(),
            ));
        }
        if self.animation.stagger_ms > 1000 {
            return Err(ConfigError::Validation(
                "animation.stagger_ms must be 0-1000".into(),
            ));
        }
        Ok(())
    }
}

/// Theme toggle behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Palette applied on first paint, before any toggling.
    pub initial_mode: ThemeMode,
    /// When true, the toggled mode is remembered in `localStorage` and
    /// restored before first paint on the next visit.
    pub persist: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial_mode: ThemeMode::Dark,
            persist: false,
        }
    }
}

/// Entrance animation settings.
///
/// Each section heading and card fades in and shifts up the first time it
/// scrolls into view. The transition fires once per element and never
/// reverses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Master switch. When false no reveal classes are emitted and the page
    /// renders fully visible without JavaScript.
    pub enabled: bool,
    /// Length of one entrance transition, in milliseconds.
    pub duration_ms: u32,
    /// Extra delay per card within a list, in milliseconds.
    pub stagger_ms: u32,
    /// Upward shift distance during entrance (CSS length).
    pub translate_y: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 450,
            stagger_ms: 60,
            translate_y: "16px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Card and sticky-header background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text (period lines, captions, nav).
    pub text_muted: String,
    /// Border color for cards and section dividers.
    pub border: String,
    /// Filled button and chip background.
    pub accent: String,
    /// Text on accent backgrounds.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#0f172a".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#020617".to_string(),
            surface: "#0f172a".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1e293b".to_string(),
            accent: "#f1f5f9".to_string(),
            accent_text: "#020617".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file next to
# portfolio.toml in the content directory.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme toggle
# ---------------------------------------------------------------------------
[theme]
# Palette applied on first paint: "dark" or "light".
initial_mode = "dark"

# Remember the visitor's toggled mode in localStorage and restore it on
# the next visit. Off by default: every load starts in initial_mode.
persist = false

# ---------------------------------------------------------------------------
# Entrance animations
# ---------------------------------------------------------------------------
[animation]
# Scroll-triggered entrance animations. Each section fades in and shifts
# up the first time it becomes visible; the effect fires once and never
# reverses. Set to false for a fully static page.
enabled = true

# Length of one entrance transition, in milliseconds.
duration_ms = 450

# Extra delay per card within a list (projects, experience...), so grids
# cascade instead of popping in at once.
stagger_ms = 60

# Upward shift distance during entrance (any CSS length).
translate_y = "16px"

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f8fafc"       # Cards, sticky header
text = "#0f172a"
text_muted = "#64748b"    # Period/location lines, captions
border = "#e2e8f0"
accent = "#0f172a"        # Filled buttons, chips
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (applied while the root carries the "dark" marker)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#020617"
surface = "#0f172a"
text = "#f1f5f9"
text_muted = "#94a3b8"
border = "#1e293b"
accent = "#f1f5f9"
accent_text = "#020617"
"##
}

/// Generate CSS custom properties from color config.
///
/// Dark values are bound to the `.dark` class marker on the root element, not
/// to `prefers-color-scheme` — the page has an in-page toggle, so the marker
/// is the single source of truth for the active palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-text: {light_accent_text};
}}

:root.dark {{
    --color-bg: {dark_bg};
    --color-surface: {dark_surface};
    --color-text: {dark_text};
    --color-text-muted: {dark_text_muted};
    --color-border: {dark_border};
    --color-accent: {dark_accent};
    --color-accent-text: {dark_accent_text};
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_text = colors.light.accent_text,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_text = colors.dark.accent_text,
    )
}

/// Generate CSS custom properties from animation config.
pub fn generate_animation_css(animation: &AnimationConfig) -> String {
    format!(
        r#":root {{
    --reveal-duration: {duration}ms;
    --reveal-shift: {shift};
}}"#,
        duration = animation.duration_ms,
        shift = animation.translate_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#020617");
    }

    #[test]
    fn default_theme_is_dark_without_persistence() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.initial_mode, ThemeMode::Dark);
        assert!(!config.theme.persist);
    }

    #[test]
    fn default_animation_settings() {
        let config = SiteConfig::default();
        assert!(config.animation.enabled);
        assert_eq!(config.animation.duration_ms, 450);
        assert_eq!(config.animation.stagger_ms, 60);
        assert_eq!(config.animation.translate_y, "16px");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#0f172a");
        assert_eq!(config.colors.dark.background, "#020617");
        assert_eq!(config.theme.initial_mode, ThemeMode::Dark);
    }

    #[test]
    fn parse_theme_mode() {
        let toml = r#"
[theme]
initial_mode = "light"
persist = true
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.initial_mode, ThemeMode::Light);
        assert!(config.theme.persist);
    }

    #[test]
    fn parse_invalid_theme_mode_rejected() {
        let toml = r#"
[theme]
initial_mode = "sepia"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.theme.initial_mode, ThemeMode::Dark);
        assert_eq!(config.colors.light.background, "#ffffff");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[colors.dark]
background = "#111111"

[animation]
duration_ms = 300
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.dark.background, "#111111");
        assert_eq!(config.animation.duration_ms, 300);
        // Unspecified values should be defaults
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.animation.stagger_ms, 60);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[animation]
duration_ms = 0
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-surface:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--color-accent:",
            "--color-accent-text:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn dark_colors_bound_to_class_marker_not_media_query() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains(":root.dark"));
        assert!(!css.contains("prefers-color-scheme"));
    }

    #[test]
    fn generate_animation_css_variables() {
        let css = generate_animation_css(&AnimationConfig::default());
        assert!(css.contains("--reveal-duration: 450ms"));
        assert!(css.contains("--reveal-shift: 16px"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"duration_ms = 450"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"duration_ms = 200"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("duration_ms").unwrap().as_integer(), Some(200));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[animation]
duration_ms = 450
stagger_ms = 60
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[animation]
duration_ms = 200
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let animation = merged.get("animation").unwrap();
        assert_eq!(
            animation.get("duration_ms").unwrap().as_integer(),
            Some(200)
        );
        // stagger preserved from base
        assert_eq!(animation.get("stagger_ms").unwrap().as_integer(), Some(60));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[animation]
duraton_ms = 450
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[animations]
enabled = false
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_duration_bounds() {
        let mut config = SiteConfig::default();
        config.animation.duration_ms = 5000;
        assert!(config.validate().is_ok());

        config.animation.duration_ms = 5001;
        assert!(config.validate().is_err());

        config.animation.duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_stagger_bounds() {
        let mut config = SiteConfig::default();
        config.animation.stagger_ms = 1000;
        assert!(config.validate().is_ok());

        config.animation.stagger_ms = 1001;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stagger"));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.theme.initial_mode, ThemeMode::Dark);
        assert!(!config.theme.persist);
        assert_eq!(config.animation.duration_ms, 450);
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#020617");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[theme]"));
        assert!(content.contains("[animation]"));
        assert!(content.contains("[colors.light]"));
        assert!(content.contains("[colors.dark]"));
    }

    // =========================================================================
    // resolve_config / stock_defaults_value tests
    // =========================================================================

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config.animation.duration_ms, 450);
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
initial_mode = "light"
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.theme.initial_mode, ThemeMode::Light);
        // Other fields preserved from defaults
        assert!(config.animation.enabled);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("colors").is_some());
        assert!(val.get("theme").is_some());
        assert!(val.get("animation").is_some());
    }
}
