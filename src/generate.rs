//! Site generation.
//!
//! The page composer: takes the loaded content store and site config and
//! writes the finished site. One page, fixed section order, everything
//! embedded:
//!
//! ```text
//! dist/
//! ├── index.html             # The whole page — CSS and JS embedded
//! ├── manifest.webmanifest   # Install metadata, colors from config
//! └── <assets>               # content/assets/ copied verbatim (resume, favicon)
//! ```
//!
//! The initial theme mode is owned here: it is read from the config once and
//! passed into the renderers as a parameter, then stamped onto the root
//! element. The footer year is whatever the clock says at generation time —
//! rebuilds pick up the new year, nothing caches it.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout and component styles (palette variables are
//!   generated from config and prepended)
//! - `static/app.js`: theme toggle + one-shot entrance reveal (~40 lines of
//!   vanilla JS, no runtime dependencies)

use crate::config::{self, SiteConfig};
use crate::content::Portfolio;
use crate::render::{self, Reveal, sections};
use crate::theme;
use chrono::Datelike;
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of the asset directory inside the content directory. Files under it
/// are copied to the output root, preserving relative paths.
pub const ASSETS_DIR: &str = "assets";

/// What a build wrote, for CLI reporting.
#[derive(Debug)]
pub struct SiteReport {
    /// Path of the generated page.
    pub html_path: PathBuf,
    /// Asset files copied into the output, relative paths in copy order.
    pub assets_copied: Vec<String>,
}

/// The current calendar year, evaluated at call time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the complete page document for the given year.
///
/// Pure — no filesystem access, so tests can exercise the full composition
/// with fixture content and a fixed year.
pub fn render_page(portfolio: &Portfolio, config: &SiteConfig, year: i32) -> Markup {
    let reveal = Reveal::new(&config.animation);
    let mode = config.theme.initial_mode;

    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_animation_css(&config.animation),
        CSS_STATIC,
    );
    let js = if config.theme.persist {
        format!("{}\n{}", theme::persistence_snippet(), APP_JS)
    } else {
        APP_JS.to_string()
    };

    let body = html! {
        (render::site_header(&portfolio.profile))
        main {
            (sections::hero(&portfolio.profile, &reveal))
            (sections::projects(&portfolio.projects, &reveal))
            (sections::experience(&portfolio.experience, &reveal))
            (sections::skills(&portfolio.skills, &reveal))
            (sections::publications(&portfolio.publications, &reveal))
            (sections::contact(&portfolio.profile, &portfolio.contact, &reveal))
        }
        (sections::footer(&portfolio.profile.name, year))
    };

    let title = format!("{} — {}", portfolio.profile.name, portfolio.profile.role);
    render::base_document(&title, &portfolio.profile.tagline, &css, &js, mode, body)
}

/// Generate the site: page, web app manifest, copied assets.
pub fn generate(
    portfolio: &Portfolio,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<SiteReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let page = render_page(portfolio, config, current_year());
    let html_path = output_dir.join("index.html");
    fs::write(&html_path, page.into_string())?;

    let manifest = web_manifest(portfolio, config);
    fs::write(
        output_dir.join("manifest.webmanifest"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    let assets_copied = copy_assets(source_dir, output_dir)?;

    Ok(SiteReport {
        html_path,
        assets_copied,
    })
}

/// Web app manifest so the page is installable. Colors follow the initial
/// theme mode's scheme.
fn web_manifest(portfolio: &Portfolio, config: &SiteConfig) -> serde_json::Value {
    let scheme = match config.theme.initial_mode {
        crate::theme::ThemeMode::Dark => &config.colors.dark,
        crate::theme::ThemeMode::Light => &config.colors.light,
    };
    serde_json::json!({
        "name": format!("{} — Portfolio", portfolio.profile.name),
        "short_name": portfolio.profile.name,
        "start_url": ".",
        "display": "browser",
        "background_color": scheme.background,
        "theme_color": scheme.background,
    })
}

/// Copy `content/assets/` into the output root, preserving relative paths.
///
/// Missing asset directory is fine — remote-only portfolios have none.
fn copy_assets(source_dir: &Path, output_dir: &Path) -> Result<Vec<String>, GenerateError> {
    let assets_root = source_dir.join(ASSETS_DIR);
    let mut copied = Vec::new();
    if !assets_root.is_dir() {
        return Ok(copied);
    }

    for entry in WalkDir::new(&assets_root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(&assets_root)
            .expect("walkdir yields paths under its root");
        let dest = output_dir.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied.push(rel.to_string_lossy().to_string());
    }
    Ok(copied)
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const APP_JS: &str = include_str!("../static/app.js");
