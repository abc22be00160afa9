//! HTML rendering.
//!
//! Everything visual is produced here with [maud](https://maud.lambda.xyz/):
//! compile-time checked templates, auto-escaped interpolation, no template
//! files to ship. The module is split between the document chrome (this file:
//! document shell, sticky header, shared button/heading helpers) and the
//! per-section renderers ([`sections`]).
//!
//! ## Rendering Contract
//!
//! Every renderer is a pure function from a content slice to markup — no
//! state, no I/O. The theme mode and animation settings arrive as immutable
//! parameters from the page composer; nothing here reads globals.
//!
//! ## Entrance Animations
//!
//! Animated elements carry a `reveal` class and, within lists, an inline
//! `--reveal-delay` computed from their index. The embedded script promotes
//! `reveal` to `reveal visible` the first time an element scrolls into view
//! and then unobserves it, so the transition is one-shot per element. The
//! [`Reveal`] helper owns this: when animations are disabled it emits neither
//! class nor delay and the page is fully visible without JavaScript.

use crate::config::AnimationConfig;
use crate::content::{LinkRef, Profile};
use crate::render::icons::Icon;
use crate::theme::ThemeMode;
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub mod icons;
pub mod sections;

/// In-page navigation: anchor fragment and display label, in page order.
/// Each fragment matches the `id` of exactly one section.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("publications", "Publications"),
    ("contact", "Contact"),
];

/// Entrance animation emitter.
///
/// Holds the per-list stagger and whether animations are on at all. Created
/// once by the page composer from [`AnimationConfig`] and shared by all
/// section renderers.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    enabled: bool,
    stagger_ms: u32,
}

impl Reveal {
    pub fn new(animation: &AnimationConfig) -> Self {
        Self {
            enabled: animation.enabled,
            stagger_ms: animation.stagger_ms,
        }
    }

    /// A reveal that never animates, for tests and disabled builds.
    pub fn off() -> Self {
        Self {
            enabled: false,
            stagger_ms: 0,
        }
    }

    /// Whether animated elements should carry the `reveal` class.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Class for an animated element, or `None` when animations are off.
    pub fn class(&self) -> Option<&'static str> {
        self.enabled.then_some("reveal")
    }

    /// Inline stagger delay for the `index`-th element of a list.
    ///
    /// `None` for the first element and whenever animations are off, so the
    /// common case emits no style attribute at all.
    pub fn delay_style(&self, index: usize) -> Option<String> {
        if !self.enabled || index == 0 || self.stagger_ms == 0 {
            return None;
        }
        Some(format!(
            "--reveal-delay: {}ms;",
            index as u32 * self.stagger_ms
        ))
    }
}

/// Renders the base HTML document structure.
///
/// The initial theme mode is stamped onto `<html>` as a class marker so the
/// first paint already uses the configured palette.
pub fn base_document(
    title: &str,
    description: &str,
    css: &str,
    js: &str,
    mode: ThemeMode,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[mode.class_marker()] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="manifest" href="manifest.webmanifest";
                style { (PreEscaped(css.to_string())) }
            }
            body {
                (content)
                script { (PreEscaped(js.to_string())) }
            }
        }
    }
}

/// Renders the sticky site header: name anchor, section nav, theme toggle,
/// resume download.
///
/// The toggle button carries both sun and moon icons; the stylesheet shows
/// the sun while the root has the dark marker and the moon otherwise, so the
/// button needs no re-render on toggle.
pub fn site_header(profile: &Profile) -> Markup {
    html! {
        header.site-header {
            a.brand href="#home" { (profile.name) }
            nav.site-nav {
                @for (fragment, label) in NAV_SECTIONS {
                    a href={ "#" (fragment) } { (label) }
                }
            }
            div.header-actions {
                button type="button" id="theme-toggle" aria-label="Toggle theme" {
                    span.icon-sun { (Icon::Sun.markup()) }
                    span.icon-moon { (Icon::Moon.markup()) }
                }
                a.button.button-solid.resume-link href=(profile.resume_url) download {
                    (Icon::Download.markup()) " Resume"
                }
            }
        }
    }
}

/// Renders a section heading with an optional entrance animation.
pub fn section_heading(title: &str, reveal: &Reveal) -> Markup {
    html! {
        h2.section-title.reveal[reveal.enabled()] { (title) }
    }
}

/// Renders an outbound link as an outline button with its icon.
///
/// All outbound links open in a new context and drop the referrer.
pub fn link_button(link: &LinkRef) -> Markup {
    html! {
        a.button.button-outline href=(link.href) target="_blank" rel="noopener noreferrer" {
            (link.icon.markup()) " " (link.label)
        }
    }
}
