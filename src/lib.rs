//! # Simple Folio
//!
//! A minimal static site generator for single-page personal portfolios.
//! One TOML file is the data source: profile, projects, experience, skills,
//! publications, and contact copy all live in `content/portfolio.toml`, and
//! one build turns it into a self-contained page.
//!
//! # Architecture: Load → Compose → Write
//!
//! A build runs three steps, each a function the next one calls with plain
//! values:
//!
//! ```text
//! 1. Load      content/portfolio.toml  →  Portfolio     (parse + validate)
//!              content/config.toml     →  SiteConfig    (merge over stock defaults)
//! 2. Compose   Portfolio + SiteConfig  →  Markup        (pure, no I/O)
//! 3. Write     Markup                  →  dist/         (page, manifest, assets)
//! ```
//!
//! Composition is a pure function from content and config to the finished
//! document, so tests exercise the entire page — section order, anchors, the
//! theme marker, the footer year — with fixture content and a fixed clock,
//! without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | `portfolio.toml` loading and validation — the read-only content store |
//! | [`config`] | `config.toml` loading, merging over stock defaults, CSS variable generation |
//! | [`theme`] | The dark/light mode bit: class-marker contract and the persistence snippet |
//! | [`render`] | Document shell, header, shared building blocks, entrance-reveal helper |
//! | [`render::sections`] | Pure section renderers: hero, projects, experience, skills, publications, contact, footer |
//! | [`render::icons`] | Inline SVG icon set |
//! | [`generate`] | Page composition and output writing: `index.html`, web manifest, asset copy |
//! | [`output`] | CLI output formatting — information-first display of content and build results |
//!
//! # Design Decisions
//!
//! ## One Page, Everything Embedded
//!
//! The output is a single `index.html` with CSS and JavaScript inlined. A
//! portfolio has a handful of sections; splitting it into pages or external
//! bundles buys nothing and costs requests. The only companions are the web
//! app manifest and whatever sits in `content/assets/`.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Theme State Lives in the Composer
//!
//! The theme is a single bit. The composer reads the initial mode from config
//! once and passes it down as an immutable parameter; the browser-side toggle
//! flips one class on the root element. No renderer owns theme state, and
//! persistence is an opt-in config flag that swaps in a small localStorage
//! snippet — off by default, the page makes no storage access at all.
//!
//! ## Config Over Stock Defaults
//!
//! `config.toml` is optional and partial: whatever it sets is merged over the
//! stock defaults, so a two-line file changing the accent color is valid.
//! `gen-config` prints the full documented stock file to start from, and
//! `gen-content` does the same for `portfolio.toml`.
//!
//! # The "Forever Stack"
//!
//! The generated page is plain HTML, established CSS, and ~40 lines of
//! vanilla JavaScript for the theme toggle and entrance reveals. The binary
//! has zero runtime dependencies. The site can be dropped on any file server —
//! no Node, no PHP, no database. If a browser can render HTML, it can display
//! your portfolio.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod render;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
