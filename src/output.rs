//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (project, experience entry, publication) is its semantic
//! identity — positional index + title — with secondary detail on indented
//! context lines. The `check` inventory reads as a content summary; the
//! `build` report reads as a list of what was written.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Pranav Joshi — Senior Scientist · Organoids & 3D Bioprinting
//!     Email: pranav.mtn@gmail.com
//!
//! Projects
//! 001 Pillar/Perfusion Plate for Robust Human Organoids
//!     Tags: Organoids, HTS, Pillar/Perfusion
//! ...
//! ```
//!
//! ## Build
//!
//! ```text
//! Generated index.html
//! Generated manifest.webmanifest
//! Copied 2 asset files
//!     cv.pdf
//!     fonts/mono.woff2
//! 3 projects, 3 experience entries, 9 skills, 3 publications
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::content::Portfolio;
use crate::generate::SiteReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an entity header: positional index + title.
fn entity_header(index: usize, title: &str) -> String {
    format!("{} {}", format_index(index), title)
}

const INDENT: &str = "    ";

/// One-line count summary shared by check and build output.
fn counts_line(portfolio: &Portfolio) -> String {
    format!(
        "{} projects, {} experience entries, {} skills, {} publications",
        portfolio.projects.len(),
        portfolio.experience.len(),
        portfolio.skills.len(),
        portfolio.publications.len(),
    )
}

/// Format the `check` content inventory.
pub fn format_check_output(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!(
        "{INDENT}{} — {}",
        portfolio.profile.name, portfolio.profile.role
    ));
    lines.push(format!("{INDENT}Email: {}", portfolio.profile.email));
    lines.push(format!("{INDENT}Resume: {}", portfolio.profile.resume_url));
    lines.push(format!(
        "{INDENT}{} social links",
        portfolio.profile.socials.len()
    ));

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in portfolio.projects.iter().enumerate() {
        lines.push(entity_header(i + 1, &project.title));
        if !project.tags.is_empty() {
            lines.push(format!("{INDENT}Tags: {}", project.tags.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Experience".to_string());
    for (i, entry) in portfolio.experience.iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &format!("{} · {}", entry.role, entry.company),
        ));
        lines.push(format!(
            "{INDENT}{} — {} ({} bullets)",
            entry.period,
            entry.location,
            entry.bullets.len()
        ));
    }

    lines.push(String::new());
    lines.push("Publications".to_string());
    for (i, publication) in portfolio.publications.iter().enumerate() {
        lines.push(entity_header(i + 1, &publication.title));
        lines.push(format!("{INDENT}Source: {}", publication.source));
    }

    lines.push(String::new());
    lines.push(counts_line(portfolio));
    lines
}

/// Format the `build` report.
pub fn format_build_output(report: &SiteReport, portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Generated {}", report.html_path.display()));
    lines.push("Generated manifest.webmanifest".to_string());
    if report.assets_copied.is_empty() {
        lines.push("No assets to copy".to_string());
    } else {
        lines.push(format!("Copied {} asset files", report.assets_copied.len()));
        for asset in &report.assets_copied {
            lines.push(format!("{INDENT}{asset}"));
        }
    }
    lines.push(counts_line(portfolio));
    lines
}

pub fn print_check_output(portfolio: &Portfolio) {
    for line in format_check_output(portfolio) {
        println!("{line}");
    }
}

pub fn print_build_output(report: &SiteReport, portfolio: &Portfolio) {
    for line in format_build_output(report, portfolio) {
        println!("{line}");
    }
}
