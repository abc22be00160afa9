//! Portfolio content loading and validation.
//!
//! The content store is a single `portfolio.toml` in the content directory —
//! the whole site is driven by it. Content is loaded once per build, validated,
//! and never mutated afterwards. Tests inject fixture content the same way
//! production content arrives, so nothing in the render path ever reaches for
//! hardcoded data.
//!
//! ## Content File Structure
//!
//! ```toml
//! [profile]
//! name = "Ada Example"
//! role = "Research Scientist"
//! email = "ada@example.com"
//! # ...
//!
//! [[profile.socials]]
//! label = "LinkedIn"
//! href = "https://linkedin.com/in/ada"
//! icon = "linkedin"
//!
//! [[projects]]
//! title = "..."
//! # ...
//!
//! [[experience]]
//! # ...
//!
//! skills = ["..."]
//!
//! [[publications]]
//! # ...
//!
//! [contact]
//! blurb = "..."
//! notes = ["..."]
//! ```
//!
//! ## Validation
//!
//! The loader enforces the display-key invariants:
//! - Project titles are unique (they key the project cards)
//! - Publication titles are unique
//! - The profile email looks like an address (contains `@`)
//! - No entry has an empty title/label
//!
//! Unknown keys are rejected to catch typos early.

use crate::render::icons::Icon;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Filename of the content file inside the content directory.
pub const CONTENT_FILE: &str = "portfolio.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
    #[error("No {CONTENT_FILE} found in {0}")]
    Missing(String),
}

/// The complete, read-only content store for one portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Who the page is about. Singleton.
    pub profile: Profile,
    /// Project cards, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Work history, in authored (reverse-chronological) order.
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Skill chip labels, display order preserved.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Publication entries, in display order.
    #[serde(default)]
    pub publications: Vec<Publication>,
    /// Contact section copy.
    pub contact: Contact,
}

/// Profile fields rendered in the hero and header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Role title shown as the hero headline.
    pub role: String,
    /// One-line pitch under the headline.
    pub tagline: String,
    pub location: String,
    /// Target of the contact section's `mailto:` button.
    pub email: String,
    /// Path (relative to the site root) or URL of the resume document.
    pub resume_url: String,
    /// Headshot image URL or path.
    pub headshot: String,
    /// Short availability note next to the location (e.g. "Open to new roles").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Social/profile links shown as hero buttons.
    #[serde(default)]
    pub socials: Vec<LinkRef>,
}

/// An outbound link with a display label and an icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkRef {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

/// One project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Unique within the project list — used as the display key.
    pub title: String,
    pub description: String,
    /// Tag badge labels, display order preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Card image URL or path.
    pub image: String,
    /// Reference links (publication, repo, demo...).
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

/// One work-history card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    /// Free-form period string ("2020 – Present").
    pub period: String,
    pub location: String,
    /// Accomplishment bullets, authored order.
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One publication entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Publication {
    /// Unique within the publication list.
    pub title: String,
    /// Venue string ("bioRxiv, 2024").
    pub source: String,
    /// Outbound link to the publication.
    pub link: String,
}

/// Contact section copy: the email card blurb and the recruiter-notes card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Sentence above the email button.
    pub blurb: String,
    /// Quick-notes bullets (timezone, interests, working style).
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Portfolio {
    /// Check the display-key invariants the renderers rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Validation("profile.name is empty".into()));
        }
        if !self.profile.email.contains('@') {
            return Err(ContentError::Validation(format!(
                "profile.email '{}' is not an email address",
                self.profile.email
            )));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(ContentError::Validation("project with empty title".into()));
            }
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::Validation(format!(
                    "duplicate project title: {}",
                    project.title
                )));
            }
        }

        let mut seen = HashSet::new();
        for publication in &self.publications {
            if publication.title.trim().is_empty() {
                return Err(ContentError::Validation(
                    "publication with empty title".into(),
                ));
            }
            if !seen.insert(publication.title.as_str()) {
                return Err(ContentError::Validation(format!(
                    "duplicate publication title: {}",
                    publication.title
                )));
            }
        }

        for entry in &self.experience {
            if entry.company.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "experience entry '{}' has no company",
                    entry.role
                )));
            }
        }

        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ContentError::Validation("empty skill label".into()));
        }

        Ok(())
    }
}

/// Load and validate `portfolio.toml` from the content directory.
///
/// Unlike `config.toml`, the content file is mandatory — there is no site
/// without it.
pub fn load_content(dir: &Path) -> Result<Portfolio, ContentError> {
    let path = dir.join(CONTENT_FILE);
    if !path.exists() {
        return Err(ContentError::Missing(dir.display().to_string()));
    }
    let raw = fs::read_to_string(&path)?;
    let portfolio: Portfolio = toml::from_str(&raw)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Returns a fully-commented stock `portfolio.toml`.
///
/// Used by the `gen-content` CLI command as a starting point, and by the
/// end-to-end tests as realistic content. Must stay valid: a test parses it
/// through [`Portfolio`].
pub fn stock_content_toml() -> &'static str {
    r##"# Simple Folio Content
# ====================
# Everything the generated page shows lives in this file. Sections render
# in fixed order: hero, projects, experience, skills, publications, contact.
# List order here is display order there.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Skills — rendered as chips, in this order.
# ---------------------------------------------------------------------------
skills = [
    "Product Development & Commercialization",
    "3D Bioprinting",
    "Organoid Culture (Brain/Liver/Cardiac)",
    "High-Throughput Screening (HTS)",
    "Pillar/Perfusion Platforms",
    "Assay Development",
    "High-Content Imaging",
    "Electrophysiology (MEA)",
    "NIH SBIR/Grant Writing",
]

[profile]
name = "Pranav Joshi"
role = "Senior Scientist · Organoids & 3D Bioprinting"
tagline = "I build high-throughput organoid models and translational assays on pillar/perfusion platforms to accelerate drug discovery."
location = "Fort Worth, TX, USA"
email = "pranav.mtn@gmail.com"
resume_url = "/Pranav_Joshi_CV.pdf"
headshot = "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=800&auto=format&fit=crop"
availability = "Available for opportunities"

# Social buttons in the hero. Icons: github, linkedin, mail, external-link,
# book-open, globe.
[[profile.socials]]
label = "LinkedIn"
href = "https://www.linkedin.com/in/pranav-joshi-350b4b89/"
icon = "linkedin"

[[profile.socials]]
label = "Google Scholar"
href = "https://scholar.google.com/citations?user=sfYx8TwAAAAJ"
icon = "external-link"

[[profile.socials]]
label = "ResearchGate"
href = "https://www.researchgate.net/profile/Pranav-Joshi-9"
icon = "external-link"

[[profile.socials]]
label = "NIH Bibliography"
href = "https://www.ncbi.nlm.nih.gov/myncbi/pranav.joshi.1/bibliography/public/"
icon = "book-open"

# ---------------------------------------------------------------------------
# Projects — one card each. Titles must be unique.
# ---------------------------------------------------------------------------
[[projects]]
title = "Pillar/Perfusion Plate for Robust Human Organoids"
description = "Led development and commercialization of 36/144/384PillarPlate formats and perfusion plates, enabling scalable and reproducible organoid culture for HTS."
tags = ["Organoids", "HTS", "Pillar/Perfusion"]
image = "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1200&auto=format&fit=crop"

[[projects.links]]
label = "Publication"
href = "https://pubmed.ncbi.nlm.nih.gov/36993405/"
icon = "external-link"

[[projects]]
title = "Dynamic Culture of Cerebral Organoids"
description = "Perfusion protocols reduced necrotic core formation and improved maturation, supporting neurotoxicity applications."
tags = ["Brain Organoids", "Perfusion", "Neurotox"]
image = "https://images.unsplash.com/photo-1581091870622-7c74bff9a5bd?q=80&w=1200&auto=format&fit=crop"

[[projects.links]]
label = "Preprint"
href = "https://www.biorxiv.org/content/10.1101/2024.03.25.586638v1"
icon = "external-link"

[[projects]]
title = "Bioprinted Liver Tumor Spheroids for Drug Screening"
description = "Dynamic culture workflow of bioprinted HCC spheroids for predictive anticancer drug screening."
tags = ["Liver Tumor", "3D Bioprinting", "Drug Screening"]
image = "https://images.unsplash.com/photo-1582719478250-04d3d3e5d6cb?q=80&w=1200&auto=format&fit=crop"

[[projects.links]]
label = "Article"
href = "https://analyticalsciencejournals.onlinelibrary.wiley.com/doi/abs/10.1002/bit.28924"
icon = "external-link"

# ---------------------------------------------------------------------------
# Experience — newest first; list order is display order.
# ---------------------------------------------------------------------------
[[experience]]
role = "Senior Scientist, Product Development Manager"
company = "Bioprinting Laboratories Inc."
period = "2020 – Present"
location = "Dallas–Fort Worth, TX"
bullets = [
    "Directed commercialization of organoid culture platforms (36/144/384PillarPlate, PerfusionPlate).",
    "Applied Lean Startup to reduce R&D costs by 25% and increase reproducibility by 40%.",
    "Authored technical documentation, SOPs, and validation protocols aligned with ISO and FDA standards.",
    "Led NIH SBIR and industry projects on organoid-based screening and disease modeling.",
]

[[experience]]
role = "Postdoctoral Scientist"
company = "Bioprinting Laboratories Inc."
period = "2019 – 2020"
location = "Cleveland, OH"
bullets = [
    "Developed co-culture models for metabolism-mediated neurotoxicity.",
    "Standardized assay-ready brain organoids in 384PillarPlate.",
]

[[experience]]
role = "Graduate Research Associate"
company = "Cleveland State University / Bioprinting Labs"
period = "2014 – 2019"
location = "Cleveland, OH"
bullets = [
    "Established HTS neural stem cell model for developmental neurotoxicity (NIH R01).",
    "Engineered lentiviral biosensor assays and high-content imaging SOPs.",
]

# ---------------------------------------------------------------------------
# Publications — titles must be unique.
# ---------------------------------------------------------------------------
[[publications]]
title = "Dynamic perfusion enhances maturation of cerebral organoids"
source = "bioRxiv, 2024"
link = "https://www.biorxiv.org/content/10.1101/2024.03.25.586638v1"

[[publications]]
title = "Dynamic culture of liver tumor spheroids for predictive anticancer drug screening"
source = "Biotechnology & Bioengineering, 2025"
link = "https://analyticalsciencejournals.onlinelibrary.wiley.com/doi/abs/10.1002/bit.28924"

[[publications]]
title = "Pillar/perfusion plate platform for robust human organoid culture"
source = "ACS Biomaterials Sci Eng, 2024"
link = "https://pubmed.ncbi.nlm.nih.gov/36993405/"

# ---------------------------------------------------------------------------
# Contact
# ---------------------------------------------------------------------------
[contact]
blurb = "Prefer email? Click the button to start a message – I read everything."
notes = [
    "Timezone: Central (US)",
    "Interested in: product-focused biotech roles",
    "Working style: async-friendly, cross-functional, rapid prototyping",
]
"##
}
