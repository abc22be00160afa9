//! Per-section renderers.
//!
//! One pure function per page section, each consuming its slice of the
//! content store and nothing else. Sections are independent — none reads
//! another's output — and the page composer stacks them in fixed order:
//! hero, projects, experience, skills, publications, contact, footer.
//!
//! Cards inside a section are staggered by list index so grids cascade in;
//! the order on the page is always the authored order in `portfolio.toml`.
//! There is no filtering, sorting, or grouping anywhere in this module.

use crate::content::{Contact, ExperienceEntry, Profile, Project, Publication};
use crate::render::icons::Icon;
use crate::render::{Reveal, link_button, section_heading};
use maud::{Markup, html};

/// Hero: headline role, tagline, social buttons, location/availability line,
/// headshot.
pub fn hero(profile: &Profile, reveal: &Reveal) -> Markup {
    html! {
        section.hero id="home" {
            div.hero-text.reveal[reveal.enabled()] {
                h1.hero-title { (profile.role) }
                p.hero-tagline { (profile.tagline) }
                div.hero-socials {
                    @for link in &profile.socials {
                        (link_button(link))
                    }
                }
                div.hero-meta {
                    span.meta-item { (Icon::MapPin.markup()) " " (profile.location) }
                    @if let Some(availability) = &profile.availability {
                        span.meta-item { (Icon::Calendar.markup()) " " (availability) }
                    }
                }
            }
            img.headshot.reveal[reveal.enabled()] src=(profile.headshot) alt=(profile.name);
        }
    }
}

/// Project gallery: one card per project, authored order.
pub fn projects(projects: &[Project], reveal: &Reveal) -> Markup {
    html! {
        section.page-section id="projects" {
            (section_heading("Selected Projects", reveal))
            div.card-grid.project-grid {
                @for (idx, project) in projects.iter().enumerate() {
                    article.card.project-card.reveal[reveal.enabled()]
                        style=[reveal.delay_style(idx)] {
                        div.card-image {
                            img src=(project.image) alt=(project.title) loading="lazy";
                        }
                        div.card-body {
                            h3.card-title {
                                span { (project.title) }
                                (Icon::Code.markup())
                            }
                            p.card-text { (project.description) }
                            div.chip-row {
                                @for tag in &project.tags {
                                    span.chip { (tag) }
                                }
                            }
                            div.link-row {
                                @for link in &project.links {
                                    (link_button(link))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Experience list: one card per entry in authored (reverse-chronological)
/// order — role/company header, period and location line, bullet list.
pub fn experience(entries: &[ExperienceEntry], reveal: &Reveal) -> Markup {
    html! {
        section.page-section.band id="experience" {
            (section_heading("Experience", reveal))
            div.card-grid.experience-grid {
                @for (idx, entry) in entries.iter().enumerate() {
                    article.card.experience-card.reveal[reveal.enabled()]
                        style=[reveal.delay_style(idx)] {
                        h3.card-title {
                            (Icon::Briefcase.markup()) " " (entry.role) " · " (entry.company)
                        }
                        div.card-meta {
                            span.meta-item { (Icon::Calendar.markup()) " " (entry.period) }
                            span.meta-item { (Icon::MapPin.markup()) " " (entry.location) }
                        }
                        ul.bullets {
                            @for bullet in &entry.bullets {
                                li { (bullet) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Skills: one chip per label, authored order, no grouping.
pub fn skills(skills: &[String], reveal: &Reveal) -> Markup {
    html! {
        section.page-section id="skills" {
            (section_heading("Skills", reveal))
            div.chip-row.skill-chips {
                @for skill in skills {
                    span.chip.chip-large { (skill) }
                }
            }
        }
    }
}

/// Publications: one card per entry with venue line and outbound View button.
pub fn publications(publications: &[Publication], reveal: &Reveal) -> Markup {
    html! {
        section.page-section id="publications" {
            (section_heading("Publications", reveal))
            div.publication-list {
                @for (idx, publication) in publications.iter().enumerate() {
                    article.card.publication-card.reveal[reveal.enabled()]
                        style=[reveal.delay_style(idx)] {
                        h3.card-title { (publication.title) }
                        p.card-text { (publication.source) }
                        div.link-row {
                            a.button.button-outline href=(publication.link)
                                target="_blank" rel="noopener noreferrer" {
                                (Icon::ExternalLink.markup()) " View"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Contact: mailto card plus recruiter quick-notes card.
///
/// The mail target is plain string concatenation of the `mailto:` scheme and
/// the profile email — no form, no endpoint.
pub fn contact(profile: &Profile, contact: &Contact, reveal: &Reveal) -> Markup {
    html! {
        section.page-section id="contact" {
            (section_heading("Get in touch", reveal))
            div.card-grid.contact-grid {
                article.card.reveal[reveal.enabled()] {
                    h3.card-title { "Open to collaborations & opportunities" }
                    p.card-text { (contact.blurb) }
                    div.link-row {
                        a.button.button-solid href={ "mailto:" (profile.email) } {
                            (Icon::Mail.markup()) " Email me"
                        }
                    }
                }
                article.card.reveal[reveal.enabled()] style=[reveal.delay_style(1)] {
                    h3.card-title { "Quick notes for recruiters" }
                    ul.bullets {
                        @for note in &contact.notes {
                            li { (note) }
                        }
                    }
                }
            }
        }
    }
}

/// Footer: copyright line with the year computed at generation time, and a
/// back-to-top anchor.
pub fn footer(name: &str, year: i32) -> Markup {
    html! {
        footer.site-footer {
            span { "© " (year) " " (name) ". All rights reserved." }
            a.back-to-top href="#home" {
                "Back to top " (Icon::ArrowRight.markup())
            }
        }
    }
}
