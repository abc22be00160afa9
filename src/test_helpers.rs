//! Shared test fixtures.
//!
//! A small but fully-populated portfolio, used across module tests so every
//! renderer is exercised with injected content rather than stock data.

use crate::content::{Contact, ExperienceEntry, LinkRef, Portfolio, Profile, Project, Publication};
use crate::render::icons::Icon;

fn s(v: &str) -> String {
    v.to_string()
}

/// A valid three-project portfolio for tests.
pub fn fixture_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: s("Ada Lin"),
            role: s("Research Engineer"),
            tagline: s("Building instruments and the software that runs them."),
            location: s("Porto, PT"),
            email: s("ada@example.com"),
            resume_url: s("/ada-lin-cv.pdf"),
            headshot: s("https://example.com/ada.jpg"),
            availability: Some(s("Available from October")),
            socials: vec![
                LinkRef {
                    label: s("GitHub"),
                    href: s("https://github.com/ada-lin"),
                    icon: Icon::Github,
                },
                LinkRef {
                    label: s("LinkedIn"),
                    href: s("https://linkedin.com/in/ada-lin"),
                    icon: Icon::Linkedin,
                },
            ],
        },
        projects: vec![
            Project {
                title: s("Microfluidic Flow Controller"),
                description: s("Closed-loop pressure control for droplet generation rigs."),
                tags: vec![s("Hardware"), s("Control")],
                image: s("https://example.com/flow.jpg"),
                links: vec![LinkRef {
                    label: s("Repo"),
                    href: s("https://github.com/ada-lin/flowctl"),
                    icon: Icon::Github,
                }],
            },
            Project {
                title: s("Imaging Pipeline"),
                description: s("Batch segmentation and QC for time-lapse microscopy."),
                tags: vec![s("Imaging")],
                image: s("https://example.com/imaging.jpg"),
                links: vec![LinkRef {
                    label: s("Demo"),
                    href: s("https://example.com/imaging-demo"),
                    icon: Icon::ExternalLink,
                }],
            },
            Project {
                title: s("Lab Inventory Service"),
                description: s("Barcode-driven reagent tracking with expiry alerts."),
                tags: vec![s("Web"), s("Ops")],
                image: s("https://example.com/inventory.jpg"),
                links: vec![],
            },
        ],
        experience: vec![
            ExperienceEntry {
                role: s("Research Engineer"),
                company: s("Instrumenta"),
                period: s("2022 – Present"),
                location: s("Porto, PT"),
                bullets: vec![
                    s("Shipped the second-generation flow controller."),
                    s("Cut imaging QC turnaround from days to hours."),
                ],
            },
            ExperienceEntry {
                role: s("Software Engineer"),
                company: s("Fieldworks"),
                period: s("2019 – 2022"),
                location: s("Remote"),
                bullets: vec![s("Built sensor ingestion for 200 field stations.")],
            },
        ],
        skills: vec![
            s("Rust"),
            s("Embedded Systems"),
            s("Image Analysis"),
            s("CAD"),
            s("Technical Writing"),
        ],
        publications: vec![
            Publication {
                title: s("Pressure-stable droplet generation at scale"),
                source: s("Lab on a Chip, 2024"),
                link: s("https://example.com/pub-droplets"),
            },
            Publication {
                title: s("Open hardware for long-term imaging"),
                source: s("HardwareX, 2023"),
                link: s("https://example.com/pub-imaging"),
            },
        ],
        contact: Contact {
            blurb: s("Email is the fastest way to reach me."),
            notes: vec![
                s("Based in UTC+0, overlap with US mornings."),
                s("Open to consulting on instrument software."),
            ],
        },
    }
}
