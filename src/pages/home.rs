//! Home page - the whole portfolio on one scrolling page.
//!
//! Hero with the typed tagline, projects opening in lightboxes, certificate
//! cards, the restaurant booking form and the contact form.

use dioxus::prelude::*;

use crate::components::{
    open_lightbox, use_lightbox_keys, use_reveal_scanner, ActivatableCard, BackToTop,
    BookingForm, ContactForm, CookieBanner, Lightbox, RevealSection, TypedText,
};
use crate::context::use_lightbox;

/// Portfolio project shown as a card and in its lightbox.
struct Project {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    detail: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: "project1",
        title: "Digital Transformation Roadmap",
        summary: "A staged plan moving a family restaurant from paper orders to online bookings.",
        detail: "Process mapping, supplier interviews and a phased rollout of table booking, \
                 stock tracking and a simple customer newsletter.",
    },
    Project {
        id: "project2",
        title: "Cybersecurity Awareness Toolkit",
        summary: "Short training material on phishing and password hygiene for small teams.",
        detail: "Scenario-based lessons, a one-page incident checklist and a quiz used with \
                 a local charity's volunteers.",
    },
    Project {
        id: "project3",
        title: "Market Analysis Dashboard",
        summary: "Spreadsheet dashboard comparing local food businesses on price and reviews.",
        detail: "Data gathered from public listings, cleaned and summarised into pivot \
                 charts that guided a pricing review.",
    },
];

/// Certificate shown as a flippable card.
struct Certificate {
    name: &'static str,
    issuer: &'static str,
    year: &'static str,
}

static CERTIFICATES: [Certificate; 3] = [
    Certificate { name: "Google Cybersecurity Certificate", issuer: "Coursera", year: "2024" },
    Certificate { name: "Digital Marketing Fundamentals", issuer: "Google Digital Garage", year: "2023" },
    Certificate { name: "Agile Project Management", issuer: "LinkedIn Learning", year: "2023" },
];

#[component]
pub fn Home() -> Element {
    use_reveal_scanner();
    use_lightbox_keys();
    let lightbox = use_lightbox();

    rsx! {
        header { class: "hero",
            h1 { class: "page-title", "S. O. Igbe" }
            TypedText {}
            nav { class: "hero-nav",
                a { href: "#projects", "Projects" }
                a { href: "#certificates", "Certificates" }
                a { href: "#booking", "Book a table" }
                a { href: "#contact", "Contact" }
            }
        }

        main {
            RevealSection { id: "about".to_string(),
                h2 { class: "section-header", "About" }
                p { class: "body-text",
                    "I study business management with a focus on innovation and technology, "
                    "and I help small businesses take their first digital steps."
                }
            }

            RevealSection { id: "projects".to_string(),
                h2 { class: "section-header", "Projects" }
                div { class: "card-grid",
                    for project in PROJECTS.iter() {
                        ActivatableCard {
                            key: "{project.id}",
                            class: "project-card".to_string(),
                            label: format!("Open {}", project.title),
                            onactivate: move |_| open_lightbox(lightbox, project.id),
                            h3 { "{project.title}" }
                            p { "{project.summary}" }
                        }
                    }
                }
            }

            RevealSection { id: "certificates".to_string(),
                h2 { class: "section-header", "Certificates" }
                div { class: "card-grid",
                    for cert in CERTIFICATES.iter() {
                        CertificateCard { key: "{cert.name}", name: cert.name, issuer: cert.issuer, year: cert.year }
                    }
                }
            }

            RevealSection { id: "booking".to_string(), class: "restaurant".to_string(),
                h2 { class: "section-header", "Book a table" }
                p { class: "body-text",
                    "Pick a date and time and we'll draft the booking email for you."
                }
                BookingForm {}
            }

            RevealSection { id: "contact".to_string(),
                h2 { class: "section-header", "Contact" }
                ContactForm {}
            }
        }

        for project in PROJECTS.iter() {
            Lightbox { key: "{project.id}", id: project.id.to_string(), title: project.title.to_string(),
                p { class: "lightbox-summary", "{project.summary}" }
                p { "{project.detail}" }
            }
        }

        footer { class: "site-footer", "© S. O. Igbe" }

        BackToTop {}
        CookieBanner {}
    }
}

/// Certificate card that flips to show issuer and year.
#[component]
fn CertificateCard(name: &'static str, issuer: &'static str, year: &'static str) -> Element {
    let mut flipped = use_signal(|| false);
    let class = if flipped() { "cert-card flipped" } else { "cert-card" };

    rsx! {
        ActivatableCard {
            class: class.to_string(),
            label: name.to_string(),
            pressed: flipped(),
            onactivate: move |_| {
                let next = !flipped();
                flipped.set(next);
            },
            if flipped() {
                p { class: "cert-issuer", "{issuer}" }
                p { class: "cert-year", "{year}" }
            } else {
                h3 { "{name}" }
            }
        }
    }
}
