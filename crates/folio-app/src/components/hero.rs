//! Hero section with the typewriter headline and particle backdrop.
//!
//! Unlike the scroll sections, the hero animates on load: each row carries a
//! CSS entrance animation with an inline stagger delay.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::content::{HERO_GREETING, HERO_ROLES, HERO_TAGLINE, OWNER_NAME, SOCIAL_LINKS};
use folio_core::reveal::compute_delay;
use folio_core::typewriter::Typewriter;

/// One machine step every 80ms reads as natural typing.
const TYPE_TICK: Duration = Duration::from_millis(80);

/// Ticks the finished phrase is held before deleting (~2s at `TYPE_TICK`).
const HOLD_TICKS: u32 = 25;

/// The hero staggers its own rows a little tighter than scroll sections.
const HERO_STAGGER: f32 = 0.1;

#[component]
pub fn Hero() -> Element {
    let mut typewriter = use_signal(|| Typewriter::new(HERO_ROLES, HOLD_TICKS));

    use_future(move || async move {
        loop {
            tokio::time::sleep(TYPE_TICK).await;
            typewriter.write().tick();
        }
    });

    let typed = typewriter.read().text();

    rsx! {
        section {
            id: "home",
            class: "hero",

            // Decorative drifting dots behind the headline.
            div {
                class: "particle-field",
                for i in 0..24u32 {
                    span { class: "particle", style: "--i: {i}" }
                }
            }

            div {
                class: "hero-inner",

                p { class: "hero-greeting fade-up", style: hero_delay(0), "{HERO_GREETING}" }
                h1 { class: "hero-name fade-up", style: hero_delay(1), "{OWNER_NAME}" }

                div {
                    class: "hero-role fade-up",
                    style: hero_delay(2),
                    span { "{typed}" }
                    span { class: "caret" }
                }

                p { class: "hero-tagline fade-up", style: hero_delay(3), "{HERO_TAGLINE}" }

                div {
                    class: "hero-actions fade-up",
                    style: hero_delay(4),
                    a { class: "btn btn-primary", href: "#contact", "Get in Touch" }
                    a { class: "btn btn-outline", href: "#", "Download Resume" }
                }

                div {
                    class: "hero-social fade-up",
                    style: hero_delay(5),
                    for link in SOCIAL_LINKS {
                        a {
                            class: "social-link",
                            href: "{link.href}",
                            aria_label: "{link.label}",
                            "{link.glyph}"
                        }
                    }
                }
            }

            a { class: "scroll-cue", href: "#about", "\u{2193}" }
        }
    }
}

fn hero_delay(row: usize) -> String {
    format!("animation-delay: {:.1}s", compute_delay(row, HERO_STAGGER))
}
