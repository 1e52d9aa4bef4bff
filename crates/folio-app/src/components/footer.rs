//! Page footer.

use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use folio_core::content::{FOOTER_TAGLINE, OWNER_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "glass footer-card",

                div {
                    class: "footer-top",
                    div {
                        class: "footer-identity",
                        h2 { class: "gradient-text footer-name", "{OWNER_NAME}" }
                        p { class: "footer-tagline", "{FOOTER_TAGLINE}" }
                    }
                    div {
                        class: "footer-social",
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

                div {
                    class: "footer-bottom",
                    span { "\u{a9} {year} {OWNER_NAME}. All rights reserved." }
                    div {
                        class: "footer-legal",
                        a { href: "#", "Privacy Policy" }
                        a { href: "#", "Terms of Service" }
                    }
                }
            }
        }
    }
}
