//! About section: bio, education, and interests.

use dioxus::prelude::*;
use folio_core::content::{ABOUT_PARAGRAPHS, EDUCATION, INTERESTS};
use folio_core::reveal::SectionReveal;

use super::section::{SectionHeader, report_visibility, slot_style};

#[component]
pub fn About() -> Element {
    let reveal = use_signal(SectionReveal::new);
    let state = reveal.read().state();

    rsx! {
        section {
            id: "about",
            class: "page-section",
            onvisible: move |evt| report_visibility(reveal, "about", &evt.data()),

            div { class: "section-backdrop backdrop-primary" }
            div { class: "blur-circle circle-primary at-top-left" }
            div { class: "blur-circle circle-secondary at-bottom-right" }

            div {
                class: "section-body narrow",

                SectionHeader {
                    title: "About Me",
                    subtitle: "Here's a little bit about my background and what drives me.",
                    state,
                }

                div {
                    class: "glass card slot",
                    style: slot_style(2, state),
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { class: "about-paragraph", "{paragraph}" }
                    }
                }

                div {
                    class: "about-grid slot",
                    style: slot_style(3, state),

                    div {
                        class: "glass card",
                        h3 { class: "card-title", "Education" }
                        ul {
                            class: "education-list",
                            for entry in EDUCATION {
                                li {
                                    p { class: "education-degree", "{entry.degree}" }
                                    if !entry.focus.is_empty() {
                                        p { class: "education-focus", "{entry.focus}" }
                                    }
                                    p { class: "education-school", "{entry.school}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "glass card",
                        h3 { class: "card-title", "Interests" }
                        ul {
                            class: "interest-grid",
                            for interest in INTERESTS {
                                li {
                                    class: "interest-item",
                                    span { class: "interest-dot" }
                                    "{interest}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
