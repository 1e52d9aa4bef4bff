//! Work experience timeline.

use dioxus::prelude::*;
use folio_core::content::{EXPERIENCES, ExperienceRecord};
use folio_core::reveal::{RevealState, SectionReveal};

use super::section::{SectionHeader, report_visibility, slot_style};

#[component]
pub fn Experience() -> Element {
    let reveal = use_signal(SectionReveal::new);
    let state = reveal.read().state();

    rsx! {
        section {
            id: "experience",
            class: "page-section",
            onvisible: move |evt| report_visibility(reveal, "experience", &evt.data()),

            div { class: "blur-circle circle-primary at-top-right" }
            div { class: "blur-circle circle-tertiary at-bottom-left" }

            div {
                class: "section-body narrow",

                SectionHeader {
                    title: "Work Experience",
                    subtitle: "A timeline of my professional journey and achievements.",
                    state,
                }

                div {
                    class: "timeline",
                    for (index, experience) in EXPERIENCES.iter().enumerate() {
                        ExperienceCard {
                            key: "{experience.company}",
                            experience,
                            slot: 2 + index,
                            state,
                            last: index == EXPERIENCES.len() - 1,
                        }
                    }
                }
            }
        }
    }
}

/// One entry on the timeline; all but the last grow a connector stem.
#[component]
fn ExperienceCard(
    experience: &'static ExperienceRecord,
    slot: usize,
    state: RevealState,
    last: bool,
) -> Element {
    rsx! {
        div {
            class: if last { "glass card timeline-entry slot" } else { "glass card timeline-entry has-connector slot" },
            style: slot_style(slot, state),

            div {
                class: "timeline-columns",

                div {
                    class: "timeline-meta",
                    h3 { class: "timeline-title", "{experience.title}" }
                    p { class: "timeline-company", "{experience.company}" }
                    p { class: "timeline-duration", "{experience.duration}" }
                }

                div {
                    class: "timeline-detail",
                    ul {
                        class: "timeline-highlights",
                        for highlight in experience.highlights {
                            li { "{highlight}" }
                        }
                    }
                    div {
                        class: "tech-tags",
                        for tech in experience.technologies {
                            span { class: "tech-tag", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
