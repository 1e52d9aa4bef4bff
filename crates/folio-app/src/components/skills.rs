//! Skills section with animated proficiency bars.

use dioxus::prelude::*;
use folio_core::content::{SKILL_CATEGORIES, SkillRecord};
use folio_core::reveal::SectionReveal;
use folio_core::skills::width_percent;

use super::section::{SectionHeader, report_visibility, slot_style};

#[component]
pub fn Skills() -> Element {
    let reveal = use_signal(SectionReveal::new);
    let state = reveal.read().state();
    let visible = reveal.read().is_visible();

    rsx! {
        section {
            id: "skills",
            class: "page-section",
            onvisible: move |evt| report_visibility(reveal, "skills", &evt.data()),

            div { class: "section-backdrop backdrop-secondary" }
            div { class: "blur-circle circle-secondary at-top-left" }
            div { class: "blur-circle circle-primary at-bottom-right" }

            div {
                class: "section-body narrow",

                SectionHeader {
                    title: "Skills & Expertise",
                    subtitle: "A comprehensive overview of my technical skills and proficiencies.",
                    state,
                }

                div {
                    class: "skills-grid",
                    for (index, category) in SKILL_CATEGORIES.iter().enumerate() {
                        div {
                            key: "{category.name}",
                            class: "glass card slot",
                            style: slot_style(2 + index, state),

                            h3 { class: "card-title gradient-text", "{category.name}" }

                            div {
                                class: "skill-rows",
                                for skill in category.skills {
                                    SkillBar {
                                        key: "{skill.name}",
                                        skill: *skill,
                                        visible,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One labeled proficiency bar. The fill animates from zero to its target
/// width when the owning section first reveals, and stays there.
#[component]
fn SkillBar(skill: SkillRecord, visible: bool) -> Element {
    let width = if visible { width_percent(skill.level) } else { 0 };

    rsx! {
        div {
            class: "skill-row",

            div {
                class: "skill-row-labels",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{skill.level}/10" }
            }

            div {
                class: "skill-track",
                div { class: "skill-fill", style: "width: {width}%" }
            }
        }
    }
}
