//! Filterable project gallery.

use dioxus::prelude::*;
use folio_core::content::ProjectRecord;
use folio_core::gallery::{GalleryState, ProjectFilter};
use folio_core::reveal::SectionReveal;

use super::section::{SectionHeader, report_visibility, slot_style};

#[component]
pub fn Projects() -> Element {
    let reveal = use_signal(SectionReveal::new);
    let state = reveal.read().state();

    let mut gallery = use_signal(GalleryState::new);
    let filter = gallery.read().filter();
    let hovered = gallery.read().hovered();
    let shown = gallery.read().visible_projects();

    rsx! {
        section {
            id: "projects",
            class: "page-section",
            onvisible: move |evt| report_visibility(reveal, "projects", &evt.data()),

            div { class: "section-backdrop backdrop-primary" }
            div { class: "blur-circle circle-tertiary at-top-left" }
            div { class: "blur-circle circle-secondary at-bottom-right" }

            div {
                class: "section-body",

                SectionHeader {
                    title: "My Projects",
                    subtitle: "A showcase of my recent work and personal projects.",
                    state,
                }

                div {
                    class: "filter-bar slot",
                    style: slot_style(2, state),
                    div {
                        class: "glass filter-group",
                        FilterButton {
                            label: "All Projects",
                            active: filter == ProjectFilter::All,
                            onselect: move |_| gallery.write().set_filter(ProjectFilter::All),
                        }
                        FilterButton {
                            label: "Featured",
                            active: filter == ProjectFilter::FeaturedOnly,
                            onselect: move |_| gallery.write().set_filter(ProjectFilter::FeaturedOnly),
                        }
                    }
                }

                div {
                    class: "project-grid slot",
                    style: slot_style(3, state),
                    for project in shown {
                        ProjectCard {
                            key: "{project.id}",
                            project,
                            hovered: hovered == Some(project.id),
                            on_enter: move |id| gallery.write().hover_enter(id),
                            on_leave: move |id| gallery.write().hover_leave(id),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterButton(label: &'static str, active: bool, onselect: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active { "filter-btn active" } else { "filter-btn" },
            onclick: move |_| onselect.call(()),
            "{label}"
        }
    }
}

/// A single project card; hovering shows the source/live link overlay.
#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    hovered: bool,
    on_enter: EventHandler<u32>,
    on_leave: EventHandler<u32>,
) -> Element {
    rsx! {
        article {
            class: "glass project-card",
            onmouseenter: move |_| on_enter.call(project.id),
            onmouseleave: move |_| on_leave.call(project.id),

            div {
                class: "project-media",
                img {
                    class: "project-image",
                    src: "{project.image_ref}",
                    alt: "{project.title}",
                }
                div {
                    class: if hovered { "project-overlay is-open" } else { "project-overlay" },
                    a { class: "overlay-link", href: "{project.source_url}", "Source" }
                    a { class: "overlay-link", href: "{project.live_url}", "Live" }
                }
            }

            div {
                class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }

                div {
                    class: "tech-tags",
                    for tech in project.technologies {
                        span { class: "tech-tag", "{tech}" }
                    }
                }

                a { class: "project-more", href: "{project.live_url}", "View Project \u{2192}" }
            }
        }
    }
}
