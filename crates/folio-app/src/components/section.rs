//! Shared plumbing for scroll-revealed sections.
//!
//! Every section below the hero owns a `SectionReveal` latch from
//! `folio-core` and feeds it intersection reports from the `onvisible`
//! observer. Child slots carry inline styles derived from the latch state,
//! so once it fires they transition in on the staggered schedule written
//! into their `transition-delay`.

use dioxus::html::events::VisibleData;
use dioxus::prelude::*;
use folio_core::reveal::{
    RevealState, RevealStyle, STAGGER_INTERVAL, SectionReveal, compute_delay,
};

/// Extracts an intersection ratio from an `onvisible` report, tolerating
/// webviews that only deliver the boolean.
pub fn intersection_ratio(data: &VisibleData) -> f32 {
    match data.get_intersection_ratio() {
        Ok(ratio) => ratio as f32,
        Err(_) => {
            if data.is_intersecting().unwrap_or(false) {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Feeds one `onvisible` report into a section's latch.
pub fn report_visibility(mut reveal: Signal<SectionReveal>, name: &'static str, data: &VisibleData) {
    // Latched sections ignore the observer entirely.
    if reveal.peek().is_visible() {
        return;
    }
    let ratio = intersection_ratio(data);
    if reveal.write().report_intersection(ratio) {
        tracing::debug!("section revealed: {name}");
    }
}

/// Inline style for the reveal slot at `index`: current opacity and offset
/// from the state mapping, plus the slot's stagger delay. The stylesheet only
/// supplies the transition itself.
pub fn slot_style(index: usize, state: RevealState) -> String {
    let style = RevealStyle::for_state(state);
    format!(
        "opacity: {}; transform: translateY({}px); transition-delay: {:.1}s",
        style.opacity,
        style.translate_y,
        compute_delay(index, STAGGER_INTERVAL)
    )
}

/// Title and subtitle block shared by every section; occupies slots 0 and 1.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str, state: RevealState) -> Element {
    rsx! {
        h2 { class: "section-title slot", style: slot_style(0, state), "{title}" }
        p { class: "section-subtitle slot", style: slot_style(1, state), "{subtitle}" }
    }
}
