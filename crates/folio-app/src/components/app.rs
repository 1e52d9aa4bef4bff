//! Root page composition.

use dioxus::prelude::*;

use crate::theme::ThemedRoot;

use super::{About, Contact, Experience, Footer, Hero, Navbar, Projects, Skills};

/// The full single-page layout: fixed navbar, the six anchored sections in
/// order, and the footer.
#[component]
pub fn App() -> Element {
    // The navbar swaps to its "scrolled" chrome once this sentinel leaves
    // the viewport.
    let mut scrolled = use_signal(|| false);

    rsx! {
        ThemedRoot {
            div {
                class: "page",

                div {
                    class: "top-sentinel",
                    onvisible: move |evt| {
                        let at_top = evt.data().is_intersecting().unwrap_or(true);
                        scrolled.set(!at_top);
                    },
                }

                Navbar { scrolled }

                main {
                    Hero {}
                    About {}
                    Experience {}
                    Skills {}
                    Projects {}
                    Contact {}
                }

                Footer {}
            }
        }
    }
}
