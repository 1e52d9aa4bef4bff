//! Fixed navbar with scroll-aware chrome and a mobile menu.

use dioxus::prelude::*;
use folio_core::content::{NAV_LINKS, OWNER_MONOGRAM};

#[component]
pub fn Navbar(scrolled: Signal<bool>) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: if scrolled() { "navbar navbar-scrolled" } else { "navbar" },

            div {
                class: "navbar-inner",

                a { class: "navbar-brand gradient-text", href: "#home", "{OWNER_MONOGRAM}" }

                nav {
                    class: "navbar-links",
                    for link in NAV_LINKS {
                        a { class: "navbar-link", href: "{link.href}", "{link.name}" }
                    }
                }

                a { class: "btn btn-outline navbar-resume", href: "#", "Resume" }

                button {
                    class: "navbar-menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = *menu_open.peek();
                        menu_open.set(!open);
                    },
                    if menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
            }

            // Mobile menu; any selection closes it.
            if menu_open() {
                div {
                    class: "navbar-mobile",
                    nav {
                        class: "navbar-mobile-links",
                        for link in NAV_LINKS {
                            a {
                                class: "navbar-link",
                                href: "{link.href}",
                                onclick: move |_| menu_open.set(false),
                                "{link.name}"
                            }
                        }
                        a {
                            class: "btn btn-outline",
                            href: "#",
                            onclick: move |_| menu_open.set(false),
                            "Resume"
                        }
                    }
                }
            }
        }
    }
}
