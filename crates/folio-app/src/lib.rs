//! Personal portfolio single-page site.
//!
//! A Dioxus desktop shell over the state machines in `folio-core`: the
//! components here wire viewport intersection, pointer, and timer events
//! into those machines and render the result.

pub mod components;
pub mod theme;
