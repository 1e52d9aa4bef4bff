//! Content catalogs and interaction state for the folio site.
//!
//! Everything on the page that can change lives here as a plain state
//! machine, free of any UI framework, so the behavior is testable without a
//! rendering environment. The app crate wires these machines to Dioxus
//! signals and timers.

pub mod contact;
pub mod content;
pub mod gallery;
pub mod reveal;
pub mod skills;
pub mod typewriter;
