//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section;
mod skills;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use experience::*;
pub use footer::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
pub use section::*;
pub use skills::*;
