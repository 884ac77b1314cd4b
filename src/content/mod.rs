//! Typed site content: the tag catalog, projects, and work experience.
//!
//! Everything here is constant data defined at compile time and read by
//! the `check` and `export` operations. The one piece of behavior is the
//! display ordering for experience entries, which lives here rather than
//! with the (external) rendering layer so that every consumer sees the
//! same order.

pub mod experience;
pub mod project;
pub mod tags;

pub use experience::{EXPERIENCE, Experience};
pub use project::{PROJECTS, Project};
pub use tags::{CATALOG, ProjectTag};

/// Experience entries in display order: ongoing roles first, then by
/// start date, newest first.
pub fn experience_sorted() -> Vec<Experience> {
    let mut entries = EXPERIENCE.to_vec();
    entries.sort_by(|a, b| {
        b.is_ongoing()
            .cmp(&a.is_ongoing())
            .then(b.start_date.cmp(&a.start_date))
    });
    entries
}
