//! Project gallery filtering.
//!
//! The gallery shows the fixed project catalog restricted by the active
//! filter. Filtering is a stable pass over the catalog: insertion (id) order
//! is preserved and nothing is re-sorted. Hover state is purely
//! presentational and never affects which projects are visible.

use crate::content::{ProjectRecord, PROJECTS};

/// Which subset of the project catalog is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    FeaturedOnly,
}

impl ProjectFilter {
    fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::FeaturedOnly => project.featured,
        }
    }
}

/// Interaction state for the project gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    filter: ProjectFilter,
    hovered: Option<u32>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the active filter. Re-selecting the current mode is a no-op
    /// in effect: the derived view is unchanged.
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// The catalog subset under the active filter, in catalog order.
    ///
    /// Recomputed eagerly on every call; the catalog is small and static so
    /// there is nothing worth caching.
    pub fn visible_projects(&self) -> Vec<&'static ProjectRecord> {
        PROJECTS
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }

    /// Marks a card as hovered, which shows its source/live link overlay.
    pub fn hover_enter(&mut self, id: u32) {
        self.hovered = Some(id);
    }

    /// Clears hover, but only if `id` is still the hovered card. Pointer
    /// enter on one card may arrive before leave on the previous one.
    pub fn hover_leave(&mut self, id: u32) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_shows_full_catalog_in_order() {
        let gallery = GalleryState::new();
        let ids: Vec<u32> = gallery.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_featured_filter_preserves_order() {
        let mut gallery = GalleryState::new();
        gallery.set_filter(ProjectFilter::FeaturedOnly);

        let visible = gallery.visible_projects();
        assert!(visible.iter().all(|p| p.featured));

        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = PROJECTS
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(ids, vec![1, 2, 6]);
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let mut gallery = GalleryState::new();
        gallery.set_filter(ProjectFilter::FeaturedOnly);
        let once = gallery.visible_projects();

        gallery.set_filter(ProjectFilter::FeaturedOnly);
        let twice = gallery.visible_projects();

        assert_eq!(
            once.iter().map(|p| p.id).collect::<Vec<_>>(),
            twice.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_switching_back_to_all_restores_catalog() {
        let mut gallery = GalleryState::new();
        gallery.set_filter(ProjectFilter::FeaturedOnly);
        gallery.set_filter(ProjectFilter::All);
        assert_eq!(gallery.visible_projects().len(), PROJECTS.len());
    }

    #[test]
    fn test_hover_tracks_latest_card() {
        let mut gallery = GalleryState::new();
        gallery.hover_enter(2);
        assert_eq!(gallery.hovered(), Some(2));

        // Enter on the next card before leave on the previous one.
        gallery.hover_enter(3);
        gallery.hover_leave(2);
        assert_eq!(gallery.hovered(), Some(3));

        gallery.hover_leave(3);
        assert_eq!(gallery.hovered(), None);
    }

    #[test]
    fn test_hover_does_not_affect_visible_projects() {
        let mut gallery = GalleryState::new();
        let before: Vec<u32> = gallery.visible_projects().iter().map(|p| p.id).collect();
        gallery.hover_enter(4);
        let after: Vec<u32> = gallery.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }
}
