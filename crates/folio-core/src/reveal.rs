//! Scroll-triggered section reveal.
//!
//! Each animated section owns a [`SectionReveal`]: a one-way Hidden ->
//! Visible latch driven by viewport intersection reports. Child slots inside
//! a revealed section start their entrance transitions on a staggered
//! schedule computed by [`compute_delay`].

/// Default intersection threshold: 10% of the element must be on screen.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Default gap between consecutive child slot animations, in seconds.
pub const STAGGER_INTERVAL: f32 = 0.2;

/// Visibility state of an animated section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// One-shot reveal latch for a single section.
///
/// Sections are observed independently; each latch owns its own state and
/// detaches after the first transition, so later intersection reports (in
/// either direction) change nothing. A section that never intersects stays
/// `Hidden` forever -- its content is still in the document, just not
/// animated in.
#[derive(Debug, Clone, Copy)]
pub struct SectionReveal {
    state: RevealState,
    threshold: f32,
    detached: bool,
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionReveal {
    /// Creates a latch with the default 10% threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Creates a latch that fires once `threshold` of the element is visible.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold,
            detached: false,
        }
    }

    /// Feeds one intersection report from the viewport observer.
    ///
    /// Returns `true` when this report latched the section visible. After
    /// the latch fires the observer is considered detached and every further
    /// report is ignored.
    pub fn report_intersection(&mut self, ratio: f32) -> bool {
        if self.detached || ratio < self.threshold {
            return false;
        }
        self.state = RevealState::Visible;
        self.detached = true;
        true
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }
}

/// Transition start delay for the child slot at `slot_index`, in seconds.
///
/// Delays are monotonically non-decreasing in the slot index, so slots
/// animate in order once their parent section becomes visible.
pub fn compute_delay(slot_index: usize, stagger_interval: f32) -> f32 {
    slot_index as f32 * stagger_interval
}

/// Style targets for a reveal state.
///
/// Kept as an explicit mapping (rather than animation-library variant
/// objects) so the hidden/visible styling is testable on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Vertical offset in pixels; items slide up as they fade in.
    pub translate_y: f32,
}

impl RevealStyle {
    pub fn for_state(state: RevealState) -> Self {
        match state {
            RevealState::Hidden => Self {
                opacity: 0.0,
                translate_y: 20.0,
            },
            RevealState::Visible => Self {
                opacity: 1.0,
                translate_y: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let reveal = SectionReveal::new();
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert!(!reveal.is_visible());
    }

    #[test]
    fn test_latches_at_threshold() {
        let mut reveal = SectionReveal::new();
        assert!(!reveal.report_intersection(0.05));
        assert!(!reveal.is_visible());

        assert!(reveal.report_intersection(0.1));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_never_reverts_once_visible() {
        let mut reveal = SectionReveal::new();
        assert!(reveal.report_intersection(0.5));

        // Scrolling the section back out of view must not undo the latch,
        // and no further report may latch "again".
        assert!(!reveal.report_intersection(0.0));
        assert!(!reveal.report_intersection(1.0));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_custom_threshold() {
        let mut reveal = SectionReveal::with_threshold(0.5);
        assert!(!reveal.report_intersection(0.49));
        assert!(reveal.report_intersection(0.5));
    }

    #[test]
    fn test_sections_latch_independently() {
        let mut about = SectionReveal::new();
        let mut skills = SectionReveal::new();

        about.report_intersection(1.0);
        assert!(about.is_visible());
        assert!(!skills.is_visible());
    }

    #[test]
    fn test_compute_delay_is_linear() {
        assert_eq!(compute_delay(0, 0.2), 0.0);
        assert!((compute_delay(3, 0.2) - 0.6).abs() < f32::EPSILON);
        assert!((compute_delay(5, STAGGER_INTERVAL) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_delays_non_decreasing() {
        let delays: Vec<f32> = (0..8).map(|i| compute_delay(i, 0.2)).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_style_mapping() {
        let hidden = RevealStyle::for_state(RevealState::Hidden);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.translate_y, 20.0);

        let visible = RevealStyle::for_state(RevealState::Visible);
        assert_eq!(visible.opacity, 1.0);
        assert_eq!(visible.translate_y, 0.0);
    }
}
