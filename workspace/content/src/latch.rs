use tracing::trace;

/// Options handed to the viewport observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    /// Stop observing after the first intersection.
    pub trigger_once: bool,
    /// CSS margin applied to the viewport before testing intersection.
    pub root_margin: String,
    /// Fraction of the target that has to be visible.
    pub threshold: f64,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            root_margin: "-100px".to_string(),
            threshold: 0.0,
        }
    }
}

/// A boolean that only moves from hidden to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A latch that is already set, used when observation is unavailable.
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies one observation event. Returns `true` only for the event that
    /// flips the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        trace!("Visibility latch set");
        self.visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = VisibilityLatch::new();
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_ignores_non_intersecting_events() {
        let mut latch = VisibilityLatch::new();

        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_fires_once_and_never_reverts() {
        let mut latch = VisibilityLatch::new();

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        for event in [false, true, false, false, true] {
            assert!(!latch.observe(event));
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn test_preset_latch_does_not_fire() {
        let mut latch = VisibilityLatch::visible();
        assert!(latch.is_visible());
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_default_observe_options() {
        let options = ObserveOptions::default();
        assert!(options.trigger_once);
        assert_eq!(options.root_margin, "-100px");
        assert_eq!(options.threshold, 0.0);
    }
}
