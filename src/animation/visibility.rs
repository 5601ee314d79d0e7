/// Tracks whether an element counts as "in view".
///
/// With `once` the first intersection latches forever, which is what counters
/// and reveal-on-scroll cards use. Without it the latest observation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    once: bool,
    visible: bool,
}

impl Visibility {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    /// Feeds one intersection result. Returns `true` when the visible flag changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.once && self.visible {
            return false;
        }
        let changed = self.visible != intersecting;
        self.visible = intersecting;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A `once` tracker that has latched needs no more observations.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_latches_on_first_intersection() {
        let mut v = Visibility::new(true);
        assert!(!v.observe(false));
        assert!(!v.is_visible());
        assert!(v.observe(true));
        assert!(v.is_settled());
        assert!(!v.observe(false));
        assert!(v.is_visible());
    }

    #[test]
    fn repeat_mode_follows_observations() {
        let mut v = Visibility::new(false);
        assert!(v.observe(true));
        assert!(v.observe(false));
        assert!(!v.is_visible());
        assert!(!v.observe(false));
        assert!(!v.is_settled());
    }
}
