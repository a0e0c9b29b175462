use std::fmt;

/// One side of an observer `rootMargin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Px(v) => write!(f, "{}px", v),
            Inset::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Viewport inset in CSS order: top, right, bottom, left.
/// Negative values shrink the root box, so targets have to travel further in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl RootMargin {
    pub const fn new(top: Inset, right: Inset, bottom: Inset, left: Inset) -> Self {
        Self { top, right, bottom, left }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Intersection configuration shared by the reveal detector and the section tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub thresholds: &'static [f64],
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    /// Fires once 12% of the element is on screen, a little before it clears
    /// the bottom edge of the viewport.
    pub const REVEAL: ObserverOptions = ObserverOptions {
        thresholds: &[0.12],
        root_margin: RootMargin::new(Inset::Px(0.0), Inset::Px(0.0), Inset::Percent(-10.0), Inset::Px(0.0)),
    };

    /// Upper-middle band of the viewport, used to pick the active nav section.
    pub const SECTIONS: ObserverOptions = ObserverOptions {
        thresholds: &[0.1, 0.2, 0.35],
        root_margin: RootMargin::new(Inset::Percent(-15.0), Inset::Px(0.0), Inset::Percent(-70.0), Inset::Px(0.0)),
    };
}

/// One-shot "has been seen" flag behind a visibility observer.
///
/// Flips to seen on the first intersecting record and stays there. Once
/// released (observer torn down) it ignores everything, so a record that was
/// already queued when the observer disconnected can't change state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeenLatch {
    seen: bool,
    released: bool,
}

impl SeenLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Still waiting for the first intersection.
    fn is_armed(&self) -> bool {
        !self.seen && !self.released
    }

    /// Feeds one observer batch. Returns true only on the call that flips the latch.
    pub fn observe<I>(&mut self, intersecting: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        if !self.is_armed() {
            return false;
        }
        if intersecting.into_iter().any(|hit| hit) {
            self.seen = true;
            return true;
        }
        false
    }

    pub fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margins_render_as_css() {
        assert_eq!(ObserverOptions::REVEAL.root_margin.to_string(), "0px 0px -10% 0px");
        assert_eq!(ObserverOptions::SECTIONS.root_margin.to_string(), "-15% 0px -70% 0px");
        let flat = RootMargin::new(Inset::Px(0.0), Inset::Px(8.0), Inset::Px(0.0), Inset::Percent(5.0));
        assert_eq!(flat.to_string(), "0px 8px 0px 5%");
    }

    #[test]
    fn reveal_threshold_is_twelve_percent() {
        assert_eq!(ObserverOptions::REVEAL.thresholds, &[0.12]);
        assert_eq!(ObserverOptions::SECTIONS.thresholds, &[0.1, 0.2, 0.35]);
    }

    #[test]
    fn latch_flips_once_and_never_reverts() {
        let mut latch = SeenLatch::new();
        assert!(!latch.observe([false]));
        assert!(!latch.is_seen());

        assert!(latch.observe([false, true]));
        assert!(latch.is_seen());

        assert!(!latch.observe([true]));
        assert!(!latch.observe([false]));
        assert!(latch.is_seen());
    }

    #[test]
    fn released_latch_ignores_late_records() {
        let mut latch = SeenLatch::new();
        latch.release();
        assert!(!latch.observe([true]));
        assert!(!latch.is_seen());
    }

    #[test]
    fn release_after_seen_keeps_seen() {
        let mut latch = SeenLatch::new();
        assert!(latch.observe([true]));
        latch.release();
        assert!(latch.is_seen());
        assert!(!latch.is_armed());
    }
}
