/// Snapshot of the document element's scroll box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// How far down the page the reader is, in [0, 1]. Pages with no scroll
    /// room report 0.
    pub fn ratio(&self) -> f64 {
        let room = self.scroll_height - self.client_height;
        if room <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / room).clamp(0.0, 1.0)
    }
}

/// Width of the progress bar as a whole percentage.
pub fn bar_percent(ratio: f64) -> u32 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_room_is_zero() {
        let m = ScrollMetrics { scroll_top: 0.0, scroll_height: 800.0, client_height: 800.0 };
        assert_eq!(m.ratio(), 0.0);

        let short = ScrollMetrics { scroll_top: 10.0, scroll_height: 400.0, client_height: 800.0 };
        assert_eq!(short.ratio(), 0.0);
    }

    #[test]
    fn halfway_down() {
        let m = ScrollMetrics { scroll_top: 600.0, scroll_height: 2000.0, client_height: 800.0 };
        assert_eq!(m.ratio(), 0.5);
        assert_eq!(bar_percent(m.ratio()), 50);
    }

    #[test]
    fn overscroll_is_clamped() {
        let bottom = ScrollMetrics { scroll_top: 1300.0, scroll_height: 2000.0, client_height: 800.0 };
        assert_eq!(bottom.ratio(), 1.0);

        let top = ScrollMetrics { scroll_top: -40.0, scroll_height: 2000.0, client_height: 800.0 };
        assert_eq!(top.ratio(), 0.0);
    }

    #[test]
    fn percent_rounds_and_tolerates_nan() {
        assert_eq!(bar_percent(0.334), 33);
        assert_eq!(bar_percent(0.996), 100);
        assert_eq!(bar_percent(f64::NAN), 0);
    }
}
