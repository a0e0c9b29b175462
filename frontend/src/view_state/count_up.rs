/// Cubic ease-out: fast start, decelerating into the target.
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// What a count-up animates to and how it is displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUpSpec {
    pub target: f64,
    pub duration_ms: f64,
    pub decimals: usize,
    pub suffix: String,
}

impl CountUpSpec {
    pub const DEFAULT_DURATION_MS: f64 = 900.0;

    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration_ms: Self::DEFAULT_DURATION_MS,
            decimals: 0,
            suffix: String::new(),
        }
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Linear progress in [0, 1]. A non-positive duration finishes immediately.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.target * ease_out_cubic(self.progress(elapsed_ms))
    }

    /// Fixed-point text plus suffix. Anything that rounds to zero prints
    /// without a sign, so a negative target starts at "0" rather than "-0".
    pub fn format(&self, value: f64) -> String {
        let mut text = format!("{:.*}", self.decimals, value);
        if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
            text.remove(0);
        }
        text.push_str(&self.suffix);
        text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Running,
    Finished,
    Cancelled,
}

/// A single pass of the animation loop, sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUpRun {
    start_ms: f64,
    state: RunState,
}

impl CountUpRun {
    pub fn start(start_ms: f64) -> Self {
        Self { start_ms, state: RunState::Running }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Samples the value for a frame timestamp. Returns `None` once the run is
    /// over, so a frame that slipped through after cancel does nothing.
    pub fn tick(&mut self, spec: &CountUpSpec, now_ms: f64) -> Option<f64> {
        if !self.is_running() {
            return None;
        }
        let elapsed = now_ms - self.start_ms;
        if spec.progress(elapsed) >= 1.0 {
            self.state = RunState::Finished;
        }
        Some(spec.value_at(elapsed))
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            self.state = RunState::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> CountUpSpec {
        CountUpSpec::new(300.0).suffix("+")
    }

    fn display_at(spec: &CountUpSpec, elapsed_ms: f64) -> String {
        spec.format(spec.value_at(elapsed_ms))
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn jobs_counter_starts_at_zero_and_lands_on_target() {
        let spec = jobs();
        assert_eq!(display_at(&spec, 0.0), "0+");
        assert_eq!(display_at(&spec, 900.0), "300+");
        assert_eq!(display_at(&spec, 5_000.0), "300+");
    }

    #[test]
    fn rating_keeps_one_decimal() {
        let spec = CountUpSpec::new(5.0).decimals(1).suffix("★");
        assert_eq!(display_at(&spec, 0.0), "0.0★");
        assert_eq!(display_at(&spec, 900.0), "5.0★");
    }

    #[test]
    fn value_never_decreases_for_positive_target() {
        let spec = jobs();
        let mut last = f64::MIN;
        for step in 0..=120 {
            let v = spec.value_at(step as f64 * 10.0);
            assert!(v >= last, "value went backwards at step {}", step);
            last = v;
        }
        assert_eq!(last, 300.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let spec = jobs().duration(0.0);
        assert_eq!(display_at(&spec, 0.0), "300+");
    }

    #[test]
    fn negative_target_never_prints_negative_zero() {
        let spec = CountUpSpec::new(-12.0);
        assert_eq!(display_at(&spec, 0.0), "0");
        assert_eq!(display_at(&spec, 1.0), "0");
        assert_eq!(display_at(&spec, 900.0), "-12");
    }

    #[test]
    fn values_rounding_to_zero_drop_the_sign() {
        let whole = CountUpSpec::new(-12.0);
        assert_eq!(whole.format(-0.3), "0");
        assert_eq!(whole.format(-0.6), "-1");

        let tenths = CountUpSpec::new(-5.0).decimals(1).suffix("★");
        assert_eq!(tenths.format(-0.04), "0.0★");
        assert_eq!(tenths.format(-0.06), "-0.1★");
    }

    #[test]
    fn run_finishes_at_full_progress_and_stops_ticking() {
        let spec = jobs();
        let mut run = CountUpRun::start(1_000.0);

        assert_eq!(run.tick(&spec, 1_000.0), Some(0.0));
        assert!(run.is_running());

        let mid = run.tick(&spec, 1_450.0).unwrap();
        assert!(mid > 0.0 && mid < 300.0);

        assert_eq!(run.tick(&spec, 1_900.0), Some(300.0));
        assert!(!run.is_running());
        assert_eq!(run.tick(&spec, 2_000.0), None);
    }

    #[test]
    fn cancelled_run_ignores_late_frames() {
        let spec = jobs();
        let mut run = CountUpRun::start(0.0);
        run.tick(&spec, 100.0);
        run.cancel();
        assert!(!run.is_running());
        assert_eq!(run.tick(&spec, 200.0), None);
    }
}
