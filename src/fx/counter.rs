//! Count-up animation for stat counters

/// Cubic ease-out over `t` in 0..=1
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Parse a counter target; non-numeric targets are skipped
pub fn parse_target(raw: Option<&str>) -> Option<i64> {
    raw.and_then(super::attr::parse_int)
}

/// One sampled counter frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRun {
    target: i64,
    duration_ms: f64,
}

impl CounterRun {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Displayed value `elapsed_ms` after the run started.
    /// The final frame is the exact target.
    pub fn sample(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                finished: true,
            };
        }

        let eased = ease_out_cubic(progress);
        // Round half up, matching how the page has always displayed it
        let value = (eased * self.target as f64 + 0.5).floor() as i64;
        CounterFrame {
            value,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_counter_250() {
        let run = CounterRun::new(250, 1800.0);
        assert_eq!(run.sample(0.0).value, 0);

        let mut last = 0;
        let mut t = 0.0;
        while t < 1800.0 {
            let frame = run.sample(t);
            assert!(!frame.finished);
            assert!(frame.value >= last);
            assert!(frame.value <= 250);
            last = frame.value;
            t += 16.0;
        }
        assert!(run.sample(900.0).value > run.sample(100.0).value);

        let end = run.sample(1800.0);
        assert_eq!(end, CounterFrame { value: 250, finished: true });
        assert_eq!(run.sample(5000.0).value, 250);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("120")), Some(120));
        assert_eq!(parse_target(Some("n/a")), None);
        assert_eq!(parse_target(None), None);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let run = CounterRun::new(12, 0.0);
        assert_eq!(run.sample(0.0), CounterFrame { value: 12, finished: true });
    }

    proptest! {
        #[test]
        fn prop_counter_never_overshoots(target in 0i64..1_000_000, t in 0.0f64..4000.0) {
            let run = CounterRun::new(target, 1800.0);
            let frame = run.sample(t);
            prop_assert!(frame.value >= 0);
            prop_assert!(frame.value <= target);
            prop_assert_eq!(frame.finished, t >= 1800.0);
        }
    }
}
