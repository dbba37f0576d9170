//! One-shot stat counter animation.
//!
//! Drives a displayed integer from 0 to a target value with quartic
//! ease-out. The current value is recomputed from the captured start time
//! on every call, so rendering frequency does not affect the curve.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress};

/// Default animation length, matching the page's original feel.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start: Instant,
    target: u64,
    duration: Duration,
}

impl CounterAnimation {
    /// Start an animation toward `target` with the default duration.
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, DEFAULT_DURATION)
    }

    /// Start an animation toward `target` over `duration`.
    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self {
            start: Instant::now(),
            target,
            duration,
        }
    }

    /// The value to display this frame.
    ///
    /// Monotonically non-decreasing over the life of the animation and
    /// exactly `target` once the duration has elapsed.
    pub fn value(&self) -> u64 {
        Self::value_at(self.target, progress(self.start, self.duration))
    }

    /// Interpolated value at progress `t` in [0, 1].
    pub fn value_at(target: u64, t: f64) -> u64 {
        if t >= 1.0 {
            return target;
        }
        (target as f64 * EasingType::Quartic.apply(t)).floor() as u64
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        is_complete(self.start, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_endpoints() {
        assert_eq!(CounterAnimation::value_at(1000, 0.0), 0);
        assert_eq!(CounterAnimation::value_at(1000, 1.0), 1000);
        // Exact target even for values the floor would otherwise clip
        assert_eq!(CounterAnimation::value_at(7, 1.0), 7);
        assert_eq!(CounterAnimation::value_at(0, 1.0), 0);
    }

    #[test]
    fn test_value_monotonic() {
        for target in [1u64, 88, 3_500_000] {
            let mut prev = 0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = CounterAnimation::value_at(target, t);
                assert!(v >= prev, "target {} regressed at t={}", target, t);
                assert!(v <= target);
                prev = v;
            }
        }
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let anim = CounterAnimation::with_duration(500, Duration::ZERO);
        assert!(anim.is_complete());
        assert_eq!(anim.value(), 500);
    }

    #[test]
    fn test_fresh_animation_starts_low() {
        let anim = CounterAnimation::new(1_000_000);
        assert!(!anim.is_complete());
        // Immediately after start the eased value is far from the target
        assert!(anim.value() < 1_000_000);
    }
}
