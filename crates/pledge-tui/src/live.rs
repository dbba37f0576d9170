//! Simulated live counter for the hero section.
//!
//! Cosmetic only: the figure wanders randomly around the hourly baseline to
//! suggest an ongoing toll. The one invariant is that the displayed value
//! always stays inside [FLOOR, CEILING].

use std::time::Duration;

use rand::Rng;

/// Baseline deaths per hour shown on load.
pub const BASELINE_PER_HOUR: u64 = 88;
/// Lower display bound.
pub const FLOOR: u64 = 80;
/// Upper display bound.
pub const CEILING: u64 = 96;
/// Largest random swing applied per tick.
const MAX_SWING: i64 = 5;
/// How often the figure changes.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct LiveCounter {
    displayed: u64,
}

impl Default for LiveCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveCounter {
    pub fn new() -> Self {
        Self {
            displayed: BASELINE_PER_HOUR,
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.displayed
    }

    /// Pick the next displayed value.
    pub fn tick(&mut self) {
        self.tick_with(&mut rand::thread_rng());
    }

    pub fn tick_with<R: Rng>(&mut self, rng: &mut R) {
        let swing = rng.gen_range(-MAX_SWING..=MAX_SWING);
        let next = (BASELINE_PER_HOUR as i64 + swing).clamp(FLOOR as i64, CEILING as i64);
        self.displayed = next as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_baseline() {
        assert_eq!(LiveCounter::new().value(), BASELINE_PER_HOUR);
    }

    #[test]
    fn test_stays_in_bounds() {
        let mut counter = LiveCounter::new();
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            counter.tick_with(&mut rng);
            assert!(
                (FLOOR..=CEILING).contains(&counter.value()),
                "out of bounds: {}",
                counter.value()
            );
        }
    }
}
