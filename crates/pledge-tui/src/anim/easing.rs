//! Pure easing functions.
//!
//! Each curve maps a progress value in [0, 1] to an eased value in [0, 1].
//! Stat counters always use quartic ease-out; scroll animations use the
//! curve selected in `ScrollConfig`.

// Re-export EasingType from core
pub use pledge_core::EasingType;

/// Extension trait attaching the curve math to the config enum
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quartic => ease_out_pow(t, 4),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Polynomial ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn ease_out_pow(t: f64, n: u32) -> f64 {
    1.0 - (1.0 - t).powi(n as i32)
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quartic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_boundaries() {
        for easing in ALL {
            // t=0 gives 0 (except None, which only jumps at the end)
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            // t=1 gives exactly 1 for every curve
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_quartic_midpoint() {
        // 1 - (1 - 0.5)^4 = 0.9375
        assert!((EasingType::Quartic.apply(0.5) - 0.9375).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(EasingType::Quartic.apply(-0.5), 0.0);
        assert_eq!(EasingType::Quartic.apply(1.5), 1.0);
    }
}
