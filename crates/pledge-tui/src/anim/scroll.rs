//! Smooth scroll controller for the page viewport.
//!
//! Anchor jumps (`scroll_to`) and line scrolling (`scroll_by`) both resolve
//! into a short eased glide from the current position. Rapid key presses
//! accumulate into a pending delta that is folded into one glide on the
//! next `update()`, so holding `j` feels continuous instead of restarting
//! the animation per keystroke.

use std::time::{Duration, Instant};

use pledge_core::ScrollConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

/// An in-flight scroll glide.
#[derive(Debug, Clone)]
struct Glide {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    glide: Option<Glide>,
    config: ScrollConfig,
    /// Current interpolated position, refreshed by `update()`
    position: u16,
    /// Scroll events batched since the last frame
    pending: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            glide: None,
            config,
            position: 0,
            pending: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Final position once the current glide (if any) lands.
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.position)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Whether the main loop should run at the animation frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending != 0
    }

    fn smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    /// Jump to a position immediately, cancelling any glide.
    pub fn jump_to(&mut self, position: u16, max_scroll: u16) {
        self.glide = None;
        self.pending = 0;
        self.position = position.min(max_scroll);
    }

    /// Glide to an absolute position (anchor navigation).
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);
        if !self.smooth() {
            self.jump_to(target, max_scroll);
            return;
        }
        if target == self.position {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            started: Instant::now(),
            from: self.position,
            to: target,
            duration: self.duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive is down). Batched until the next frame.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth() {
            let step = delta * self.config.scroll_lines.max(1) as i32;
            self.position = (self.position as i32 + step).clamp(0, max_scroll as i32) as u16;
            self.glide = None;
            return;
        }
        self.pending += delta;
    }

    /// Advance the animation one frame and return the current position.
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        // Fold batched deltas into a glide relative to the current target,
        // so chained presses extend the motion instead of resetting it.
        if self.pending != 0 {
            let target =
                (self.target() as i32 + self.pending).clamp(0, max_scroll as i32) as u16;
            self.pending = 0;
            if target != self.position {
                self.glide = Some(Glide {
                    started: Instant::now(),
                    from: self.position,
                    to: target,
                    duration: self.duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref glide) = self.glide {
            if is_complete(glide.started, glide.duration) {
                self.position = glide.to.min(max_scroll);
                self.glide = None;
            } else {
                let t = glide.easing.apply(progress(glide.started, glide.duration));
                self.position = lerp_u16(glide.from, glide.to, t).min(max_scroll);
            }
        } else {
            self.position = self.position.min(max_scroll);
        }

        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_when_smooth_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(40, 200);
        assert_eq!(animator.position(), 40);
        assert!(!animator.is_animating());

        animator.scroll_by(3, 200);
        assert_eq!(animator.position(), 43);
    }

    #[test]
    fn test_scroll_to_starts_glide() {
        let mut animator = ScrollAnimator::new(smooth_config());
        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100);
    }

    #[test]
    fn test_scroll_by_batches_until_update() {
        let mut animator = ScrollAnimator::new(smooth_config());
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200);
        assert_eq!(animator.target(), 30);
    }

    #[test]
    fn test_targets_clamp_to_max() {
        let mut animator = ScrollAnimator::new(smooth_config());
        animator.jump_to(50, 100);
        animator.scroll_to(300, 100);
        animator.update(100);
        assert!(animator.target() <= 100);

        animator.jump_to(0, 100);
        animator.scroll_by(-5, 100);
        animator.update(100);
        assert_eq!(animator.target(), 0);
    }

    #[test]
    fn test_jump_cancels_glide() {
        let mut animator = ScrollAnimator::new(smooth_config());
        animator.scroll_to(100, 200);
        animator.jump_to(0, 200);
        assert!(!animator.is_animating());
        assert_eq!(animator.position(), 0);
    }

    #[test]
    fn test_zero_duration_completes_on_update() {
        let config = ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 0,
            ..Default::default()
        };
        // duration 0 disables smoothing entirely
        let mut animator = ScrollAnimator::new(config);
        animator.scroll_to(70, 100);
        assert_eq!(animator.position(), 70);
    }
}
