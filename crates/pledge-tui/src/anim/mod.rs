//! Animation stack for the pledge page.
//!
//! Two pure atoms and two controllers built on top of them:
//!
//! - `easing` - easing curves mapping progress [0, 1] to [0, 1]
//! - `timing` - elapsed-time progress and interpolation helpers
//! - `counter` - one-shot stat counter animation (0 to target, quartic ease-out)
//! - `scroll` - smooth scroll controller for page navigation
//!
//! Both controllers recompute their value from a captured start `Instant`
//! every frame, so there is no accumulated drift: call `update()` (scroll)
//! or `value()` (counter) once per frame and render the result.

pub mod counter;
pub mod easing;
pub mod scroll;
pub mod timing;

pub use counter::CounterAnimation;
pub use easing::{EasingType, EasingTypeExt};
pub use scroll::ScrollAnimator;
