//! The translation actually applied to the rendered strip.
//!
//! While a drag is active the surface follows the pointer with no transition.
//! Otherwise moving the settled position eases from whatever is currently
//! applied toward the new target.

use std::time::{Duration, Instant};

use super::animator::{Easing, SnapAnimator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Values apply on the next frame with no interpolation.
    Immediate,
    Eased { duration: Duration, easing: Easing },
}

#[derive(Debug, Clone)]
pub struct VisualSurface {
    applied: f32,
    target: f32,
    transition: Transition,
    animator: SnapAnimator,
}

impl VisualSurface {
    pub fn new(initial: f32, transition: Transition) -> Self {
        Self {
            applied: initial,
            target: initial,
            transition,
            animator: SnapAnimator::new(),
        }
    }

    pub fn applied(&self) -> f32 {
        self.applied
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Switching to `Immediate` freezes any ease in progress where it is.
    pub fn set_transition(&mut self, transition: Transition) {
        if transition == Transition::Immediate {
            self.animator.cancel();
        }
        self.transition = transition;
    }

    /// Write a value straight through, bypassing the transition.
    pub fn apply(&mut self, value: f32) {
        self.animator.cancel();
        self.applied = value;
        self.target = value;
    }

    /// Move toward `target` using the current transition.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        self.target = target;
        match self.transition {
            Transition::Immediate => {
                self.animator.cancel();
                self.applied = target;
            }
            Transition::Eased { duration, easing } => {
                if (self.applied - target).abs() <= f32::EPSILON {
                    self.animator.cancel();
                    self.applied = target;
                } else {
                    self.animator
                        .start_at(self.applied, target, duration, easing, now);
                }
            }
        }
    }

    /// Advance an ease in progress. Returns the newly applied value.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let next = self.animator.tick_at(now)?;
        self.applied = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eased(ms: u64) -> Transition {
        Transition::Eased {
            duration: Duration::from_millis(ms),
            easing: Easing::Linear,
        }
    }

    #[test]
    fn immediate_retarget_applies_at_once() {
        let mut surface = VisualSurface::new(0.0, Transition::Immediate);
        surface.retarget(-25.0, Instant::now());
        assert_eq!(surface.applied(), -25.0);
        assert!(!surface.is_animating());
    }

    #[test]
    fn eased_retarget_starts_from_applied_value() {
        let t0 = Instant::now();
        let mut surface = VisualSurface::new(0.0, eased(100));
        surface.apply(-30.0);
        surface.retarget(-50.0, t0);
        assert!(surface.is_animating());
        assert_eq!(surface.applied(), -30.0);

        let mid = surface.tick(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid + 40.0).abs() < 1e-3);

        assert_eq!(surface.tick(t0 + Duration::from_millis(100)), Some(-50.0));
        assert!(!surface.is_animating());
        assert_eq!(surface.tick(t0 + Duration::from_millis(120)), None);
    }

    #[test]
    fn switching_to_immediate_freezes_the_ease() {
        let t0 = Instant::now();
        let mut surface = VisualSurface::new(0.0, eased(100));
        surface.retarget(-100.0, t0);
        surface.tick(t0 + Duration::from_millis(50));
        let frozen = surface.applied();

        surface.set_transition(Transition::Immediate);
        assert!(!surface.is_animating());
        assert_eq!(surface.applied(), frozen);
    }

    #[test]
    fn retarget_to_current_value_does_not_animate() {
        let mut surface = VisualSurface::new(-25.0, eased(300));
        surface.retarget(-25.0, Instant::now());
        assert!(!surface.is_animating());
    }
}
