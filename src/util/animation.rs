// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Delayed fade-ins and eased scrolling.

/// Opacity in `[0, 1]` of an element that starts fading in after `delay`
/// seconds and is fully opaque `duration` seconds later.
pub fn fade_alpha(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration <= 0.0 {
        return 1.0;
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

/// Per-frame easing of a scroll position toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    target: f32,
    /// Per-second rate; a frame of `dt` seconds covers `rate * dt` of the
    /// remaining distance.
    rate: f32,
}

/// Distance below which the animation snaps onto its target.
const SNAP_DISTANCE: f32 = 0.5;

impl SmoothScroll {
    pub fn new(target: f32, rate: f32) -> Self {
        Self { target, rate }
    }

    /// Advance `current` by one frame of `dt` seconds.
    /// Returns the new position and whether the target was reached.
    pub fn step(&self, current: f32, dt: f32) -> (f32, bool) {
        let remaining = self.target - current;
        if remaining.abs() <= SNAP_DISTANCE {
            return (self.target, true);
        }
        let t = (self.rate * dt.max(0.0)).clamp(0.0, 1.0);
        let next = current + remaining * t;
        if (self.target - next).abs() <= SNAP_DISTANCE {
            (self.target, true)
        } else {
            (next, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_alpha_waits_for_delay() {
        assert_eq!(fade_alpha(0.05, 0.1, 0.5), 0.0);
        assert!((fade_alpha(0.35, 0.1, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(fade_alpha(10.0, 0.1, 0.5), 1.0);
        assert_eq!(fade_alpha(0.2, 0.1, 0.0), 1.0);
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let scroll = SmoothScroll::new(918.0, 12.0);
        let mut position = 0.0;
        let mut done = false;
        for _ in 0..200 {
            let (next, finished) = scroll.step(position, 1.0 / 60.0);
            assert!(next >= position);
            position = next;
            if finished {
                done = true;
                break;
            }
        }
        assert!(done);
        assert_eq!(position, 918.0);
    }

    #[test]
    fn test_smooth_scroll_moves_backwards() {
        let scroll = SmoothScroll::new(0.0, 12.0);
        let (next, finished) = scroll.step(600.0, 1.0 / 60.0);
        assert!(next < 600.0);
        assert!(!finished);
    }
}
