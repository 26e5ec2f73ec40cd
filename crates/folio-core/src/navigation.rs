//! Smooth scrolling for same-page anchor links.

use crate::ease::{lerp, Ease};

/// Scroll offset that places `target_top` (document space) `offset` pixels
/// below the top of the viewport, limited to the scrollable range.
#[inline]
pub fn scroll_destination(target_top: f32, offset: f32, max_scroll: f32) -> f32 {
    (target_top - offset).clamp(0.0, max_scroll.max(0.0))
}

/// Extract the element id from an in-page `href` (`"#work"` -> `"work"`).
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl ScrollTween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    pub fn destination(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`; returns the scroll offset to apply this frame.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        lerp(self.from, self.to, self.ease.apply(t))
    }
}
