//! Progress-driven timelines.
//!
//! A [`ScrubTimeline`] has no clock: the value of every property is a pure
//! function of progress in \[0, 1\]. A [`ScrubFollower`] adds the "scrub lag"
//! so the displayed progress eases toward the scroll progress over time.

use crate::constants::SCRUB_SETTLE_REMAINDER;
use crate::ease::Ease;
use crate::style::{Prop, TargetId, Value};

#[derive(Clone, Debug)]
struct Segment {
    target: TargetId,
    prop: Prop,
    from: Value,
    to: Value,
    at: f32,
    duration: f32,
    ease: Ease,
}

#[derive(Clone, Debug, Default)]
pub struct ScrubTimeline {
    segments: Vec<Segment>,
}

impl ScrubTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a segment at timeline position `at` (in timeline units).
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        target: TargetId,
        prop: Prop,
        from: Value,
        to: Value,
        at: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        self.segments.push(Segment {
            target,
            prop,
            from,
            to,
            at: at.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
        self
    }

    /// Total length in timeline units.
    pub fn duration(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| s.at + s.duration)
            .fold(0.0, f32::max)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Values of every animated (target, property) pair at `progress`.
    pub fn values_at(&self, progress: f32) -> Vec<(TargetId, Prop, Value)> {
        let total = self.duration();
        let time = progress.clamp(0.0, 1.0) * total;
        let mut out: Vec<(TargetId, Prop, Value)> = Vec::new();
        for seg in &self.segments {
            let slot = out
                .iter()
                .position(|(t, p, _)| *t == seg.target && *p == seg.prop);
            let value = if time >= seg.at {
                let local = if seg.duration <= 0.0 {
                    1.0
                } else {
                    ((time - seg.at) / seg.duration).min(1.0)
                };
                Some(seg.from.lerp(seg.to, seg.ease.apply(local)))
            } else if slot.is_none() {
                Some(seg.from)
            } else {
                None
            };
            match (slot, value) {
                (Some(i), Some(v)) => out[i].2 = v,
                (None, Some(v)) => out.push((seg.target, seg.prop, v)),
                _ => {}
            }
        }
        out
    }
}

/// Eases a displayed progress toward a target progress. After `lag` seconds
/// only [`SCRUB_SETTLE_REMAINDER`] of the original gap remains.
#[derive(Clone, Copy, Debug)]
pub struct ScrubFollower {
    lag: f32,
    current: f32,
}

impl ScrubFollower {
    pub fn new(lag: f32, initial: f32) -> Self {
        Self {
            lag,
            current: initial,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn snap(&mut self, progress: f32) {
        self.current = progress;
    }

    /// Step toward `target`; returns whether the displayed progress moved.
    pub fn step(&mut self, target: f32, dt: f32) -> bool {
        let prev = self.current;
        if self.lag <= 0.0 {
            self.current = target;
        } else {
            let alpha = 1.0 - SCRUB_SETTLE_REMAINDER.powf(dt.max(0.0) / self.lag);
            self.current += (target - self.current) * alpha;
            if (target - self.current).abs() < 1e-4 {
                self.current = target;
            }
        }
        self.current != prev
    }
}
