//! Time-based tween engine.
//!
//! Holds the current inline style of every target and the set of running
//! tweens. A new tween on a (target, property) pair replaces any tween still
//! running on that pair, so rapid reversals never leave two tweens fighting.

use crate::ease::Ease;
use crate::style::{Prop, Style, TargetId, Value};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl TweenSpec {
    pub const fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub const fn delayed(self, delay: f32) -> Self {
        Self { delay, ..self }
    }
}

#[derive(Clone, Debug)]
struct Tween {
    target: TargetId,
    prop: Prop,
    // Resolved from the current value when the delay elapses
    from: Option<Value>,
    to: Value,
    spec: TweenSpec,
    elapsed: f32,
    paused: bool,
}

#[derive(Default)]
pub struct Animator {
    styles: FnvHashMap<TargetId, Style>,
    tweens: Vec<Tween>,
    dirty: FnvHashSet<TargetId>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, target: TargetId) -> Option<&Style> {
        self.styles.get(&target)
    }

    /// Current value, or the property's resting value if never written.
    pub fn value(&self, target: TargetId, prop: Prop) -> Value {
        self.styles
            .get(&target)
            .and_then(|s| s.get(prop))
            .unwrap_or_else(|| prop.rest_value())
    }

    pub fn num(&self, target: TargetId, prop: Prop) -> f32 {
        self.value(target, prop).as_num().unwrap_or_default()
    }

    pub fn set_centered(&mut self, target: TargetId) {
        self.styles.entry(target).or_default().centered = true;
        self.dirty.insert(target);
    }

    /// Write a value immediately, cancelling any tween on the same property.
    pub fn set(&mut self, target: TargetId, prop: Prop, value: Value) {
        self.kill(target, prop);
        self.write(target, prop, value);
    }

    /// Tween from the value current when the delay elapses toward `to`.
    pub fn to(&mut self, target: TargetId, prop: Prop, to: Value, spec: TweenSpec) {
        self.kill(target, prop);
        self.tweens.push(Tween {
            target,
            prop,
            from: None,
            to,
            spec,
            elapsed: 0.0,
            paused: false,
        });
    }

    /// Tween between explicit endpoints; the start value is rendered now.
    pub fn from_to(
        &mut self,
        target: TargetId,
        prop: Prop,
        from: Value,
        to: Value,
        spec: TweenSpec,
    ) {
        self.set(target, prop, from);
        self.tweens.push(Tween {
            target,
            prop,
            from: Some(from),
            to,
            spec,
            elapsed: 0.0,
            paused: false,
        });
    }

    /// `from_to` over a list of targets, each starting `stagger` seconds
    /// after the previous one.
    pub fn stagger_from_to(
        &mut self,
        targets: &[TargetId],
        props: &[(Prop, Value, Value)],
        spec: TweenSpec,
        stagger: f32,
    ) {
        for (i, &target) in targets.iter().enumerate() {
            let spec = spec.delayed(spec.delay + stagger * i as f32);
            for &(prop, from, to) in props {
                self.from_to(target, prop, from, to, spec);
            }
        }
    }

    pub fn kill(&mut self, target: TargetId, prop: Prop) {
        self.tweens.retain(|t| !(t.target == target && t.prop == prop));
    }

    /// Freeze every tween on `target` where it stands.
    pub fn pause(&mut self, target: TargetId) {
        for t in self.tweens.iter_mut().filter(|t| t.target == target) {
            t.paused = true;
        }
    }

    pub fn resume(&mut self, target: TargetId) {
        for t in self.tweens.iter_mut().filter(|t| t.target == target) {
            t.paused = false;
        }
    }

    pub fn is_tweening(&self, target: TargetId, prop: Prop) -> bool {
        self.tweens
            .iter()
            .any(|t| t.target == target && t.prop == prop)
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Advance all tweens by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let mut tweens = std::mem::take(&mut self.tweens);
        tweens.retain_mut(|t| {
            if t.paused {
                return true;
            }
            t.elapsed += dt.max(0.0);
            let local = t.elapsed - t.spec.delay;
            if local < 0.0 {
                return true;
            }
            let from = match t.from {
                Some(v) => v,
                None => {
                    let v = self.value(t.target, t.prop);
                    t.from = Some(v);
                    v
                }
            };
            let linear = if t.spec.duration <= 0.0 {
                1.0
            } else {
                (local / t.spec.duration).min(1.0)
            };
            let value = from.lerp(t.to, t.spec.ease.apply(linear));
            self.write(t.target, t.prop, value);
            linear < 1.0
        });
        self.tweens = tweens;
    }

    /// Targets whose style changed since the last call, in id order.
    pub fn take_dirty(&mut self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = self.dirty.drain().collect();
        out.sort();
        out
    }

    /// Forget all styles and tweens.
    pub fn clear(&mut self) {
        self.styles.clear();
        self.tweens.clear();
        self.dirty.clear();
    }

    fn write(&mut self, target: TargetId, prop: Prop, value: Value) {
        self.styles.entry(target).or_default().set(prop, value);
        self.dirty.insert(target);
    }
}
