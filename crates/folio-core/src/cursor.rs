use glam::Vec2;

/// Exponential-smoothing follower for the custom cursor.
///
/// Each [`step`](Self::step) closes `factor` of the remaining distance to the
/// last pointer position, so the indicator never overshoots.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    target: Vec2,
    position: Vec2,
    factor: f32,
}

impl CursorFollower {
    pub fn new(factor: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            position: Vec2::ZERO,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn step(&mut self) -> Vec2 {
        self.position += (self.target - self.position) * self.factor;
        self.position
    }

    pub fn distance(&self) -> f32 {
        self.target.distance(self.position)
    }
}
