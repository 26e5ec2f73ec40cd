/// Easing curves used by the page, named after their GSAP counterparts.
///
/// GSAP's `powerN` family is a polynomial of degree `N + 1`, so `power2` is
/// cubic and `power3` is quartic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// Linear; used by scrubbed timelines.
    #[default]
    None,
    /// GSAP's default when a tween names no ease.
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    /// Map linear progress `t` in \[0, 1\] to eased progress.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
