use crate::ease::lerp;
use crate::error::{MotionError, Result};

/// Straight (non-premultiplied) RGBA colour with channels in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque colour from a `0xRRGGBB` literal.
    pub fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rrggbb`, `#rgb` or `transparent`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| MotionError::InvalidColor(s.to_string()))?;
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| MotionError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 if hex.is_ascii() => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: 1.0,
            }),
            3 if hex.is_ascii() => {
                let expand = |i: usize| hex[i..i + 1].repeat(2);
                Ok(Self {
                    r: channel(&expand(0))?,
                    g: channel(&expand(1))?,
                    b: channel(&expand(2))?,
                    a: 1.0,
                })
            }
            _ => Err(MotionError::InvalidColor(s.to_string())),
        }
    }

    /// Interpolate toward `other`. A fully transparent endpoint borrows the
    /// other endpoint's hue so fades do not pass through black.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let (from, to) = match (self.a == 0.0, other.a == 0.0) {
            (true, false) => (Rgba { a: 0.0, ..other }, other),
            (false, true) => (self, Rgba { a: 0.0, ..self }),
            _ => (self, other),
        };
        Rgba {
            r: lerp(from.r, to.r, t),
            g: lerp(from.g, to.g, t),
            b: lerp(from.b, to.b, t),
            a: lerp(from.a, to.a, t),
        }
    }

    pub fn to_css(self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}

impl std::str::FromStr for Rgba {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        Rgba::parse(s)
    }
}
