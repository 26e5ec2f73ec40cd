use crate::color::Rgba;
use smallvec::SmallVec;

/// Opaque handle for an animated element. Allocated by the platform layer
/// while resolving attachment points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// Animatable properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    Scale,
    Opacity,
    /// Top inset of `clip-path: inset(<top>% 0 0 0)`, in percent.
    ClipTop,
    Background,
    Color,
}

impl Prop {
    /// Value a property has before anything sets it.
    pub fn rest_value(self) -> Value {
        match self {
            Prop::X | Prop::Y | Prop::ClipTop => Value::Num(0.0),
            Prop::Scale | Prop::Opacity => Value::Num(1.0),
            Prop::Background => Value::Color(Rgba::TRANSPARENT),
            Prop::Color => Value::Color(Rgba {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Num(f32),
    Color(Rgba),
}

impl Value {
    pub fn lerp(self, to: Value, t: f32) -> Value {
        match (self, to) {
            (Value::Num(a), Value::Num(b)) => Value::Num(a + (b - a) * t),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            // Mismatched kinds snap at the end
            (_, b) if t >= 1.0 => b,
            (a, _) => a,
        }
    }

    pub fn as_num(self) -> Option<f32> {
        match self {
            Value::Num(v) => Some(v),
            Value::Color(_) => None,
        }
    }
}

/// Current inline style of one target. Only fields that were ever written are
/// rendered, so untouched CSS from the page stays in effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Centre the element on its (x, y) point: `translate(-50%, -50%)`.
    pub centered: bool,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub clip_top: Option<f32>,
    pub background: Option<Rgba>,
    pub color: Option<Rgba>,
}

impl Style {
    pub fn get(&self, prop: Prop) -> Option<Value> {
        match prop {
            Prop::X => self.x.map(Value::Num),
            Prop::Y => self.y.map(Value::Num),
            Prop::Scale => self.scale.map(Value::Num),
            Prop::Opacity => self.opacity.map(Value::Num),
            Prop::ClipTop => self.clip_top.map(Value::Num),
            Prop::Background => self.background.map(Value::Color),
            Prop::Color => self.color.map(Value::Color),
        }
    }

    pub fn set(&mut self, prop: Prop, value: Value) {
        match (prop, value) {
            (Prop::X, Value::Num(v)) => self.x = Some(v),
            (Prop::Y, Value::Num(v)) => self.y = Some(v),
            (Prop::Scale, Value::Num(v)) => self.scale = Some(v),
            (Prop::Opacity, Value::Num(v)) => self.opacity = Some(v),
            (Prop::ClipTop, Value::Num(v)) => self.clip_top = Some(v),
            (Prop::Background, Value::Color(c)) => self.background = Some(c),
            (Prop::Color, Value::Color(c)) => self.color = Some(c),
            (p, v) => log::warn!("[style] ignoring {:?} for {:?}", v, p),
        }
    }

    pub fn transform_css(&self) -> Option<String> {
        if !self.centered && self.x.is_none() && self.y.is_none() && self.scale.is_none() {
            return None;
        }
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.centered {
            parts.push("translate(-50%, -50%)".to_string());
        }
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({:.2}px, {:.2}px, 0)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({:.4})", s));
        }
        Some(parts.join(" "))
    }

    /// Render as `(property, value)` pairs for `style.setProperty`.
    pub fn css_declarations(&self) -> SmallVec<[(&'static str, String); 6]> {
        let mut out = SmallVec::new();
        if let Some(t) = self.transform_css() {
            out.push(("transform", t));
        }
        if let Some(o) = self.opacity {
            out.push(("opacity", format!("{:.4}", o.clamp(0.0, 1.0))));
        }
        if let Some(top) = self.clip_top {
            let top = top.clamp(0.0, 100.0);
            out.push(("clip-path", format!("inset({:.2}% 0 0 0)", top)));
        }
        if let Some(c) = self.background {
            out.push(("background-color", c.to_css()));
        }
        if let Some(c) = self.color {
            out.push(("color", c.to_css()));
        }
        out
    }
}
