use crate::style::TargetId;
use smallvec::SmallVec;

/// DOM mutation requested by the controller. The platform layer applies these
/// in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DomWrite {
    /// Inline style declarations, as `(property, value)` pairs.
    Style {
        target: TargetId,
        css: SmallVec<[(&'static str, String); 6]>,
    },
    Class {
        target: TargetId,
        class: &'static str,
        on: bool,
    },
    /// Set the attribute, or remove it when `value` is `None`.
    Attr {
        target: TargetId,
        name: &'static str,
        value: Option<&'static str>,
    },
    Text {
        target: TargetId,
        text: String,
    },
    ScrollWindow {
        y: f32,
    },
}
