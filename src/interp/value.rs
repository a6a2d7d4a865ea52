use crate::interp::color::{interpolate_color, parse_color};
use crate::interp::transform::{TransformExpr, interpolate_transform};
use crate::scene::model::PropertyValue;

// Internal property name -> externally visible name.
const PROPERTY_ALIASES: &[(&str, &str)] = &[
    ("fill", "backgroundColor"),
    ("stroke", "borderColor"),
    ("strokeWidth", "borderWidth"),
];

/// Name under which an internal property is exposed in evaluation output.
pub fn output_property_name(name: &str) -> &str {
    PROPERTY_ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// `from + (to - from) * progress`.
pub fn interpolate_number(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Non-blendable policy: the source value before the midpoint, the target from it on.
pub fn snap(from: &PropertyValue, to: &PropertyValue, progress: f64) -> PropertyValue {
    if progress < 0.5 {
        from.clone()
    } else {
        to.clone()
    }
}

fn is_color_property(name: &str) -> bool {
    matches!(
        name,
        "color" | "fill" | "stroke" | "background" | "backgroundColor" | "borderColor"
    ) || name.ends_with("Color")
}

fn is_transform_property(name: &str) -> bool {
    name == "transform"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    Number,
    Color,
    Transform,
    Opaque,
}

fn classify(name: &str, from: &PropertyValue, to: &PropertyValue) -> ValueKind {
    match (from, to) {
        (PropertyValue::Number(_), PropertyValue::Number(_)) => ValueKind::Number,
        (PropertyValue::Text(a), PropertyValue::Text(b)) => {
            if is_color_property(name) || (parse_color(a).is_some() && parse_color(b).is_some()) {
                ValueKind::Color
            } else if is_transform_property(name)
                || (TransformExpr::parse(a).is_some() && TransformExpr::parse(b).is_some())
            {
                ValueKind::Transform
            } else {
                ValueKind::Opaque
            }
        }
        _ => ValueKind::Opaque,
    }
}

/// Interpolate one property between two keyframe values.
///
/// Dispatch is by value type: two numbers blend linearly; two texts blend as colors or transform
/// expressions when the property name or both values say so. Everything else, including a color or
/// transform that fails to parse, snaps at the midpoint. Colors that fail to parse snap as text.
pub fn interpolate_value(
    name: &str,
    from: &PropertyValue,
    to: &PropertyValue,
    progress: f64,
) -> PropertyValue {
    match classify(name, from, to) {
        ValueKind::Number => {
            let (Some(a), Some(b)) = (from.as_number(), to.as_number()) else {
                return snap(from, to, progress);
            };
            PropertyValue::Number(interpolate_number(a, b, progress))
        }
        ValueKind::Color => {
            let (a, b) = (from.to_text(), to.to_text());
            match interpolate_color(&a, &b, progress) {
                Some(c) => PropertyValue::Text(c),
                None => PropertyValue::Text(if progress < 0.5 { a } else { b }),
            }
        }
        ValueKind::Transform => {
            let (a, b) = (from.to_text(), to.to_text());
            match interpolate_transform(&a, &b, progress) {
                Some(t) => PropertyValue::Text(t),
                None => snap(from, to, progress),
            }
        }
        ValueKind::Opaque => snap(from, to, progress),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/value.rs"]
mod tests;
