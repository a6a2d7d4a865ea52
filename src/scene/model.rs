use std::collections::BTreeMap;

use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::number::fmt_number;

/// A single animated property value: a number or free-form text (colors, transforms, labels).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Numeric value (opacity, width, chart progress, ...).
    Number(f64),
    /// Textual value (color, transform expression, or opaque text).
    Text(String),
}

impl PropertyValue {
    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Coerce to text. Numbers use their shortest form (`1`, `0.5`).
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(v) => fmt_number(*v),
            Self::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&fmt_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Property bag keyed by property name. Ordered so evaluation output is stable.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Mutually exclusive animation lifecycle of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Entry.
    In,
    /// Steady state; repeats.
    Loop,
    /// Exit.
    Out,
}

impl Phase {
    /// Wire name (`in`, `loop`, `out`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Loop => "loop",
            Self::Out => "out",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = KinemaError;

    fn from_str(s: &str) -> KinemaResult<Self> {
        match s {
            "in" => Ok(Self::In),
            "loop" => Ok(Self::Loop),
            "out" => Ok(Self::Out),
            other => Err(KinemaError::parse(format!(
                "unknown phase '{other}' (expected in, loop or out)"
            ))),
        }
    }
}

/// Transform origin of an element, as fractions of its box (`0.5, 0.5` is the center).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Horizontal origin.
    pub x: f64,
    /// Vertical origin.
    pub y: f64,
}

impl Default for Anchor {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// The thing being animated. The evaluator only reads `id`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Element identifier; animations reference it.
    pub id: String,
    /// Owning template.
    #[serde(default)]
    pub template_id: Option<String>,
    /// Parent element, if nested.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Transform origin.
    #[serde(default)]
    pub anchor: Anchor,
    /// Non-animated property values.
    #[serde(default)]
    pub defaults: PropertyMap,
}

impl Element {
    /// Element with no defaults, centered anchor and no parent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template_id: None,
            parent_id: None,
            anchor: Anchor::default(),
            defaults: PropertyMap::new(),
        }
    }

    /// Overlay an evaluated property map onto this element's defaults.
    ///
    /// Properties the animations did not drive keep their default value.
    pub fn resolve(&self, animated: &PropertyMap) -> PropertyMap {
        let mut out = self.defaults.clone();
        out.extend(animated.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

/// One animation of one element in one phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// Animation identifier; keyframes reference it.
    pub id: String,
    /// Animated element.
    pub element_id: String,
    /// Owning template.
    #[serde(default)]
    pub template_id: Option<String>,
    /// Lifecycle phase this animation plays in.
    pub phase: Phase,
    /// Start delay in milliseconds.
    #[serde(default)]
    pub delay_ms: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Easing catalog name. Unknown names evaluate as linear.
    #[serde(default = "default_easing")]
    pub easing: String,
}

fn default_easing() -> String {
    "linear".to_owned()
}

/// A pinned set of property values at an absolute millisecond offset within its animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Keyframe identifier.
    pub id: String,
    /// Owning animation.
    pub animation_id: String,
    /// Milliseconds from the start of the animation (not a percentage).
    pub position_ms: f64,
    /// Property values pinned at this position.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Keyframe {
    /// Keyframe with an empty property bag.
    pub fn new(id: impl Into<String>, animation_id: impl Into<String>, position_ms: f64) -> Self {
        Self {
            id: id.into(),
            animation_id: animation_id.into(),
            position_ms,
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
