use crate::foundation::error::{KinemaError, KinemaResult};
use crate::presets::timing::{PresetTiming, default_easing};
use crate::scene::model::{Animation, Keyframe, Phase, PropertyMap, PropertyValue};

/// Named animation archetypes for generic elements.
///
/// `Fade` through `Scale` are entry/exit archetypes; `Pulse` through `GentleTwist` are loops.
/// Slides are named after the side the element enters from and exits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetKind {
    /// Opacity 0 <-> 1.
    Fade,
    /// Enters from / exits to the left.
    SlideLeft,
    /// Enters from / exits to the right.
    SlideRight,
    /// Enters from / exits to above.
    SlideUp,
    /// Enters from / exits to below.
    SlideDown,
    /// Grows from / shrinks to nothing.
    Scale,
    /// Loop: gentle breathing scale.
    Pulse,
    /// Loop: horizontal sway.
    SideToSide,
    /// Loop: vertical bob.
    UpAndDown,
    /// Loop: small rotation wobble.
    GentleTwist,
    /// Two empty keyframes for the author to fill.
    Custom,
}

const PRESET_NAMES: &[(&str, PresetKind)] = &[
    ("fade", PresetKind::Fade),
    ("slide-left", PresetKind::SlideLeft),
    ("slide-right", PresetKind::SlideRight),
    ("slide-up", PresetKind::SlideUp),
    ("slide-down", PresetKind::SlideDown),
    ("scale", PresetKind::Scale),
    ("pulse", PresetKind::Pulse),
    ("side-to-side", PresetKind::SideToSide),
    ("up-and-down", PresetKind::UpAndDown),
    ("gentle-twist", PresetKind::GentleTwist),
    ("custom", PresetKind::Custom),
];

impl PresetKind {
    /// Kebab-case archetype name.
    pub fn name(self) -> &'static str {
        PRESET_NAMES
            .iter()
            .find(|(_, k)| *k == self)
            .map(|(n, _)| *n)
            .unwrap_or("custom")
    }

    /// Whether this archetype is meant for the `loop` phase.
    pub fn is_loop(self) -> bool {
        matches!(
            self,
            Self::Pulse | Self::SideToSide | Self::UpAndDown | Self::GentleTwist
        )
    }

    /// Whether this archetype can be generated for `phase`. `Custom` fits every phase.
    pub fn fits(self, phase: Phase) -> bool {
        self == Self::Custom || self.is_loop() == (phase == Phase::Loop)
    }
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PresetKind {
    type Err = KinemaError;

    fn from_str(s: &str) -> KinemaResult<Self> {
        PRESET_NAMES
            .iter()
            .find(|(n, _)| *n == s)
            .map(|(_, k)| *k)
            .ok_or_else(|| KinemaError::parse(format!("unknown preset '{s}'")))
    }
}

fn pose<const N: usize>(props: [(&str, PropertyValue); N]) -> PropertyMap {
    props
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect()
}

/// Assemble an animation and its keyframes from `(relative position, properties)` pairs.
pub(crate) fn assemble(
    element_id: &str,
    template_id: &str,
    phase: Phase,
    name: &str,
    duration_ms: f64,
    easing: &str,
    poses: Vec<(f64, PropertyMap)>,
) -> (Animation, Vec<Keyframe>) {
    let id = format!("{element_id}-{phase}-{name}");
    let keyframes = poses
        .into_iter()
        .enumerate()
        .map(|(i, (position_ms, properties))| Keyframe {
            id: format!("{id}-k{i}"),
            animation_id: id.clone(),
            position_ms,
            properties,
        })
        .collect();

    let animation = Animation {
        id,
        element_id: element_id.to_owned(),
        template_id: Some(template_id.to_owned()),
        phase,
        delay_ms: 0.0,
        duration_ms,
        easing: easing.to_owned(),
    };
    (animation, keyframes)
}

// Hidden pose of an entry/exit archetype; the shown pose is `shown_pose`.
fn hidden_pose(kind: PresetKind) -> PropertyMap {
    let opacity = ("opacity", PropertyValue::Number(0.0));
    match kind {
        PresetKind::Fade => pose([opacity]),
        PresetKind::SlideLeft => pose([opacity, ("transform", "translateX(-100px)".into())]),
        PresetKind::SlideRight => pose([opacity, ("transform", "translateX(100px)".into())]),
        PresetKind::SlideUp => pose([opacity, ("transform", "translateY(-100px)".into())]),
        PresetKind::SlideDown => pose([opacity, ("transform", "translateY(100px)".into())]),
        PresetKind::Scale => pose([opacity, ("transform", "scale(0)".into())]),
        _ => PropertyMap::new(),
    }
}

fn shown_pose(kind: PresetKind) -> PropertyMap {
    let opacity = ("opacity", PropertyValue::Number(1.0));
    match kind {
        PresetKind::Fade => pose([opacity]),
        PresetKind::SlideLeft | PresetKind::SlideRight => {
            pose([opacity, ("transform", "translateX(0px)".into())])
        }
        PresetKind::SlideUp | PresetKind::SlideDown => {
            pose([opacity, ("transform", "translateY(0px)".into())])
        }
        PresetKind::Scale => pose([opacity, ("transform", "scale(1)".into())]),
        _ => PropertyMap::new(),
    }
}

// Closed loop: first and last poses are identical.
fn loop_poses(kind: PresetKind) -> Vec<(f64, PropertyMap)> {
    let t = |s: &str| pose([("transform", PropertyValue::from(s))]);
    match kind {
        PresetKind::Pulse => vec![
            (0.0, t("scale(1)")),
            (50.0, t("scale(1.05)")),
            (100.0, t("scale(1)")),
        ],
        PresetKind::SideToSide => vec![
            (0.0, t("translateX(0px)")),
            (25.0, t("translateX(-10px)")),
            (75.0, t("translateX(10px)")),
            (100.0, t("translateX(0px)")),
        ],
        PresetKind::UpAndDown => vec![
            (0.0, t("translateY(0px)")),
            (50.0, t("translateY(-10px)")),
            (100.0, t("translateY(0px)")),
        ],
        PresetKind::GentleTwist => vec![
            (0.0, t("rotate(0deg)")),
            (25.0, t("rotate(-3deg)")),
            (75.0, t("rotate(3deg)")),
            (100.0, t("rotate(0deg)")),
        ],
        _ => vec![(0.0, PropertyMap::new()), (100.0, PropertyMap::new())],
    }
}

/// Build a preset animation with default timing.
///
/// Keyframe positions are relative (0..=100); see [`scale_keyframes`]. An archetype that does not
/// fit `phase` (a loop archetype for `in`, or vice versa) yields the `custom` preset.
pub fn create_default_animation(
    element_id: &str,
    template_id: &str,
    phase: Phase,
    kind: PresetKind,
) -> (Animation, Vec<Keyframe>) {
    create_default_animation_with(element_id, template_id, phase, kind, &PresetTiming::default())
}

/// [`create_default_animation`] with explicit timing configuration.
pub fn create_default_animation_with(
    element_id: &str,
    template_id: &str,
    phase: Phase,
    kind: PresetKind,
    timing: &PresetTiming,
) -> (Animation, Vec<Keyframe>) {
    let kind = if kind.fits(phase) {
        kind
    } else {
        PresetKind::Custom
    };

    let poses = match phase {
        Phase::Loop => loop_poses(kind),
        Phase::In => vec![(0.0, hidden_pose(kind)), (100.0, shown_pose(kind))],
        Phase::Out => vec![(0.0, shown_pose(kind)), (100.0, hidden_pose(kind))],
    };

    assemble(
        element_id,
        template_id,
        phase,
        kind.name(),
        timing.duration_for(phase),
        default_easing(phase),
        poses,
    )
}

/// Rescale relative (0..=100) keyframe positions to absolute milliseconds over `duration_ms`.
pub fn scale_keyframes(keyframes: &mut [Keyframe], duration_ms: f64) {
    for k in keyframes {
        k.position_ms = k.position_ms / 100.0 * duration_ms;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/standard.rs"]
mod tests;
