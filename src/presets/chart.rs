use crate::foundation::error::{KinemaError, KinemaResult};
use crate::presets::standard::assemble;
use crate::presets::timing::{PresetTiming, default_easing};
use crate::scene::model::{Animation, Keyframe, Phase, PropertyMap, PropertyValue};

/// Per-point step of the stagger archetype.
const STAGGER_STEP_MS: f64 = 150.0;

/// Data-driven archetypes for chart elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartPresetKind {
    /// Uniform `progress` sweep.
    Grow,
    /// `progress` sweep with elastic easing, for counting labels.
    CountUp,
    /// Series revealed one after another (needs chart data).
    Stagger,
    /// Breathing scale loop.
    Pulse,
    /// Scale-and-fade reveal.
    Reveal,
}

const CHART_PRESET_NAMES: &[(&str, ChartPresetKind)] = &[
    ("grow", ChartPresetKind::Grow),
    ("count-up", ChartPresetKind::CountUp),
    ("stagger", ChartPresetKind::Stagger),
    ("pulse", ChartPresetKind::Pulse),
    ("reveal", ChartPresetKind::Reveal),
];

impl ChartPresetKind {
    /// Kebab-case archetype name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grow => "grow",
            Self::CountUp => "count-up",
            Self::Stagger => "stagger",
            Self::Pulse => "pulse",
            Self::Reveal => "reveal",
        }
    }
}

impl std::fmt::Display for ChartPresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChartPresetKind {
    type Err = KinemaError;

    fn from_str(s: &str) -> KinemaResult<Self> {
        CHART_PRESET_NAMES
            .iter()
            .find(|(n, _)| *n == s)
            .map(|(_, k)| *k)
            .ok_or_else(|| KinemaError::parse(format!("unknown chart preset '{s}'")))
    }
}

fn single(name: &str, value: PropertyValue) -> PropertyMap {
    PropertyMap::from([(name.to_owned(), value)])
}

/// Forward poses for `in`, reversed for `out`, out-and-back (closed) for `loop`.
fn directed(phase: Phase, hidden: PropertyMap, shown: PropertyMap) -> Vec<(f64, PropertyMap)> {
    match phase {
        Phase::In => vec![(0.0, hidden), (100.0, shown)],
        Phase::Out => vec![(0.0, shown), (100.0, hidden)],
        Phase::Loop => vec![(0.0, hidden.clone()), (50.0, shown), (100.0, hidden)],
    }
}

fn grow_poses(phase: Phase) -> Vec<(f64, PropertyMap)> {
    directed(
        phase,
        single("progress", PropertyValue::Number(0.0)),
        single("progress", PropertyValue::Number(1.0)),
    )
}

/// Series property name for data point `index`.
pub(crate) fn series_property(index: usize) -> String {
    format!("series-{index}")
}

// Keyframe `step` of the reveal schedule: the first `step` points at target, the rest at zero.
fn stagger_pose(data: &[f64], step: usize) -> PropertyMap {
    data.iter()
        .enumerate()
        .map(|(j, &v)| {
            let value = if j < step { v } else { 0.0 };
            (series_property(j), PropertyValue::Number(value))
        })
        .collect()
}

fn stagger_poses(phase: Phase, data: &[f64]) -> Vec<(f64, PropertyMap)> {
    let n = data.len();
    let at = |i: usize, span: f64, offset: f64| offset + (i as f64) * span / (n as f64);

    match phase {
        Phase::In => (0..=n)
            .map(|i| (at(i, 100.0, 0.0), stagger_pose(data, i)))
            .collect(),
        // Mirror of `in`: points collapse in reverse reveal order.
        Phase::Out => (0..=n)
            .map(|i| (at(i, 100.0, 0.0), stagger_pose(data, n - i)))
            .collect(),
        Phase::Loop => {
            let reveal = (0..=n).map(|i| (at(i, 50.0, 0.0), stagger_pose(data, i)));
            let collapse = (1..=n).map(|i| (at(i, 50.0, 50.0), stagger_pose(data, n - i)));
            reveal.chain(collapse).collect()
        }
    }
}

/// Build a chart preset with default timing.
///
/// `stagger` needs `data` (one target value per series); without it, or with an empty slice, it
/// falls back to the `grow` keyframes. Positions are relative (0..=100).
pub fn create_chart_animation(
    element_id: &str,
    template_id: &str,
    phase: Phase,
    kind: ChartPresetKind,
    data: Option<&[f64]>,
) -> (Animation, Vec<Keyframe>) {
    create_chart_animation_with(
        element_id,
        template_id,
        phase,
        kind,
        data,
        &PresetTiming::default(),
    )
}

/// [`create_chart_animation`] with explicit timing configuration.
pub fn create_chart_animation_with(
    element_id: &str,
    template_id: &str,
    phase: Phase,
    kind: ChartPresetKind,
    data: Option<&[f64]>,
    timing: &PresetTiming,
) -> (Animation, Vec<Keyframe>) {
    let base_ms = timing.duration_for(phase);
    let easing = default_easing(phase);

    let (duration_ms, easing, poses) = match kind {
        ChartPresetKind::Grow => (base_ms, easing, grow_poses(phase)),
        ChartPresetKind::CountUp => {
            let easing = if phase == Phase::Loop {
                easing
            } else {
                "elastic-out"
            };
            (base_ms, easing, grow_poses(phase))
        }
        ChartPresetKind::Reveal => {
            let hidden = PropertyMap::from([
                ("opacity".to_owned(), PropertyValue::Number(0.0)),
                ("transform".to_owned(), PropertyValue::from("scale(0)")),
            ]);
            let shown = PropertyMap::from([
                ("opacity".to_owned(), PropertyValue::Number(1.0)),
                ("transform".to_owned(), PropertyValue::from("scale(1)")),
            ]);
            (base_ms, easing, directed(phase, hidden, shown))
        }
        ChartPresetKind::Pulse => {
            let t = |s: &str| single("transform", PropertyValue::from(s));
            let poses = vec![
                (0.0, t("scale(1)")),
                (50.0, t("scale(1.05)")),
                (100.0, t("scale(1)")),
            ];
            (timing.loop_ms, default_easing(Phase::Loop), poses)
        }
        ChartPresetKind::Stagger => match data {
            Some(data) if !data.is_empty() => {
                let steps = if phase == Phase::Loop {
                    data.len() * 2
                } else {
                    data.len()
                };
                let duration = base_ms.max(steps as f64 * STAGGER_STEP_MS);
                (duration, easing, stagger_poses(phase, data))
            }
            _ => {
                tracing::debug!(element_id, "stagger preset without chart data, using grow");
                (base_ms, easing, grow_poses(phase))
            }
        },
    };

    assemble(
        element_id,
        template_id,
        phase,
        kind.name(),
        duration_ms,
        easing,
        poses,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/presets/chart.rs"]
mod tests;
