use std::collections::BTreeMap;
use std::ops::Range;

use rayon::prelude::*;

use crate::{
    animation::ease::apply_easing,
    eval::trace::{EvalTrace, NoTrace, TimelineSample},
    foundation::time::frames_to_ms,
    interp::value::{interpolate_value, output_property_name},
    scene::document::Document,
    scene::model::{Animation, Element, Keyframe, Phase, PropertyMap},
};

/// Per-call evaluation options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalQuery {
    /// Query time in milliseconds. Any value is valid, including negative.
    pub time_ms: f64,
    /// Active phase; only animations in this phase are evaluated.
    pub phase: Phase,
    /// Overrides every matching animation's own duration when set.
    pub phase_duration_ms: Option<f64>,
}

impl EvalQuery {
    /// Query at `time_ms` in `phase`, no duration override.
    pub fn new(time_ms: f64, phase: Phase) -> Self {
        Self {
            time_ms,
            phase,
            phase_duration_ms: None,
        }
    }

    /// Set the phase duration override.
    pub fn with_phase_duration(mut self, ms: f64) -> Self {
        self.phase_duration_ms = Some(ms);
        self
    }
}

/// Stateless evaluator from animation definitions and a query time to property values.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate every animation of `element` in the query phase.
    ///
    /// Animations are applied in the order supplied; when two animate the same property the later
    /// one wins. Keyframes may be supplied in any order and for any animation.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(element = %element.id, phase = %query.phase, time_ms = query.time_ms)
    )]
    pub fn eval_element(
        element: &Element,
        animations: &[Animation],
        keyframes: &[Keyframe],
        query: EvalQuery,
    ) -> PropertyMap {
        Self::eval_element_traced(element, animations, keyframes, query, &mut NoTrace)
    }

    /// [`Evaluator::eval_element`] reporting each per-animation decision to `trace`.
    pub fn eval_element_traced(
        element: &Element,
        animations: &[Animation],
        keyframes: &[Keyframe],
        query: EvalQuery,
        trace: &mut dyn EvalTrace,
    ) -> PropertyMap {
        let mut out = PropertyMap::new();
        for animation in animations
            .iter()
            .filter(|a| a.element_id == element.id && a.phase == query.phase)
        {
            let keys = sorted_keyframes(animation, keyframes);
            sample_animation(animation, &keys, query, trace, &mut out);
        }
        out
    }

    /// Evaluate a single animation as if its own phase were active.
    ///
    /// `keyframes` may contain keyframes of other animations; they are ignored.
    pub fn eval_animation(
        animation: &Animation,
        keyframes: &[Keyframe],
        time_ms: f64,
        phase_duration_ms: Option<f64>,
    ) -> PropertyMap {
        let query = EvalQuery {
            time_ms,
            phase: animation.phase,
            phase_duration_ms,
        };
        let keys = sorted_keyframes(animation, keyframes);
        let mut out = PropertyMap::new();
        sample_animation(animation, &keys, query, &mut NoTrace, &mut out);
        out
    }

    /// Evaluate every element of `doc`, in parallel.
    pub fn eval_document(doc: &Document, query: EvalQuery) -> BTreeMap<String, PropertyMap> {
        doc.elements
            .par_iter()
            .map(|element| {
                let props = Self::eval_element(element, &doc.animations, &doc.keyframes, query);
                (element.id.clone(), props)
            })
            .collect()
    }

    /// Evaluate `element` at each frame of `frames` (30 fps), for scrubbing previews.
    pub fn sample_frames(
        element: &Element,
        animations: &[Animation],
        keyframes: &[Keyframe],
        phase: Phase,
        phase_duration_ms: Option<f64>,
        frames: Range<i64>,
    ) -> Vec<(i64, PropertyMap)> {
        frames
            .map(|frame| {
                let query = EvalQuery {
                    time_ms: frames_to_ms(frame),
                    phase,
                    phase_duration_ms,
                };
                (
                    frame,
                    Self::eval_element(element, animations, keyframes, query),
                )
            })
            .collect()
    }
}

fn sorted_keyframes<'a>(animation: &Animation, keyframes: &'a [Keyframe]) -> Vec<&'a Keyframe> {
    let mut keys: Vec<&Keyframe> = keyframes
        .iter()
        .filter(|k| k.animation_id == animation.id)
        .collect();
    // Stable: keyframes sharing a position keep their supplied order.
    keys.sort_by(|a, b| a.position_ms.total_cmp(&b.position_ms));
    keys
}

/// Linear progress of `t` within `[from_ms, to_ms]`, clamped; 0 for a zero-width interval.
pub(crate) fn interval_progress(from_ms: f64, to_ms: f64, t: f64) -> f64 {
    let span = to_ms - from_ms;
    if span > 0.0 {
        ((t - from_ms) / span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Map a query time onto the animation's keyframe timeline: delay, then loop wrap or clamp.
///
/// Returns `Err(local_ms)` while the animation has not started.
fn timeline_position(animation: &Animation, query: EvalQuery) -> Result<f64, f64> {
    let local = query.time_ms - animation.delay_ms;
    if local < 0.0 {
        return Err(local);
    }

    let effective = query.phase_duration_ms.unwrap_or(animation.duration_ms);
    if query.phase == Phase::Loop && local > effective && effective > 0.0 {
        Ok(local % effective)
    } else {
        Ok(local.min(effective))
    }
}

fn apply_verbatim(keyframe: &Keyframe, out: &mut PropertyMap) {
    for (name, value) in &keyframe.properties {
        out.insert(output_property_name(name).to_owned(), value.clone());
    }
}

fn sample_animation(
    animation: &Animation,
    keys: &[&Keyframe],
    query: EvalQuery,
    trace: &mut dyn EvalTrace,
    out: &mut PropertyMap,
) {
    let Some((&first, rest)) = keys.split_first() else {
        trace.on_sample(animation, &TimelineSample::Empty);
        return;
    };
    let Some(&last) = rest.last() else {
        trace.on_sample(animation, &TimelineSample::Static);
        apply_verbatim(first, out);
        return;
    };

    let t = match timeline_position(animation, query) {
        Ok(t) => t,
        Err(local_ms) => {
            trace.on_sample(animation, &TimelineSample::NotStarted { local_ms });
            apply_verbatim(first, out);
            return;
        }
    };

    if t < first.position_ms {
        trace.on_sample(animation, &TimelineSample::HoldFirst { keyframe_ms: t });
        apply_verbatim(first, out);
        return;
    }
    if t >= last.position_ms {
        trace.on_sample(animation, &TimelineSample::HoldLast { keyframe_ms: t });
        apply_verbatim(last, out);
        return;
    }

    let Some(idx) = keys
        .windows(2)
        .position(|w| w[0].position_ms <= t && t < w[1].position_ms)
    else {
        // Unreachable for finite positions; hold the first pose rather than guess.
        trace.on_sample(animation, &TimelineSample::HoldFirst { keyframe_ms: t });
        apply_verbatim(first, out);
        return;
    };
    let (a, b) = (keys[idx], keys[idx + 1]);

    let progress = interval_progress(a.position_ms, b.position_ms, t);
    let eased = apply_easing(progress, &animation.easing);
    trace.on_sample(
        animation,
        &TimelineSample::Interval {
            from_index: idx,
            keyframe_ms: t,
            progress,
            eased,
        },
    );

    for (name, from) in &a.properties {
        let value = match b.properties.get(name) {
            Some(to) => interpolate_value(name, from, to, eased),
            None => from.clone(),
        };
        out.insert(output_property_name(name).to_owned(), value);
    }
    for (name, to) in &b.properties {
        if !a.properties.contains_key(name) {
            out.insert(output_property_name(name).to_owned(), to.clone());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
