use crate::scene::model::Animation;

/// The decision the evaluator took for one animation at one query time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineSample {
    /// No keyframes; the animation contributed nothing.
    Empty,
    /// Exactly one keyframe, applied verbatim.
    Static,
    /// Query time falls inside the start delay; first keyframe applied.
    NotStarted {
        /// Query time relative to the animation start (negative).
        local_ms: f64,
    },
    /// Timeline position before the first keyframe; first keyframe applied.
    HoldFirst {
        /// Timeline position after wrapping/clamping.
        keyframe_ms: f64,
    },
    /// Timeline position at or after the last keyframe; last keyframe applied.
    HoldLast {
        /// Timeline position after wrapping/clamping.
        keyframe_ms: f64,
    },
    /// Interpolated between keyframes `from_index` and `from_index + 1` (sorted order).
    Interval {
        /// Index of the earlier bracketing keyframe.
        from_index: usize,
        /// Timeline position after wrapping/clamping.
        keyframe_ms: f64,
        /// Linear progress within the interval, in `[0, 1]`.
        progress: f64,
        /// Progress after easing.
        eased: f64,
    },
}

/// Observability hook threaded through evaluation.
///
/// Implementations must not influence the result; the evaluator output is identical whichever
/// trace is supplied.
pub trait EvalTrace {
    /// Called once per matching animation.
    fn on_sample(&mut self, _animation: &Animation, _sample: &TimelineSample) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl EvalTrace for NoTrace {}

/// Forwards events to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl EvalTrace for LogTrace {
    fn on_sample(&mut self, animation: &Animation, sample: &TimelineSample) {
        tracing::debug!(
            animation = %animation.id,
            element = %animation.element_id,
            phase = %animation.phase,
            easing = %animation.easing,
            ?sample,
            "timeline sample"
        );
    }
}

/// Recorded trace event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TraceEvent {
    /// Animation the sample belongs to.
    pub animation_id: String,
    /// The decision taken.
    pub sample: TimelineSample,
}

impl EvalTrace for Vec<TraceEvent> {
    fn on_sample(&mut self, animation: &Animation, sample: &TimelineSample) {
        self.push(TraceEvent {
            animation_id: animation.id.clone(),
            sample: sample.clone(),
        });
    }
}
