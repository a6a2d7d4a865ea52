//! Kinema is a deterministic keyframe animation evaluator.
//!
//! Given an element's animations, their keyframes, a query time and the active phase, Kinema
//! reconstructs the interpolated value of every animated property at that instant. The crate also
//! ships the preset factories used by authoring tools to seed new animations.
//!
//! # Pipeline overview
//!
//! 1. **Author**: [`create_default_animation`] / [`create_chart_animation`] synthesize an
//!    [`Animation`] plus its [`Keyframe`]s (or a [`Document`] is loaded from JSON).
//! 2. **Evaluate**: [`Evaluator::eval_element`] maps `(element, animations, keyframes, query)` to a
//!    [`PropertyMap`] of post-alias property names.
//! 3. **Apply**: the host render loop overlays that map onto the element's defaults
//!    ([`Element::resolve`]) and paints.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure evaluation**: the evaluator keeps no state between calls, performs no IO and never fails.
//!   Malformed input degrades to documented fallbacks (linear easing, snap interpolation, no-op).
//! - **Random access**: any query time is valid, so scrubbing works as well as forward playback.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod interp;
mod presets;
mod scene;

pub use animation::ease::{Ease, apply_easing};
pub use eval::evaluator::{EvalQuery, Evaluator};
pub use eval::trace::{EvalTrace, LogTrace, NoTrace, TimelineSample, TraceEvent};
pub use foundation::error::{KinemaError, KinemaResult};
pub use foundation::time::{
    FPS, MS_PER_FRAME, format_time, format_time_short, frames_to_ms, ms_to_frames,
};
pub use interp::color::{Rgba, format_color, interpolate_color, parse_color};
pub use interp::transform::{TransformArg, TransformExpr, TransformFn};
pub use interp::value::{interpolate_number, interpolate_value, output_property_name, snap};
pub use presets::chart::{ChartPresetKind, create_chart_animation, create_chart_animation_with};
pub use presets::standard::{
    PresetKind, create_default_animation, create_default_animation_with, scale_keyframes,
};
pub use presets::timing::PresetTiming;
pub use scene::document::Document;
pub use scene::model::{Anchor, Animation, Element, Keyframe, Phase, PropertyMap, PropertyValue};
