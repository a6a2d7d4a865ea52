use crate::scene::model::Phase;

/// Default preset durations per phase, in milliseconds.
///
/// Deserializes with every field optional so a partial JSON object overrides only what it names.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PresetTiming {
    /// Entry (`in`) duration.
    pub entry_ms: f64,
    /// Exit (`out`) duration.
    pub exit_ms: f64,
    /// Loop period.
    pub loop_ms: f64,
}

impl Default for PresetTiming {
    fn default() -> Self {
        Self {
            entry_ms: 500.0,
            exit_ms: 300.0,
            loop_ms: 1500.0,
        }
    }
}

impl PresetTiming {
    /// Duration configured for `phase`.
    pub fn duration_for(&self, phase: Phase) -> f64 {
        match phase {
            Phase::In => self.entry_ms,
            Phase::Loop => self.loop_ms,
            Phase::Out => self.exit_ms,
        }
    }
}

/// Default easing per phase: ease-out for entry/exit, ease-in-out for loops.
pub(crate) fn default_easing(phase: Phase) -> &'static str {
    match phase {
        Phase::In | Phase::Out => "ease-out",
        Phase::Loop => "ease-in-out",
    }
}
