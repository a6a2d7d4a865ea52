use std::f64::consts::PI;

/// Easing functions used to remap normalized progress between two keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
    /// Quadratic ease-in/out (also reachable as `ease`).
    EaseInOut,
    /// Cubic ease-in.
    CubicIn,
    /// Cubic ease-out.
    CubicOut,
    /// Cubic ease-in/out.
    CubicInOut,
    /// Exponentially damped sine; overshoots above 1.
    ElasticOut,
    /// Bouncing settle at the end.
    BounceOut,
}

// Catalog names, aliases included. Lookup is exact (case-sensitive).
const EASE_NAMES: &[(&str, Ease)] = &[
    ("linear", Ease::Linear),
    ("ease-in", Ease::EaseIn),
    ("ease-out", Ease::EaseOut),
    ("ease-in-out", Ease::EaseInOut),
    ("ease", Ease::EaseInOut),
    ("cubic-in", Ease::CubicIn),
    ("cubic-out", Ease::CubicOut),
    ("cubic-in-out", Ease::CubicInOut),
    ("elastic-out", Ease::ElasticOut),
    ("bounce-out", Ease::BounceOut),
];

impl Ease {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Ease; 9] = [
        Ease::Linear,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::ElasticOut,
        Ease::BounceOut,
    ];

    /// Look up a catalog entry by name. Returns `None` for names outside the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        EASE_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ease)| *ease)
    }

    /// Canonical catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::CubicIn => "cubic-in",
            Self::CubicOut => "cubic-out",
            Self::CubicInOut => "cubic-in-out",
            Self::ElasticOut => "elastic-out",
            Self::BounceOut => "bounce-out",
        }
    }

    /// Apply this easing to progress `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let c4 = (2.0 * PI) / 3.0;
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            Self::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Ease {
    type Err = crate::foundation::error::KinemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            crate::foundation::error::KinemaError::parse(format!("unknown easing '{s}'"))
        })
    }
}

/// Remap `progress` with the easing named `name`.
///
/// Progress is clamped to `[0, 1]`. Names outside the catalog fall back to linear.
pub fn apply_easing(progress: f64, name: &str) -> f64 {
    Ease::from_name(name).unwrap_or(Ease::Linear).apply(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
