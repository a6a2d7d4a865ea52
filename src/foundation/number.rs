/// Round `v` to `decimals` places. Non-finite input is passed through.
pub(crate) fn round_to(v: f64, decimals: i32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals);
    let r = (v * scale).round() / scale;
    // Avoid "-0" in serialized output.
    if r == 0.0 { 0.0 } else { r }
}

/// Shortest textual form of a number: integers print without a fractional part.
pub(crate) fn fmt_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}
