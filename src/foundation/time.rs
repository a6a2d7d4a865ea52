/// Fixed editor/playback frame rate.
pub const FPS: f64 = 30.0;

/// Milliseconds per frame at [`FPS`] (~33.333).
pub const MS_PER_FRAME: f64 = 1000.0 / FPS;

/// Convert milliseconds to the nearest whole frame.
pub fn ms_to_frames(ms: f64) -> i64 {
    (ms / MS_PER_FRAME).round() as i64
}

/// Convert a frame count back to milliseconds.
pub fn frames_to_ms(frames: i64) -> f64 {
    frames as f64 * MS_PER_FRAME
}

/// Long-form time label for editor displays.
///
/// With `with_frames` the label is `MM:SS:FF` (minutes, seconds, frame within the second);
/// otherwise it is `M:SS.d` (tenths of a second). Negative input is treated as zero.
pub fn format_time(ms: f64, with_frames: bool) -> String {
    let ms = if ms.is_finite() { ms.max(0.0) } else { 0.0 };
    let fps = FPS as i64;

    if with_frames {
        let total = ms_to_frames(ms);
        let frames = total % fps;
        let secs = (total / fps) % 60;
        let mins = total / (fps * 60);
        return format!("{mins:02}:{secs:02}:{frames:02}");
    }

    let tenths = (ms / 100.0).round() as i64;
    let d = tenths % 10;
    let secs = (tenths / 10) % 60;
    let mins = tenths / 600;
    format!("{mins}:{secs:02}.{d}")
}

/// Short time label for timeline axis ticks: `Nf` under one second, `Ns` otherwise.
pub fn format_time_short(ms: f64) -> String {
    let ms = if ms.is_finite() { ms.max(0.0) } else { 0.0 };
    if ms < 1000.0 {
        return format!("{}f", ms_to_frames(ms));
    }
    let secs = crate::foundation::number::round_to(ms / 1000.0, 1);
    format!("{}s", crate::foundation::number::fmt_number(secs))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
