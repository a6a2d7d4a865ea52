use crate::foundation::number::{fmt_number, round_to};

/// Straight (non-premultiplied) color: 8-bit channels plus alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

const NAMED_COLORS: &[(&str, &str)] = &[
    ("aqua", "#00ffff"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("brown", "#a52a2a"),
    ("cyan", "#00ffff"),
    ("fuchsia", "#ff00ff"),
    ("gold", "#ffd700"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("grey", "#808080"),
    ("indigo", "#4b0082"),
    ("lime", "#00ff00"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("pink", "#ffc0cb"),
    ("purple", "#800080"),
    ("red", "#ff0000"),
    ("silver", "#c0c0c0"),
    ("teal", "#008080"),
    ("transparent", "#00000000"),
    ("violet", "#ee82ee"),
    ("white", "#ffffff"),
    ("yellow", "#ffff00"),
];

/// Parse a color from hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`, or a named color.
///
/// Returns `None` for anything else; callers treat that as "not a color".
pub fn parse_color(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(body) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        return parse_rgb_fn(body.strip_suffix(')')?);
    }

    let (_, hex) = NAMED_COLORS.iter().find(|(name, _)| *name == lower)?;
    parse_hex(hex.strip_prefix('#')?)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    fn byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| {
                let d = c.to_digit(16).unwrap_or(0) as u8;
                d * 17
            });
            Some(Rgba::rgb(it.next()?, it.next()?, it.next()?))
        }
        6 => Some(Rgba::rgb(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Some(Rgba {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
            a: f64::from(byte(&hex[6..8])?) / 255.0,
        }),
        _ => None,
    }
}

fn parse_rgb_fn(body: &str) -> Option<Rgba> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    fn channel(s: &str) -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        Some(v.round().clamp(0.0, 255.0) as u8)
    }

    let a = match parts.get(3) {
        Some(s) => {
            let v: f64 = s.parse().ok()?;
            if !v.is_finite() {
                return None;
            }
            v.clamp(0.0, 1.0)
        }
        None => 1.0,
    };

    Some(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

/// Serialize as `rgb(r,g,b)` when fully opaque, else `rgba(r,g,b,a)` with alpha to 3 decimals.
pub fn format_color(c: Rgba) -> String {
    if c.a == 1.0 {
        format!("rgb({},{},{})", c.r, c.g, c.b)
    } else {
        format!(
            "rgba({},{},{},{})",
            c.r,
            c.g,
            c.b,
            fmt_number(round_to(c.a, 3))
        )
    }
}

/// Blend two color strings. Returns `None` when either side does not parse.
pub fn interpolate_color(from: &str, to: &str, progress: f64) -> Option<String> {
    let a = parse_color(from)?;
    let b = parse_color(to)?;

    fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    }

    let alpha = a.a + (b.a - a.a) * progress;
    Some(format_color(Rgba {
        r: lerp_u8(a.r, b.r, progress),
        g: lerp_u8(a.g, b.g, progress),
        b: lerp_u8(a.b, b.b, progress),
        a: alpha.clamp(0.0, 1.0),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/interp/color.rs"]
mod tests;
