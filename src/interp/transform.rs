//! Composite transform expressions such as `translateX(10px) scale(1.2) rotate(45deg)`.
//!
//! The interface is [`TransformExpr::parse`], [`TransformExpr::interpolate`] and `Display`
//! (serialization). Interpolation works on the union of function names from both
//! sides; a function present on only one side is blended against its identity value.

use smallvec::SmallVec;

use crate::foundation::number::{fmt_number, round_to};

// Functions accepted by the parser. Anything else means "not a transform".
const KNOWN_FUNCTIONS: &[&str] = &[
    "translate",
    "translateX",
    "translateY",
    "translateZ",
    "translate3d",
    "scale",
    "scaleX",
    "scaleY",
    "scaleZ",
    "scale3d",
    "rotate",
    "rotateX",
    "rotateY",
    "rotateZ",
    "skew",
    "skewX",
    "skewY",
];

/// One numeric argument with an optional unit suffix (`px`, `%`, `deg`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct TransformArg {
    /// Numeric part.
    pub value: f64,
    /// Unit suffix, if any.
    pub unit: Option<String>,
}

/// One named transform function and its arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformFn {
    /// Function name, e.g. `translateX`.
    pub name: String,
    /// Arguments in order.
    pub args: SmallVec<[TransformArg; 3]>,
}

/// A parsed composite transform: functions in source order, names unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformExpr {
    /// Functions in first-appearance order.
    pub functions: Vec<TransformFn>,
}

/// Value a missing function argument assumes so it can still be interpolated.
fn identity_value(function: &str) -> f64 {
    if function.starts_with("scale") { 1.0 } else { 0.0 }
}

impl TransformExpr {
    /// Parse a composite expression. `none` parses as the empty expression.
    ///
    /// Returns `None` for unknown function names, unbalanced parentheses or non-numeric arguments.
    /// A repeated function name keeps its first position and takes the last arguments.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input == "none" {
            return Some(Self::default());
        }

        let bytes = input.as_bytes();
        let mut out = Self::default();
        let mut i = 0usize;

        while i < bytes.len() {
            if bytes[i].is_ascii_whitespace() {
                i += 1;
                continue;
            }

            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let name = &input[start..i];
            if name.is_empty() || !KNOWN_FUNCTIONS.contains(&name) {
                return None;
            }

            if bytes.get(i) != Some(&b'(') {
                return None;
            }
            let close = input[i..].find(')')? + i;
            let args = parse_args(&input[i + 1..close])?;
            i = close + 1;

            out.set(name, args);
        }

        if out.functions.is_empty() {
            return None;
        }
        Some(out)
    }

    fn set(&mut self, name: &str, args: SmallVec<[TransformArg; 3]>) {
        match self.functions.iter_mut().find(|f| f.name == name) {
            Some(f) => f.args = args,
            None => self.functions.push(TransformFn {
                name: name.to_owned(),
                args,
            }),
        }
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&TransformFn> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Blend two expressions argument by argument.
    ///
    /// The result lists `from`'s functions first, then functions only `to` has. A function or
    /// argument missing on one side uses the identity (1 for `scale*`, 0 otherwise); the unit comes
    /// from whichever side specifies one.
    pub fn interpolate(from: &Self, to: &Self, progress: f64) -> Self {
        let mut names: Vec<&str> = from.functions.iter().map(|f| f.name.as_str()).collect();
        for f in &to.functions {
            if !names.contains(&f.name.as_str()) {
                names.push(f.name.as_str());
            }
        }

        let empty: &[TransformArg] = &[];
        let functions = names
            .into_iter()
            .map(|name| {
                let a = from.get(name).map(|f| f.args.as_slice()).unwrap_or(empty);
                let b = to.get(name).map(|f| f.args.as_slice()).unwrap_or(empty);
                let identity = identity_value(name);

                let n = a.len().max(b.len());
                let args = (0..n)
                    .map(|idx| {
                        let (av, au) = a
                            .get(idx)
                            .map(|x| (x.value, x.unit.as_deref()))
                            .unwrap_or((identity, None));
                        let (bv, bu) = b
                            .get(idx)
                            .map(|x| (x.value, x.unit.as_deref()))
                            .unwrap_or((identity, None));
                        TransformArg {
                            value: av + (bv - av) * progress,
                            unit: au.or(bu).map(str::to_owned),
                        }
                    })
                    .collect();

                TransformFn {
                    name: name.to_owned(),
                    args,
                }
            })
            .collect();

        Self { functions }
    }
}

fn parse_args(body: &str) -> Option<SmallVec<[TransformArg; 3]>> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    body.split(',').map(|s| parse_arg(s.trim())).collect()
}

// Length of the leading `[+-]digits[.digits][e[+-]digits]` run.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // Exponent only when digits follow, so `em`/`ex` stay units.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

fn parse_arg(s: &str) -> Option<TransformArg> {
    let (num, unit) = s.split_at(numeric_prefix_len(s.as_bytes()));
    let value: f64 = num.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return None;
    }
    Some(TransformArg {
        value,
        unit: (!unit.is_empty()).then(|| unit.to_owned()),
    })
}

impl std::fmt::Display for TransformArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt_number(round_to(self.value, 3)))?;
        if let Some(unit) = &self.unit {
            f.write_str(unit)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for TransformFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

impl std::fmt::Display for TransformExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.functions.is_empty() {
            return f.write_str("none");
        }
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{func}")?;
        }
        Ok(())
    }
}

/// Blend two transform strings. Returns `None` when either side does not parse.
pub(crate) fn interpolate_transform(from: &str, to: &str, progress: f64) -> Option<String> {
    let a = TransformExpr::parse(from)?;
    let b = TransformExpr::parse(to)?;
    Some(TransformExpr::interpolate(&a, &b, progress).to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/interp/transform.rs"]
mod tests;
