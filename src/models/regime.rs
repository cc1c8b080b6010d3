//! Market regime values and the S5 badge text.
//!
//! Regime payloads arrive in a few shapes: `{"s5_regime": "bull", ...}` from
//! the board feed, `{"regime": "..."}` from older producers, or a bare scalar.
//! `Regime::resolve` picks the first usable value in that order.

use serde_json::Value;

pub const S5_BADGE_PREFIX: &str = "S5: ";
pub const S5_BADGE_EMPTY: &str = "S5: —";

/// The effective regime value, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime<'a> {
    HasS5Regime(&'a Value),
    HasRegime(&'a Value),
    Raw(&'a Value),
}

impl<'a> Regime<'a> {
    /// None when the input counts as "no regime" (null, false, 0, NaN or "").
    pub fn resolve(input: Option<&'a Value>) -> Option<Self> {
        let value = input.filter(|v| is_truthy(v))?;

        // Only objects carry fields; `get` is None for every other shape
        let field = |name: &str| value.get(name).filter(|v| is_truthy(v));

        if let Some(v) = field("s5_regime") {
            Some(Self::HasS5Regime(v))
        } else if let Some(v) = field("regime") {
            Some(Self::HasRegime(v))
        } else {
            Some(Self::Raw(value))
        }
    }

    pub fn value(&self) -> &'a Value {
        match self {
            Self::HasS5Regime(v) | Self::HasRegime(v) | Self::Raw(v) => v,
        }
    }
}

impl std::fmt::Display for Regime<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&coerce_to_string(self.value()))
    }
}

/// Badge text for the stage-5 indicator. Never fails.
pub fn s5_badge_text(regime: Option<&Value>) -> String {
    match Regime::resolve(regime) {
        Some(r) => format!("{S5_BADGE_PREFIX}{r}"),
        None => S5_BADGE_EMPTY.to_string(),
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Browser-style string conversion: numbers in shortest form, arrays joined
/// with commas, objects as `[object Object]`.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_number).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if x == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if (1e-6..1e21).contains(&x.abs()) {
        // Shortest round-tripping digits, never in exponent form
        x.to_string()
    } else {
        // `{:e}` gives "1e21" / "1e-7"; browsers sign positive exponents
        let exp = format!("{x:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}
