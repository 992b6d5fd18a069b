use std::collections::BTreeMap;
use std::fmt;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// StyleValue – one named rendering parameter
// ---------------------------------------------------------------------------

/// A dynamically-typed style argument value (color, marker, line width, …).
///
/// `Null` is the sentinel used when a deduplicated label has already been
/// emitted and must be suppressed on later draw calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::String(s) => write!(f, "{s}"),
            StyleValue::Integer(i) => write!(f, "{i}"),
            StyleValue::Float(v) => write!(f, "{v}"),
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl From<i64> for StyleValue {
    fn from(i: i64) -> Self {
        StyleValue::Integer(i)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Float(v)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

/// Convert a JSON value into a [`StyleValue`] so style bags can be described
/// in configuration files.
impl From<JsonValue> for StyleValue {
    fn from(val: JsonValue) -> Self {
        match val {
            JsonValue::String(s) => StyleValue::String(s),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    StyleValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    StyleValue::Float(f)
                } else {
                    StyleValue::String(n.to_string())
                }
            }
            JsonValue::Bool(b) => StyleValue::Bool(b),
            JsonValue::Null => StyleValue::Null,
            other => StyleValue::String(other.to_string()),
        }
    }
}

/// A bag of named style arguments: argument name → value.
///
/// Intended to be spread as keyword-style configuration into a plotting call.
/// The key `"label"` is reserved for deduplicated legend text.
pub type StyleArgs = BTreeMap<String, StyleValue>;

// ---------------------------------------------------------------------------
// ArgumentPool – pre-declared candidate values for one argument name
// ---------------------------------------------------------------------------

/// An ordered sequence of pre-declared values for one style-argument name,
/// consumed in reverse declaration order (last-declared value is taken first).
///
/// Implemented as an index cursor over the declared sequence; the declared
/// values themselves are never reordered.
#[derive(Debug, Clone)]
pub struct ArgumentPool {
    values: Vec<StyleValue>,
    remaining: usize,
}

impl ArgumentPool {
    /// Wrap a declared value sequence, all values initially available.
    pub fn new(values: Vec<StyleValue>) -> Self {
        let remaining = values.len();
        ArgumentPool { values, remaining }
    }

    /// Number of values not yet handed out.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True when every declared value has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// The declared sequence, in declaration order.
    pub fn declared(&self) -> &[StyleValue] {
        &self.values
    }

    /// Take the next value (tail of the declared order), or `None` when dry.
    pub fn take(&mut self) -> Option<StyleValue> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.values[self.remaining].clone())
    }
}

// ---------------------------------------------------------------------------
// Color pool generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours as `#rrggbb` hex strings using
/// evenly spaced hues, suitable for seeding a `"color"` argument pool.
pub fn color_pool(n: usize) -> Vec<StyleValue> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            StyleValue::String(format!(
                "#{:02x}{:02x}{:02x}",
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_takes_in_reverse_declaration_order() {
        let mut pool = ArgumentPool::new(vec!["red".into(), "blue".into()]);
        assert_eq!(pool.remaining(), 2);
        assert_eq!(pool.take(), Some("blue".into()));
        assert_eq!(pool.take(), Some("red".into()));
        assert!(pool.is_exhausted());
        assert_eq!(pool.take(), None);
    }

    #[test]
    fn pool_declared_order_is_preserved() {
        let mut pool = ArgumentPool::new(vec!["o".into(), "x".into()]);
        pool.take();
        assert_eq!(
            pool.declared().to_vec(),
            vec![StyleValue::from("o"), StyleValue::from("x")]
        );
    }

    #[test]
    fn color_pool_yields_distinct_hex_strings() {
        let colors = color_pool(8);
        assert_eq!(colors.len(), 8);
        let mut seen = std::collections::BTreeSet::new();
        for c in &colors {
            match c {
                StyleValue::String(s) => {
                    assert_eq!(s.len(), 7);
                    assert!(s.starts_with('#'));
                    seen.insert(s.clone());
                }
                other => panic!("expected hex string, got {other:?}"),
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn color_pool_empty_for_zero() {
        assert!(color_pool(0).is_empty());
    }

    #[test]
    fn style_value_from_json() {
        assert_eq!(
            StyleValue::from(serde_json::json!("dashed")),
            StyleValue::String("dashed".to_string())
        );
        assert_eq!(StyleValue::from(serde_json::json!(3)), StyleValue::Integer(3));
        assert_eq!(StyleValue::from(serde_json::json!(1.5)), StyleValue::Float(1.5));
        assert_eq!(StyleValue::from(serde_json::json!(true)), StyleValue::Bool(true));
        assert_eq!(StyleValue::from(serde_json::Value::Null), StyleValue::Null);
    }
}
