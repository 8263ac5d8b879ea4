// File: crates/plot-core/src/toggle.rs
// Summary: On/Off decoration toggles with named overrides, plus normalization of the loose bool-or-list form.

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::style::{Color, LegendLoc, LineStyle};

/// Default grid alpha.
pub const DEFAULT_GRID_OPACITY: f64 = 0.3;

/// A feature flag that carries overrides when enabled.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Toggle<T> {
    #[default]
    Off,
    On(T),
}

impl<T> Toggle<T> {
    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On(_))
    }

    pub fn as_on(&self) -> Option<&T> {
        match self {
            Toggle::On(t) => Some(t),
            Toggle::Off => None,
        }
    }
}

impl<T: Default> Toggle<T> {
    /// `On` with every override left at its default.
    pub fn on() -> Self {
        Toggle::On(T::default())
    }
}

impl<T: Default> From<bool> for Toggle<T> {
    fn from(enabled: bool) -> Self {
        if enabled { Toggle::on() } else { Toggle::Off }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LegendOptions {
    pub loc: Option<LegendLoc>,
}

impl LegendOptions {
    pub fn loc(&self) -> LegendLoc {
        self.loc.unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridOptions {
    pub opacity: Option<f64>,
}

impl GridOptions {
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(DEFAULT_GRID_OPACITY)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OriginAxesOptions {
    pub linestyle: Option<LineStyle>,
    pub color: Option<Color>,
}

impl OriginAxesOptions {
    pub fn linestyle(&self) -> LineStyle {
        self.linestyle.unwrap_or(LineStyle::Dashed)
    }

    pub fn color(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }
}

fn malformed(toggle: &'static str, reason: impl Into<String>) -> ConfigurationError {
    ConfigurationError::MalformedToggle { toggle, reason: reason.into() }
}

fn describe(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Split a loose toggle (`bool` or `[bool, overrides...]`) into its flag and overrides.
/// At most `max_overrides` trailing elements are accepted.
fn split<'a>(
    toggle: &'static str,
    raw: &'a Value,
    max_overrides: usize,
) -> Result<(bool, &'a [Value]), ConfigurationError> {
    match raw {
        Value::Bool(b) => Ok((*b, &[][..])),
        Value::Array(items) => {
            let Some((first, rest)) = items.split_first() else {
                return Err(malformed(toggle, "empty list"));
            };
            let Value::Bool(enabled) = first else {
                return Err(malformed(
                    toggle,
                    format!("first element must be a boolean, got {}", describe(first)),
                ));
            };
            if rest.len() > max_overrides {
                return Err(malformed(
                    toggle,
                    format!("expected at most {} overrides, got {}", max_overrides, rest.len()),
                ));
            }
            Ok((*enabled, rest))
        }
        other => Err(malformed(toggle, format!("expected a boolean or a list, got {}", describe(other)))),
    }
}

fn override_str<'a>(toggle: &'static str, field: &str, v: &'a Value) -> Result<&'a str, ConfigurationError> {
    v.as_str()
        .ok_or_else(|| malformed(toggle, format!("{field} must be a string, got {}", describe(v))))
}

/// `legend`: `true`, `[true]`, `[true, "upper right"]`, or `[true, 1]`.
pub fn legend_from_value(raw: &Value) -> Result<Toggle<LegendOptions>, ConfigurationError> {
    let (enabled, rest) = split("legend", raw, 1)?;
    if !enabled {
        return Ok(Toggle::Off);
    }
    let loc = match rest.first() {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => {
            let code = n.as_u64().ok_or_else(|| malformed("legend", format!("bad location code {n}")))?;
            Some(LegendLoc::from_code(code).ok_or_else(|| malformed("legend", format!("bad location code {code}")))?)
        }
        Some(v) => {
            let s = override_str("legend", "location", v)?;
            Some(s.parse::<LegendLoc>().map_err(|e| malformed("legend", e.to_string()))?)
        }
    };
    Ok(Toggle::On(LegendOptions { loc }))
}

/// `grid`: `true`, `[true]`, or `[true, 0.5]`.
pub fn grid_from_value(raw: &Value) -> Result<Toggle<GridOptions>, ConfigurationError> {
    let (enabled, rest) = split("grid", raw, 1)?;
    if !enabled {
        return Ok(Toggle::Off);
    }
    let opacity = match rest.first() {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_f64()
                .ok_or_else(|| malformed("grid", format!("opacity must be a number, got {}", describe(v))))?,
        ),
    };
    Ok(Toggle::On(GridOptions { opacity }))
}

/// `axes`: `true`, `[true, "--"]`, or `[true, ":", "gray"]`.
pub fn origin_axes_from_value(raw: &Value) -> Result<Toggle<OriginAxesOptions>, ConfigurationError> {
    let (enabled, rest) = split("axes", raw, 2)?;
    if !enabled {
        return Ok(Toggle::Off);
    }
    let mut opts = OriginAxesOptions::default();
    if let Some(v) = rest.first().filter(|v| !v.is_null()) {
        let s = override_str("axes", "linestyle", v)?;
        opts.linestyle = Some(s.parse::<LineStyle>().map_err(|e| malformed("axes", e.to_string()))?);
    }
    if let Some(v) = rest.get(1).filter(|v| !v.is_null()) {
        let s = override_str("axes", "color", v)?;
        opts.color = Some(s.parse::<Color>().map_err(|e| malformed("axes", e.to_string()))?);
    }
    Ok(Toggle::On(opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booleans_use_defaults() {
        assert_eq!(legend_from_value(&json!(false)).unwrap(), Toggle::Off);
        let legend = legend_from_value(&json!(true)).unwrap();
        assert_eq!(legend.as_on().unwrap().loc(), LegendLoc::Best);
        assert_eq!(grid_from_value(&json!(true)).unwrap().as_on().unwrap().opacity(), 0.3);
        let axes = origin_axes_from_value(&json!(true)).unwrap();
        let axes = axes.as_on().unwrap();
        assert_eq!(axes.linestyle(), LineStyle::Dashed);
        assert_eq!(axes.color(), Color::BLACK);
    }

    #[test]
    fn lists_override_in_position() {
        let legend = legend_from_value(&json!([true, "upper left"])).unwrap();
        assert_eq!(legend.as_on().unwrap().loc(), LegendLoc::UpperLeft);
        let legend = legend_from_value(&json!([true, 4])).unwrap();
        assert_eq!(legend.as_on().unwrap().loc(), LegendLoc::LowerRight);
        let grid = grid_from_value(&json!([true, 0.5])).unwrap();
        assert_eq!(grid.as_on().unwrap().opacity(), 0.5);
        let axes = origin_axes_from_value(&json!([true, ":"])).unwrap();
        let axes = axes.as_on().unwrap();
        assert_eq!(axes.linestyle(), LineStyle::Dotted);
        assert_eq!(axes.color(), Color::BLACK);
    }

    #[test]
    fn false_in_first_position_disables() {
        assert_eq!(grid_from_value(&json!([false, 0.9])).unwrap(), Toggle::Off);
    }

    #[test]
    fn malformed_toggles_are_configuration_errors() {
        for raw in [json!("yes"), json!(1), json!([]), json!(["upper left"]), json!({"on": true})] {
            let err = legend_from_value(&raw).unwrap_err();
            assert!(matches!(err, ConfigurationError::MalformedToggle { toggle: "legend", .. }), "{raw}");
        }
        assert!(grid_from_value(&json!([true, "dense"])).is_err());
        assert!(grid_from_value(&json!([true, 0.5, 1])).is_err());
        assert!(origin_axes_from_value(&json!([true, "--", "not-a-color"])).is_err());
        assert!(legend_from_value(&json!([true, "nowhere"])).is_err());
    }
}
