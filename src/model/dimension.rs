//! Unit-tagged dimensions

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Unit of a numeric dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A numeric value that always carries its unit.
///
/// On the wire a dimension is either `{"value": 50, "unit": "%"}` or a
/// suffixed string such as `"50%"` / `"300px"`. Bare numbers are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DimensionRepr")]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Object { value: f64, unit: Unit },
    Text(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = Error;

    fn try_from(repr: DimensionRepr) -> Result<Self> {
        match repr {
            DimensionRepr::Object { value, unit } => Dimension::new(value, unit),
            DimensionRepr::Text(s) => s.parse(),
        }
    }
}

impl Dimension {
    /// Build a dimension, rejecting negative and non-finite values
    pub fn new(value: f64, unit: Unit) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidDimension(format!("{value}{unit}")));
        }
        Ok(Self { value, unit })
    }

    pub const fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub const fn percent(value: f64) -> Self {
        Self { value, unit: Unit::Percent }
    }

    pub fn is_percent(&self) -> bool {
        self.unit == Unit::Percent
    }

    /// Re-base the dimension onto another unit.
    ///
    /// The number is kept as-is; moving into `%` caps it at 100.
    pub fn switch_unit(self, unit: Unit) -> Self {
        let value = match unit {
            Unit::Percent => self.value.min(100.0),
            Unit::Px => self.value,
        };
        Self { value, unit }
    }

    /// Replace the numeric value while keeping the unit.
    ///
    /// Percentages above 100 are rejected rather than silently capped.
    pub fn with_value(self, value: f64) -> Result<Self> {
        if self.unit == Unit::Percent && value > 100.0 {
            return Err(Error::InvalidDimension(format!(
                "{}% exceeds 100%",
                format_number(value)
            )));
        }
        Dimension::new(value, self.unit)
    }

    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self {
            value: self.value.clamp(min, max),
            unit: self.unit,
        }
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (number, unit) = if let Some(n) = s.strip_suffix("px") {
            (n, Unit::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Unit::Percent)
        } else {
            return Err(Error::InvalidDimension(format!("missing unit in {s:?}")));
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDimension(format!("not a number: {s:?}")))?;
        Dimension::new(value, unit)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

/// A height or width that may be left to the content (`auto`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "ExtentRepr")]
pub enum Extent {
    Auto,
    Length(Dimension),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExtentRepr {
    Length(Dimension),
    Keyword(String),
}

impl TryFrom<ExtentRepr> for Extent {
    type Error = Error;

    fn try_from(repr: ExtentRepr) -> Result<Self> {
        match repr {
            ExtentRepr::Length(d) => Ok(Extent::Length(d)),
            ExtentRepr::Keyword(k) if k.trim().eq_ignore_ascii_case("auto") => Ok(Extent::Auto),
            ExtentRepr::Keyword(k) => Err(Error::InvalidDimension(format!(
                "expected \"auto\" or a unit-suffixed length, got {k:?}"
            ))),
        }
    }
}

impl Serialize for Extent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Extent::Auto => serializer.serialize_str("auto"),
            Extent::Length(d) => d.serialize(serializer),
        }
    }
}

impl Extent {
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Extent::Auto => None,
            Extent::Length(d) => Some(*d),
        }
    }
}

impl From<Dimension> for Extent {
    fn from(d: Dimension) -> Self {
        Extent::Length(d)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Auto => f.write_str("auto"),
            Extent::Length(d) => d.fmt(f),
        }
    }
}

/// Locale-independent number formatting used for every emitted length.
///
/// Integers print without a fraction; everything else is rounded to two
/// decimals with trailing zeros trimmed.
pub(crate) fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // also catches -0
        "0".to_string()
    } else if !rounded.is_finite() {
        format!("{value:.0}")
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_and_tiny_numbers_format_plainly() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(Dimension::px(1e20).to_string(), "100000000000000000000px");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(640.0), "640");
    }

    #[test]
    fn parses_suffixed_strings() {
        assert_eq!("50%".parse::<Dimension>().unwrap(), Dimension::percent(50.0));
        assert_eq!(" 300px ".parse::<Dimension>().unwrap(), Dimension::px(300.0));
        assert!("300".parse::<Dimension>().is_err());
        assert!("-5px".parse::<Dimension>().is_err());
    }

    #[test]
    fn deserializes_both_forms_and_rejects_bare_numbers() {
        let d: Dimension = serde_json::from_str(r#"{"value":50,"unit":"%"}"#).unwrap();
        assert_eq!(d, Dimension::percent(50.0));
        let d: Dimension = serde_json::from_str(r#""120px""#).unwrap();
        assert_eq!(d, Dimension::px(120.0));
        assert!(serde_json::from_str::<Dimension>("120").is_err());
        assert!(serde_json::from_str::<Dimension>(r#""120""#).is_err());
    }

    #[test]
    fn switching_into_percent_caps_at_100() {
        let d = Dimension::percent(50.0).switch_unit(Unit::Px);
        assert_eq!(d, Dimension::px(50.0));
        let d = d.with_value(640.0).unwrap().switch_unit(Unit::Percent);
        assert_eq!(d, Dimension::percent(100.0));
    }

    #[test]
    fn percent_values_above_100_are_rejected() {
        assert!(Dimension::percent(40.0).with_value(120.0).is_err());
        assert!(Dimension::px(40.0).with_value(120.0).is_ok());
    }

    #[test]
    fn extent_accepts_auto() {
        let e: Extent = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(e, Extent::Auto);
        let e: Extent = serde_json::from_str(r#""80px""#).unwrap();
        assert_eq!(e, Extent::Length(Dimension::px(80.0)));
        assert_eq!(serde_json::to_string(&Extent::Auto).unwrap(), r#""auto""#);
        assert!(serde_json::from_str::<Extent>(r#""tall""#).is_err());
    }

    #[test]
    fn number_formatting_is_stable() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(33.333333), "33.33");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(Dimension::percent(50.0).to_string(), "50%");
    }
}
