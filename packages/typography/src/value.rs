//! CSS length parsing and unit coercion for font size arithmetic.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Browser default root font size, used for `px` <-> `rem`/`em` conversion
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Units accepted for font size arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
        }
    }

    fn is_relative(&self) -> bool {
        matches!(self, LengthUnit::Em | LengthUnit::Rem)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS length split into magnitude and unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedValue {
    pub value: f64,
    pub unit: LengthUnit,
}

impl ParsedValue {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse `<number><unit>` where number is `\d*\.?\d+` and unit is one of
    /// `rem`, `px` or `em`. Signs, exponents, whitespace and any other unit
    /// are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = length_pattern().captures(raw)?;
        let value = captures[1].parse::<f64>().ok()?;
        let unit = match &captures[2] {
            "rem" => LengthUnit::Rem,
            "px" => LengthUnit::Px,
            _ => LengthUnit::Em,
        };
        Some(Self { value, unit })
    }

    /// Parse and convert into `target` in one step
    pub fn parse_coerced(raw: &str, target: LengthUnit, root_size: f64) -> Option<Self> {
        Self::parse(raw).map(|parsed| parsed.coerce_to(target, root_size))
    }

    /// Convert between absolute and root-relative units.
    ///
    /// `em`/`rem` to `px` multiplies by the root size, `px` to `em`/`rem`
    /// divides by it. `em` and `rem` are never converted into each other.
    pub fn coerce_to(self, target: LengthUnit, root_size: f64) -> Self {
        match (self.unit, target) {
            (unit, LengthUnit::Px) if unit.is_relative() => {
                Self::new(self.value * root_size, LengthUnit::Px)
            }
            (LengthUnit::Px, target) if target.is_relative() => {
                Self::new(self.value / root_size, target)
            }
            _ => self,
        }
    }

    /// Size in pixels, treating `em` as root-relative
    pub fn to_px(self, root_size: f64) -> f64 {
        match self.unit {
            LengthUnit::Px => self.value,
            LengthUnit::Em | LengthUnit::Rem => self.value * root_size,
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

fn length_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d*\.?\d+)(rem|px|em)$").unwrap())
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render a number the way it appears in CSS: no exponent, no trailing
/// zeros, no trailing dot. Float noise past 12 decimals is dropped, so
/// magnitudes below 5e-13 print as `0`. Clamp terms are rounded to at most
/// 4 decimals before they get here.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.12}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_units() {
        assert_eq!(
            ParsedValue::parse("28px"),
            Some(ParsedValue::new(28.0, LengthUnit::Px))
        );
        assert_eq!(
            ParsedValue::parse("1.75rem"),
            Some(ParsedValue::new(1.75, LengthUnit::Rem))
        );
        assert_eq!(
            ParsedValue::parse("10em"),
            Some(ParsedValue::new(10.0, LengthUnit::Em))
        );
        assert_eq!(
            ParsedValue::parse(".5rem"),
            Some(ParsedValue::new(0.5, LengthUnit::Rem))
        );
    }

    #[test]
    fn test_parse_rejects_unsupported_input() {
        for raw in [
            "", "px", "20vw", "50%", "-2px", "2.px", "1.2.3rem", " 2px", "2 px", "2PX",
            "var:preset|font-size|x-large", "clamp(1rem, 2vw, 3rem)",
        ] {
            assert_eq!(ParsedValue::parse(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_coerce_between_px_and_root_units() {
        let px = ParsedValue::new(21.0, LengthUnit::Px);
        assert_eq!(
            px.coerce_to(LengthUnit::Rem, ROOT_FONT_SIZE_PX),
            ParsedValue::new(1.3125, LengthUnit::Rem)
        );

        let rem = ParsedValue::new(50.0, LengthUnit::Rem);
        assert_eq!(
            rem.coerce_to(LengthUnit::Px, ROOT_FONT_SIZE_PX),
            ParsedValue::new(800.0, LengthUnit::Px)
        );

        let em = ParsedValue::new(0.75, LengthUnit::Em);
        assert_eq!(em.coerce_to(LengthUnit::Rem, ROOT_FONT_SIZE_PX), em);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(21.0), "21");
        assert_eq!(format_number(1.3125), "1.3125");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(93.75), "93.75");
    }

    #[test]
    fn test_parse_prefers_rem_over_em() {
        assert_eq!(
            ParsedValue::parse("2rem"),
            Some(ParsedValue::new(2.0, LengthUnit::Rem))
        );
        assert_eq!(ParsedValue::parse("2r"), None);
    }

    #[test]
    fn test_format_number_drops_sub_precision_noise() {
        assert_eq!(format_number(1e-13), "0");
        assert_eq!(format_number(0.0516), "0.0516");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.524_038, 3), 2.524);
        assert_eq!(round_to(7.68, 3), 7.68);
    }
}
