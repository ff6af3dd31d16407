//! Fluid font sizes: turning a preset size into a viewport-responsive
//! `clamp(min, preferred, max)` expression.
//!
//! Every public function here is total. Values that cannot take part in the
//! arithmetic (unparseable sizes, unsupported units such as `vw` or `%`)
//! degrade to the original static size.

use crate::value::{format_number, round_to, LengthUnit, ParsedValue, ROOT_FONT_SIZE_PX};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A font size option as configured in theme settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontSizePreset {
    /// CSS length, e.g. `28px` or `1.75rem`
    pub size: String,

    #[serde(default, skip_serializing_if = "Fluid::is_default")]
    pub fluid: Fluid,
}

impl FontSizePreset {
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            fluid: Fluid::Default,
        }
    }

    pub fn with_fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = fluid;
        self
    }
}

/// Per-preset fluid override.
///
/// In JSON: absent, `null` or `true` map to `Default`, `false` to `Disabled`
/// and an object to `Bounds`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fluid {
    #[default]
    Default,
    Disabled,
    Bounds(FluidBounds),
}

impl Fluid {
    pub fn is_default(&self) -> bool {
        matches!(self, Fluid::Default)
    }

    fn bounds(&self) -> Option<&FluidBounds> {
        match self {
            Fluid::Bounds(bounds) => Some(bounds),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFluid {
    Toggle(bool),
    Bounds(FluidBounds),
}

impl<'de> Deserialize<'de> for Fluid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawFluid>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(RawFluid::Toggle(true)) => Fluid::Default,
            Some(RawFluid::Toggle(false)) => Fluid::Disabled,
            Some(RawFluid::Bounds(bounds)) => Fluid::Bounds(bounds),
        })
    }
}

impl Serialize for Fluid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fluid::Default => serializer.serialize_none(),
            Fluid::Disabled => serializer.serialize_bool(false),
            Fluid::Bounds(bounds) => bounds.serialize(serializer),
        }
    }
}

/// Explicit minimum and maximum font sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FluidBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl FluidBounds {
    pub fn new(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }
}

/// Constants driving the fluid computation
#[derive(Debug, Clone, PartialEq)]
pub struct FluidTypographyOptions {
    pub min_viewport_width: ParsedValue,
    pub max_viewport_width: ParsedValue,
    /// Applied to the preset size when no explicit minimum is given
    pub min_font_size_factor: f64,
    /// Applied to the preset size when no explicit maximum is given
    pub max_font_size_factor: f64,
    pub scale_factor: f64,
    pub root_size: f64,
}

impl Default for FluidTypographyOptions {
    fn default() -> Self {
        Self {
            min_viewport_width: ParsedValue::new(768.0, LengthUnit::Px),
            max_viewport_width: ParsedValue::new(1600.0, LengthUnit::Px),
            min_font_size_factor: 0.75,
            max_font_size_factor: 1.5,
            scale_factor: 1.0,
            root_size: ROOT_FONT_SIZE_PX,
        }
    }
}

/// The three terms of a computed fluid font size
#[derive(Debug, Clone, PartialEq)]
pub struct FluidClamp {
    /// Lower bound exactly as supplied
    pub minimum: String,
    /// Upper bound exactly as supplied
    pub maximum: String,
    pub minimum_value: ParsedValue,
    /// Upper bound in the lower bound's unit
    pub maximum_value: ParsedValue,
    /// Lower bound in `rem` (absolute lengths only) rounded to 4 decimals,
    /// anchoring the preferred term
    pub minimum_rem: ParsedValue,
    /// One hundredth of the minimum viewport width
    pub viewport_offset: ParsedValue,
    pub linear_factor: f64,
}

impl FluidClamp {
    /// Evaluate the preferred term in pixels at a viewport width
    pub fn preferred_px_at(&self, viewport_width_px: f64, root_size: f64) -> f64 {
        let one_vw = viewport_width_px / 100.0;
        self.minimum_rem.to_px(root_size)
            + (one_vw - self.viewport_offset.to_px(root_size)) * self.linear_factor
    }
}

impl fmt::Display for FluidClamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({}, {} + ((1vw - {}) * {}), {})",
            self.minimum,
            self.minimum_rem,
            self.viewport_offset,
            format_number(self.linear_factor),
            self.maximum
        )
    }
}

/// Compute a clamp between two raw font sizes.
///
/// The minimum's unit becomes the working unit; the maximum and the viewport
/// widths are coerced into it. Returns `None` when either bound does not
/// parse as a `px`, `em` or `rem` length.
pub fn compute_fluid_value(
    minimum: &str,
    maximum: &str,
    options: &FluidTypographyOptions,
) -> Option<FluidClamp> {
    let root = options.root_size;

    let minimum_value = ParsedValue::parse(minimum)?;
    let unit = minimum_value.unit;
    let maximum_value = ParsedValue::parse_coerced(maximum, unit, root)?;

    let rem = minimum_value.coerce_to(LengthUnit::Rem, root);
    let minimum_rem = ParsedValue::new(round_to(rem.value, 4), rem.unit);
    let min_viewport = options.min_viewport_width.coerce_to(unit, root);
    let max_viewport = options.max_viewport_width.coerce_to(unit, root);

    let viewport_offset = ParsedValue::new(round_to(min_viewport.value / 100.0, 3), unit);
    let linear_factor = 100.0
        * ((maximum_value.value - minimum_value.value)
            / (max_viewport.value - min_viewport.value));
    let linear_factor = round_to(linear_factor, 3) * options.scale_factor;

    Some(FluidClamp {
        minimum: minimum.to_string(),
        maximum: maximum.to_string(),
        minimum_value,
        maximum_value,
        minimum_rem,
        viewport_offset,
        linear_factor,
    })
}

/// Resolves preset font sizes into static or fluid CSS values
#[derive(Debug, Clone, Default)]
pub struct FluidFontSizeResolver {
    options: FluidTypographyOptions,
}

impl FluidFontSizeResolver {
    pub fn new(options: FluidTypographyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FluidTypographyOptions {
        &self.options
    }

    /// The fluid clamp for a preset, or `None` when the static size applies
    pub fn fluid_clamp(&self, preset: &FontSizePreset, fluid_enabled: bool) -> Option<FluidClamp> {
        if !fluid_enabled || matches!(preset.fluid, Fluid::Disabled) {
            return None;
        }

        let Some(preferred) = ParsedValue::parse(&preset.size) else {
            debug!(size = %preset.size, "Font size is not a supported length, keeping static value");
            return None;
        };

        let bounds = preset.fluid.bounds();
        let minimum = explicit_bound(bounds.and_then(|b| b.min.as_ref())).unwrap_or_else(|| {
            ParsedValue::new(preferred.value * self.options.min_font_size_factor, preferred.unit)
                .to_string()
        });
        let maximum = explicit_bound(bounds.and_then(|b| b.max.as_ref())).unwrap_or_else(|| {
            ParsedValue::new(preferred.value * self.options.max_font_size_factor, preferred.unit)
                .to_string()
        });

        let clamp = compute_fluid_value(&minimum, &maximum, &self.options);
        if clamp.is_none() {
            debug!(
                size = %preset.size,
                min = %minimum,
                max = %maximum,
                "Invalid fluid units, keeping static value"
            );
        }
        clamp
    }

    /// Resolve a preset into the CSS value to emit
    pub fn resolve(&self, preset: &FontSizePreset, fluid_enabled: bool) -> String {
        match self.fluid_clamp(preset, fluid_enabled) {
            Some(clamp) => clamp.to_string(),
            None => preset.size.clone(),
        }
    }
}

// Empty strings count as absent
fn explicit_bound(bound: Option<&String>) -> Option<String> {
    bound.filter(|raw| !raw.is_empty()).cloned()
}

/// Resolve a preset with the default fluid typography options
pub fn resolve_font_size(preset: &FontSizePreset, fluid_enabled: bool) -> String {
    FluidFontSizeResolver::default().resolve(preset, fluid_enabled)
}
