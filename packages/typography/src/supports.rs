//! Typography block support: turning block attributes into the `class` and
//! `style` attributes of the rendered wrapper element.

use crate::case::to_kebab_case;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Typography features a block type can opt into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyFeature {
    FontSize,
    FontFamily,
    FontStyle,
    FontWeight,
    LineHeight,
    TextDecoration,
    TextTransform,
    LetterSpacing,
}

impl TypographyFeature {
    /// Serialization order of the generated attributes
    pub const ALL: [TypographyFeature; 8] = [
        TypographyFeature::FontSize,
        TypographyFeature::FontFamily,
        TypographyFeature::FontStyle,
        TypographyFeature::FontWeight,
        TypographyFeature::LineHeight,
        TypographyFeature::TextDecoration,
        TypographyFeature::TextTransform,
        TypographyFeature::LetterSpacing,
    ];

    /// Attribute key, as used in `skipSerialization` lists
    pub fn key(&self) -> &'static str {
        match self {
            TypographyFeature::FontSize => "fontSize",
            TypographyFeature::FontFamily => "fontFamily",
            TypographyFeature::FontStyle => "fontStyle",
            TypographyFeature::FontWeight => "fontWeight",
            TypographyFeature::LineHeight => "lineHeight",
            TypographyFeature::TextDecoration => "textDecoration",
            TypographyFeature::TextTransform => "textTransform",
            TypographyFeature::LetterSpacing => "letterSpacing",
        }
    }

    pub fn css_property(&self) -> &'static str {
        match self {
            TypographyFeature::FontSize => "font-size",
            TypographyFeature::FontFamily => "font-family",
            TypographyFeature::FontStyle => "font-style",
            TypographyFeature::FontWeight => "font-weight",
            TypographyFeature::LineHeight => "line-height",
            TypographyFeature::TextDecoration => "text-decoration",
            TypographyFeature::TextTransform => "text-transform",
            TypographyFeature::LetterSpacing => "letter-spacing",
        }
    }
}

/// Typography capabilities declared by a block type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySupports {
    #[serde(default)]
    pub font_size: bool,

    #[serde(default)]
    pub line_height: bool,

    #[serde(default, alias = "__experimentalFontFamily")]
    pub font_family: bool,

    #[serde(default, alias = "__experimentalFontStyle")]
    pub font_style: bool,

    #[serde(default, alias = "__experimentalFontWeight")]
    pub font_weight: bool,

    #[serde(default, alias = "__experimentalLetterSpacing")]
    pub letter_spacing: bool,

    #[serde(default, alias = "__experimentalTextDecoration")]
    pub text_decoration: bool,

    #[serde(default, alias = "__experimentalTextTransform")]
    pub text_transform: bool,

    #[serde(default, alias = "__experimentalSkipSerialization")]
    pub skip_serialization: SkipSerialization,
}

impl TypographySupports {
    pub fn supports(&self, feature: TypographyFeature) -> bool {
        match feature {
            TypographyFeature::FontSize => self.font_size,
            TypographyFeature::FontFamily => self.font_family,
            TypographyFeature::FontStyle => self.font_style,
            TypographyFeature::FontWeight => self.font_weight,
            TypographyFeature::LineHeight => self.line_height,
            TypographyFeature::TextDecoration => self.text_decoration,
            TypographyFeature::TextTransform => self.text_transform,
            TypographyFeature::LetterSpacing => self.letter_spacing,
        }
    }

    /// Supported and not skipped
    pub fn serializes(&self, feature: TypographyFeature) -> bool {
        self.supports(feature) && !self.skip_serialization.skips(feature)
    }
}

/// `true` skips every feature, a list skips the named ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipSerialization {
    All(bool),
    Features(Vec<String>),
}

impl Default for SkipSerialization {
    fn default() -> Self {
        SkipSerialization::All(false)
    }
}

impl SkipSerialization {
    pub fn skips(&self, feature: TypographyFeature) -> bool {
        match self {
            SkipSerialization::All(skip) => *skip,
            SkipSerialization::Features(features) => {
                features.iter().any(|name| name == feature.key())
            }
        }
    }
}

/// Typography-related block attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    /// Font size preset slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Font family preset slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(default)]
    pub style: BlockStyle,
}

impl BlockAttributes {
    /// Custom (non-preset) font size from `style.typography.fontSize`
    pub fn custom_font_size(&self) -> Option<&str> {
        self.style.typography.font_size.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    #[serde(default)]
    pub typography: TypographyStyle,
}

/// Custom values; numbers are accepted and kept as their JSON text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,

    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl TypographyStyle {
    pub fn get(&self, feature: TypographyFeature) -> Option<&str> {
        let value = match feature {
            TypographyFeature::FontSize => &self.font_size,
            TypographyFeature::FontFamily => &self.font_family,
            TypographyFeature::FontStyle => &self.font_style,
            TypographyFeature::FontWeight => &self.font_weight,
            TypographyFeature::LineHeight => &self.line_height,
            TypographyFeature::TextDecoration => &self.text_decoration,
            TypographyFeature::TextTransform => &self.text_transform,
            TypographyFeature::LetterSpacing => &self.letter_spacing,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Attributes to merge into the block wrapper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSupportAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl BlockSupportAttributes {
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.style.is_none()
    }
}

/// Build the typography classes and inline styles for a block
pub fn apply_typography_support(
    supports: &TypographySupports,
    attributes: &BlockAttributes,
) -> BlockSupportAttributes {
    let mut classes: Vec<String> = Vec::new();
    let mut styles: Vec<String> = Vec::new();

    for feature in TypographyFeature::ALL {
        if !supports.serializes(feature) {
            if supports.supports(feature) {
                debug!(feature = feature.key(), "Skipping typography serialization");
            }
            continue;
        }

        let preset_slug = match feature {
            TypographyFeature::FontSize => attributes.font_size.as_deref(),
            TypographyFeature::FontFamily => attributes.font_family.as_deref(),
            _ => None,
        };

        if let Some(slug) = preset_slug.filter(|slug| !slug.is_empty()) {
            classes.push(format!(
                "has-{}-{}",
                to_kebab_case(slug),
                feature.css_property()
            ));
        } else if let Some(value) = attributes.style.typography.get(feature) {
            styles.push(inline_style_declaration(feature.css_property(), value));
        }
    }

    BlockSupportAttributes {
        class: (!classes.is_empty()).then(|| classes.join(" ")),
        style: (!styles.is_empty()).then(|| styles.concat()),
    }
}

/// `property:value;`, expanding `var:preset|<property>|<slug>` references
/// into the preset custom property.
pub fn inline_style_declaration(css_property: &str, value: &str) -> String {
    let preset_prefix = format!("var:preset|{}|", css_property);

    match value.strip_prefix(&preset_prefix) {
        Some(_) => {
            let slug = value.rsplit('|').next().unwrap_or_default();
            format!(
                "{}:var(--wp--preset--{}--{});",
                css_property,
                css_property,
                to_kebab_case(slug)
            )
        }
        None => format!("{}:{};", css_property, value),
    }
}
