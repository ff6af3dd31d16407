use crate::fluid::{FluidFontSizeResolver, FontSizePreset};
use crate::supports::BlockAttributes;
use regex::{NoExpand, Regex};
use tracing::{debug, instrument, warn};

/// Replace the first `font-size:<value>` declaration in `markup` with
/// `font-size:<resolved>;`.
///
/// Whitespace around the colon and before an optional trailing `;` is
/// absorbed by the match. Everything else, including later duplicates, is
/// left untouched. This is a literal text substitution; the markup does not
/// need to be well formed.
pub fn substitute(markup: &str, font_size_value: &str, resolved: &str) -> String {
    let pattern = format!(r"font-size\s*:\s*{}\s*;?", regex::escape(font_size_value));

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            warn!(error = %err, value = font_size_value, "Cannot build font-size pattern");
            return markup.to_string();
        }
    };

    let replacement = format!("font-size:{};", resolved);
    re.replacen(markup, 1, NoExpand(&replacement)).into_owned()
}

/// Rewrite a block's inline custom font size into its fluid equivalent
#[instrument(skip(markup, attributes), fields(font_size = attributes.custom_font_size()))]
pub fn render_typography_support(
    markup: &str,
    attributes: &BlockAttributes,
    fluid_enabled: bool,
) -> String {
    render_typography_support_with(&FluidFontSizeResolver::default(), markup, attributes, fluid_enabled)
}

/// Same as [`render_typography_support`] with explicit resolver options
pub fn render_typography_support_with(
    resolver: &FluidFontSizeResolver,
    markup: &str,
    attributes: &BlockAttributes,
    fluid_enabled: bool,
) -> String {
    let Some(custom_font_size) = attributes.custom_font_size() else {
        return markup.to_string();
    };

    let resolved = resolver.resolve(&FontSizePreset::new(custom_font_size), fluid_enabled);
    if resolved.is_empty() || resolved == custom_font_size {
        debug!("Font size unchanged, leaving markup as is");
        return markup.to_string();
    }

    substitute(markup, custom_font_size, &resolved)
}
