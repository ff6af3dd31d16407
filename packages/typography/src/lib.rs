pub mod case;
pub mod fluid;
pub mod inline_style;
pub mod supports;
pub mod value;

pub use case::to_kebab_case;
pub use fluid::{
    compute_fluid_value, resolve_font_size, Fluid, FluidBounds, FluidClamp,
    FluidFontSizeResolver, FluidTypographyOptions, FontSizePreset,
};
pub use inline_style::{render_typography_support, render_typography_support_with, substitute};
pub use supports::{
    apply_typography_support, inline_style_declaration, BlockAttributes, BlockStyle,
    BlockSupportAttributes, SkipSerialization, TypographyFeature, TypographyStyle,
    TypographySupports,
};
pub use value::{format_number, round_to, LengthUnit, ParsedValue, ROOT_FONT_SIZE_PX};
