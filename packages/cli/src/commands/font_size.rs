use crate::config::load_settings;
use anyhow::Result;
use blockprint_typography::{Fluid, FluidBounds, FluidFontSizeResolver, FontSizePreset};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FontSizeArgs {
    /// Preset font size, e.g. 28px or 1.75rem
    pub size: String,

    /// Explicit fluid minimum
    #[arg(long)]
    pub min: Option<String>,

    /// Explicit fluid maximum
    #[arg(long)]
    pub max: Option<String>,

    /// Opt this preset out of fluid typography
    #[arg(long = "static-size")]
    pub static_size: bool,

    /// Force fluid typography on, regardless of settings
    #[arg(long, conflicts_with = "no_fluid")]
    pub fluid: bool,

    /// Force fluid typography off, regardless of settings
    #[arg(long)]
    pub no_fluid: bool,

    /// Settings file (defaults to blockprint.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn font_size(args: FontSizeArgs, cwd: &str) -> Result<()> {
    let settings = load_settings(cwd, args.config.as_deref())?;
    let fluid_enabled = fluid_toggle(&args, settings.typography.fluid);

    let preset = FontSizePreset::new(args.size.clone()).with_fluid(preset_fluid(&args));
    let value = FluidFontSizeResolver::default().resolve(&preset, fluid_enabled);

    println!("{}", value);
    Ok(())
}

fn fluid_toggle(args: &FontSizeArgs, from_settings: bool) -> bool {
    if args.fluid {
        true
    } else if args.no_fluid {
        false
    } else {
        from_settings
    }
}

fn preset_fluid(args: &FontSizeArgs) -> Fluid {
    if args.static_size {
        Fluid::Disabled
    } else if args.min.is_some() || args.max.is_some() {
        Fluid::Bounds(FluidBounds {
            min: args.min.clone(),
            max: args.max.clone(),
        })
    } else {
        Fluid::Default
    }
}
