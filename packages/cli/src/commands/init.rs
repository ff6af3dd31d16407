use crate::config::default_settings_path;
use anyhow::Result;
use blockprint_common::{SiteSettings, DEFAULT_SETTINGS_NAME};
use clap::Args;
use colored::Colorize;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Enable fluid typography in the generated settings
    #[arg(long)]
    pub fluid: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = default_settings_path(cwd);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_SETTINGS_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut settings = SiteSettings::default();
    settings.typography.fluid = args.fluid;

    let settings_json = serde_json::to_string_pretty(&settings)?;
    fs::write(&config_path, settings_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_SETTINGS_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune typography and discussion settings", DEFAULT_SETTINGS_NAME);
    println!("  2. Run: blockprint font-size 28px");

    Ok(())
}
