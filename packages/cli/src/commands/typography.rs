use crate::config::load_settings;
use anyhow::{anyhow, Context, Result};
use blockprint_typography::{
    apply_typography_support, render_typography_support, BlockAttributes,
    BlockSupportAttributes, TypographySupports,
};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct TypographyArgs {
    /// Block fixture (.json) or a directory of fixtures
    pub path: PathBuf,

    /// Force fluid typography on, regardless of settings
    #[arg(long, conflicts_with = "no_fluid")]
    pub fluid: bool,

    /// Force fluid typography off, regardless of settings
    #[arg(long)]
    pub no_fluid: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Settings file (defaults to blockprint.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// A rendered block plus the attributes it was rendered from
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFixture {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub attributes: BlockAttributes,

    #[serde(default)]
    pub supports: TypographySupports,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockOutput {
    pub attributes: BlockSupportAttributes,
    pub content: String,
}

pub fn process_fixture(fixture: &BlockFixture, fluid_enabled: bool) -> BlockOutput {
    BlockOutput {
        attributes: apply_typography_support(&fixture.supports, &fixture.attributes),
        content: render_typography_support(&fixture.content, &fixture.attributes, fluid_enabled),
    }
}

pub fn typography(args: TypographyArgs, cwd: &str) -> Result<()> {
    let settings = load_settings(cwd, args.config.as_deref())?;
    let fluid_enabled = if args.fluid {
        true
    } else if args.no_fluid {
        false
    } else {
        settings.typography.fluid
    };

    let path = Path::new(cwd).join(&args.path);
    let fixtures = if path.is_file() {
        vec![path]
    } else if path.is_dir() {
        find_fixture_files(&path)
    } else {
        return Err(anyhow!("Input path does not exist: {}", path.display()));
    };

    if fixtures.is_empty() {
        println!("{}", "⚠️  No block fixtures found".yellow());
        return Ok(());
    }

    let mut error_count = 0;
    for file in &fixtures {
        match process_file(file, fluid_enabled) {
            Ok(output) if args.json => {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Ok(output) => print_output(file, &output),
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {}", "✗".red(), file.display(), e.to_string().red());
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!("{} of {} fixtures failed", error_count, fixtures.len()));
    }

    Ok(())
}

fn process_file(file: &Path, fluid_enabled: bool) -> Result<BlockOutput> {
    let source = fs::read_to_string(file)?;
    let fixture: BlockFixture = serde_json::from_str(&source)
        .with_context(|| format!("Invalid block fixture {}", file.display()))?;
    Ok(process_fixture(&fixture, fluid_enabled))
}

fn print_output(file: &Path, output: &BlockOutput) {
    println!("{} {}", "✓".green(), file.display());
    if let Some(class) = &output.attributes.class {
        println!("  {} {}", "class:".dimmed(), class);
    }
    if let Some(style) = &output.attributes.style {
        println!("  {} {}", "style:".dimmed(), style);
    }
    println!("  {}", output.content);
}

fn find_fixture_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();

    files.sort();
    files
}
