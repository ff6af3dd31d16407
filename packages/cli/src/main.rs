mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    comments, font_size, init, typography, CommentsArgs, FontSizeArgs, InitArgs, TypographyArgs,
};

/// Blockprint CLI - server-side rendering for editor blocks
#[derive(Parser, Debug)]
#[command(name = "blockprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default blockprint.config.json
    Init(InitArgs),

    /// Resolve a preset font size into a static or fluid value
    FontSize(FontSizeArgs),

    /// Apply typography support to block fixtures
    Typography(TypographyArgs),

    /// Render a nested comment thread
    Comments(CommentsArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::FontSize(args) => font_size(args, &cwd),
        Command::Typography(args) => typography(args, &cwd),
        Command::Comments(args) => comments(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
