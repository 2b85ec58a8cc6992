use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wintheme", version, about = "Inspect and validate launcher window themes")]
pub struct Cli {
    /// Configuration file (defaults to ~/.emulationstation/wintheme.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to scan for theme files
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Theme to activate, overriding the configured one
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered theme names, marking the active one
    List,
    /// Print a theme (the active theme when no name is given)
    Show { name: Option<String> },
    /// Load a single theme file and report problems
    Check { file: PathBuf },
}
