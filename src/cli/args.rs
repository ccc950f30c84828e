// src/cli/args.rs
use clap::Parser;

/// Pre-commit guard for folders with Python sources but no `__init__.py`.
#[derive(Debug, Parser)]
#[command(name = "initcheck", version, about = "Detects tracked folders with Python sources but no __init__.py")]
pub struct Cli {
    /// Create the missing marker files instead of reporting them
    #[arg(long)]
    pub create: bool,

    /// Stage created marker files with git (requires --create)
    #[arg(long)]
    pub track: bool,

    /// Treat the repository root itself as a package candidate
    #[arg(long)]
    pub expect_root_init: bool,

    /// Comma-separated folders to exclude from the check
    #[arg(long, value_name = "FOLDERS")]
    pub skip_folders: Option<String>,

    /// Comma-separated roots under which the check applies
    #[arg(long, value_name = "FOLDERS")]
    pub python_folders: Option<String>,

    /// Emit the result as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Diagnostic output on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
