use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dirtree - Render a directory as a tree diagram
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a directory tree
    Render(RenderArgs),

    /// Prompt for the directory, extensions and output file
    Interactive,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Root directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only list files with these extensions (repeatable, comma-separated)
    #[arg(short, long = "ext", value_delimiter = ',', value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Match extensions case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Write the tree to a file instead of the console
    #[arg(short, long, value_name = "FILE", conflicts_with = "json")]
    pub output: Option<PathBuf>,

    /// Output lines as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Don't print the closing "Done" line
    #[arg(long)]
    pub no_end_marker: bool,
}
