//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use clap_complete::Shell;

/// Dump the machine's CPU topology (package -> core -> processor) as a tree
#[derive(Parser, Debug)]
#[command(name = "cputree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Topology source file ("-" reads stdin)
    #[arg(
        short,
        long,
        default_value = "/proc/cpuinfo",
        value_hint = ValueHint::FilePath
    )]
    pub file: PathBuf,

    /// Emit the tree as a nested JSON document instead of an ASCII drawing
    #[arg(long)]
    pub json: bool,

    /// Indent the JSON output (implies --json)
    #[arg(long)]
    pub pretty: bool,

    /// Sibling ordering in the output
    #[arg(short, long, value_enum, default_value_t = SortOrder::Value)]
    pub sort: SortOrder,

    /// Enable debug logging. Multiple flags (-d -d) increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print version information
    #[arg(long)]
    pub info: bool,
}

/// How same-depth siblings are ordered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by the numeric id in each label
    Value,
    /// Lexicographic by full label
    Label,
}
