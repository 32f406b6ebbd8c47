//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sheet-forge")]
#[command(about = "Convert game design sheets into engine config JSON", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output file shared by every converter.
#[derive(Args, Clone)]
pub(crate) struct OutputArgs {
    /// File to write
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert the artifact item sheet, with budgeted set descriptions
    Artifacts {
        /// Item sheet (CSV)
        items: PathBuf,

        /// Set sheet (CSV)
        sets: PathBuf,

        #[command(flatten)]
        out: OutputArgs,

        /// Struct id of each artifact entry
        #[arg(long)]
        struct_id: Option<String>,

        /// Key of the first artifact
        #[arg(long)]
        start_index: Option<i64>,

        /// Description budget in characters (0 disables the limit)
        #[arg(long, conflicts_with = "no_budget")]
        budget: Option<usize>,

        /// Never shorten descriptions
        #[arg(long)]
        no_budget: bool,

        /// Fail instead of warning when a description cannot fit its budget
        #[arg(long)]
        strict_budget: bool,
    },

    /// Convert the set sheet into the set requirement table
    ArtifactSets {
        /// Set sheet (CSV)
        sets: PathBuf,

        #[command(flatten)]
        out: OutputArgs,

        /// Struct id of each set entry
        #[arg(long)]
        struct_id: Option<String>,
    },

    /// Convert the monster spawn sheet
    Monsters {
        /// Monster sheet (CSV)
        input: PathBuf,

        #[command(flatten)]
        out: OutputArgs,

        /// Struct id of each monster entry
        #[arg(long)]
        struct_id: Option<String>,

        /// JSON indentation width
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Convert the monster intro sheet
    Intros {
        /// Intro sheet (CSV)
        input: PathBuf,

        #[command(flatten)]
        out: OutputArgs,

        /// Struct id of each intro entry
        #[arg(long)]
        struct_id: Option<String>,

        /// Entity id column
        #[arg(long)]
        id_col: Option<String>,

        /// Name column
        #[arg(long)]
        name_col: Option<String>,

        /// Intro text column
        #[arg(long)]
        desc_col: Option<String>,
    },

    /// Convert the upgrade trait sheet, expanding per-level texts
    Upgrades {
        /// Trait sheet (CSV)
        input: PathBuf,

        #[command(flatten)]
        out: OutputArgs,

        /// Struct id of each trait entry
        #[arg(long)]
        outer_struct_id: Option<String>,

        /// Struct id of each level entry
        #[arg(long)]
        inner_struct_id: Option<String>,

        /// Colour for per-level values (empty string disables colouring)
        #[arg(long)]
        alt_color: Option<String>,

        /// Don't start level texts with a line break
        #[arg(long)]
        no_prefix_newline: bool,
    },

    /// Dump set names and tier effects as plain text
    SetText {
        /// Set sheet (CSV)
        sets: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Dump item titles with their set summary as plain text
    ItemText {
        /// Single-set item sheet (CSV)
        items: PathBuf,

        /// Set sheet (CSV)
        sets: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Inspect converter settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where they came from
    Show,

    /// Print the default settings file path
    Path,
}
