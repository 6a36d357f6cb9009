use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the `lexa` binary.
#[derive(Parser, Debug)]
#[command(
    name = "lexa",
    version,
    about = "Lexical analyzer for a small C-like language"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a file, standard input, or the built-in sample.
    Lex(LexArgs),
    /// Print the built-in sample program.
    Sample,
    /// Describe each token kind and the fixed vocabulary.
    Guide,
}

#[derive(Args, Debug)]
pub struct LexArgs {
    /// Source file to analyze. Use `-` or omit to read standard input.
    #[arg(conflicts_with = "sample")]
    pub path: Option<PathBuf>,

    /// Analyze the built-in sample program.
    #[arg(long)]
    pub sample: bool,

    /// What to print.
    #[arg(long, value_enum, default_value_t = View::Table)]
    pub view: View,

    /// When to color output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Report strings, numbers, and characters the scanner recovered from.
    #[arg(long)]
    pub diagnostics: bool,

    /// Append per-kind token counts.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Token table: index, text, kind, quoted value, line.
    Table,
    /// Color-annotated reconstruction of the source.
    Preview,
    /// Table followed by preview.
    Both,
}

impl View {
    pub fn shows_table(self) -> bool {
        matches!(self, View::Table | View::Both)
    }

    pub fn shows_preview(self) -> bool {
        matches!(self, View::Preview | View::Both)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and the environment allows it.
    Auto,
    Always,
    Never,
}

/// Log level requested on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose(u8),
}

impl CliArgs {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose == 0 {
            Verbosity::Normal
        } else {
            Verbosity::Verbose(self.verbose)
        }
    }
}
