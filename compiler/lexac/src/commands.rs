//! Subcommand implementations.
//!
//! Each command builds its full output as a string and writes it once;
//! the `lex` pipeline is split so the report can be produced without
//! touching stdout.

use std::io::{self, IsTerminal, Write};

use lexa_lexer::{tokenize, tokenize_with_diagnostics};
use tracing::{debug, info};

use crate::args::{CliArgs, ColorMode, Command, LexArgs};
use crate::error::CliError;
use crate::guide::render_guide;
use crate::input::InputSource;
use crate::render::{render_report, render_warnings, RenderOptions};
use crate::sample::SAMPLE_SOURCE;

/// Run the parsed command line.
pub fn run(args: &CliArgs) -> Result<(), CliError> {
    match &args.command {
        Command::Lex(lex) => lex_command(lex),
        Command::Sample => write_stdout(SAMPLE_SOURCE),
        Command::Guide => write_stdout(&render_guide()),
    }
}

/// Resolved `lex` options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub render: RenderOptions,
    pub diagnostics: bool,
}

impl LexOptions {
    pub fn from_args(args: &LexArgs, color: bool) -> Self {
        LexOptions {
            render: RenderOptions {
                table: args.view.shows_table(),
                preview: args.view.shows_preview(),
                summary: args.summary,
                color,
            },
            diagnostics: args.diagnostics,
        }
    }
}

/// Text produced by one `lex` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    /// Table, preview and summary.
    pub stdout: String,
    /// Warning lines; empty unless diagnostics were requested.
    pub stderr: String,
}

/// Scan `source` and render everything `options` asks for.
pub fn lex_report(source: &str, options: &LexOptions) -> LexReport {
    let (tokens, warnings) = if options.diagnostics {
        tokenize_with_diagnostics(source)
    } else {
        (tokenize(source), Vec::new())
    };
    info!(
        tokens = tokens.len(),
        lines = tokens.lines().count(),
        warnings = warnings.len(),
        "scanned source"
    );
    LexReport {
        stdout: render_report(&tokens, &options.render),
        stderr: render_warnings(&warnings),
    }
}

/// Decide whether to emit color and pin `colored`'s global switch to match.
///
/// `auto` colors only when stdout is a terminal and the environment
/// (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`) allows it.
pub fn resolve_color(mode: ColorMode) -> bool {
    let color = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            io::stdout().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
        }
    };
    colored::control::set_override(color);
    debug!(?mode, color, "resolved color mode");
    color
}

fn lex_command(args: &LexArgs) -> Result<(), CliError> {
    let input = InputSource::from_args(args.path.as_deref(), args.sample);
    let source = input.load()?;
    let options = LexOptions::from_args(args, resolve_color(args.color));

    let report = lex_report(&source.text, &options);
    write_stdout(&report.stdout)?;
    if !report.stderr.is_empty() {
        io::stderr()
            .lock()
            .write_all(report.stderr.as_bytes())
            .map_err(CliError::Write)?;
    }
    Ok(())
}

fn write_stdout(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(CliError::Write)
}
