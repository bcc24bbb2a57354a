//! Command-line front end
//!
//! Owns a `SearchState`, feeds it the parsed arguments and writes the
//! requested view of the results.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{debug, warn};
use serde::Serialize;

use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::error::TextSwapError;
use crate::highlight::Highlighter;
use crate::search::{Match, SearchOptions};
use crate::session::SearchState;
use crate::stats::TextStats;
use crate::text_utils::{Language, detect_language, format_number};

/// What to print on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markup with every match wrapped in a highlight span
    Highlighted,
    /// Text with every match replaced
    Modified,
    /// Number of matches only
    Count,
    /// Everything as a JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "textswap",
    version,
    about = "Find and replace text with highlighted match previews"
)]
pub struct Cli {
    /// File to read (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Literal text to search for
    #[arg(short, long)]
    pub find: String,

    /// Replacement text (may be empty to delete matches)
    #[arg(short, long)]
    pub replace: Option<String>,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(short = 'w', long)]
    pub whole_word: bool,

    /// Output format [default: modified with --replace, highlighted otherwise]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print text statistics on stderr
    #[arg(long)]
    pub stats: bool,

    /// Copy the modified text to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Config file (defaults to ~/.config/textswap/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags switch modifiers on in addition to the config defaults
    pub fn search_options(&self, config: &Config) -> SearchOptions {
        let defaults = config.search.options();
        SearchOptions::new(
            self.case_sensitive || defaults.case_sensitive,
            self.whole_word || defaults.whole_word,
        )
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(if self.replace.is_some() {
            OutputFormat::Modified
        } else {
            OutputFormat::Highlighted
        })
    }
}

#[derive(Debug, Serialize)]
struct StatsReport {
    #[serde(flatten)]
    counts: TextStats,
    language: Language,
}

impl StatsReport {
    fn new(text: &str, counts: TextStats) -> Self {
        Self {
            counts,
            language: detect_language(text),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    match_count: usize,
    matches: &'a [Match],
    highlighted: &'a str,
    modified: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<StatsReport>,
}

/// Run one search over `text` and write the results.
///
/// Results go to `out`; stats and clipboard notices go to `err`.
pub fn run(
    cli: &Cli,
    text: &str,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), TextSwapError> {
    let mut state = SearchState::with_highlighter(Highlighter::new(config.highlight.class.as_str()));
    state.set_text(text);
    state.set_search_term(cli.find.as_str());
    state.set_replace_term(cli.replace.clone());
    state.set_options(cli.search_options(config));
    state.search();

    let format = cli.output_format();
    debug!("Writing {:?} output", format);

    match format {
        OutputFormat::Highlighted => out.write_all(state.highlighted_text().as_bytes())?,
        OutputFormat::Modified => out.write_all(state.modified_text().as_bytes())?,
        OutputFormat::Count => writeln!(out, "{}", state.matches().len())?,
        OutputFormat::Json => {
            let report = Report {
                match_count: state.matches().len(),
                matches: state.matches(),
                highlighted: state.highlighted_text(),
                modified: state.modified_text(),
                stats: cli
                    .stats
                    .then(|| StatsReport::new(state.original_text(), state.stats())),
            };
            serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if cli.stats && format != OutputFormat::Json {
        write_stats(err, &StatsReport::new(state.original_text(), state.stats()))?;
    }

    if cli.copy {
        export_modified(&state, config, err)?;
    }

    Ok(())
}

fn write_stats(err: &mut impl Write, report: &StatsReport) -> io::Result<()> {
    let counts = &report.counts;
    writeln!(err, "Characters: {}", format_number(counts.characters as u64))?;
    writeln!(
        err,
        "Characters (no spaces): {}",
        format_number(counts.characters_no_spaces as u64)
    )?;
    writeln!(err, "Words: {}", format_number(counts.words as u64))?;
    writeln!(err, "Lines: {}", format_number(counts.lines as u64))?;
    writeln!(err, "Paragraphs: {}", format_number(counts.paragraphs as u64))?;
    writeln!(err, "Language: {}", report.language)
}

/// Clipboard failures are reported but never fail the run.
///
/// `err` doubles as the terminal stream for OSC 52 so stdout stays clean.
fn export_modified(state: &SearchState, config: &Config, err: &mut impl Write) -> io::Result<()> {
    if !state.has_changes() {
        return writeln!(err, "Nothing to copy: text unchanged");
    }

    match copy_to_clipboard(state.modified_text(), config.clipboard.backend, err) {
        Ok(()) => writeln!(err, "Copied modified text to clipboard"),
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            writeln!(err, "warning: {}", e)
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
