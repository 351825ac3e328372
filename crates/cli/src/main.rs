//! `campus`: search a course catalog from the command line.
//!
//! ```text
//! campus --catalog data/courses.json alg
//! campus --catalog data/courses.json --config data/campus.toml --fields name,code
//! campus --catalog data/courses.json --history ~/.campus_history
//! ```
//!
//! With a query argument, prints the matches and exits. Without one, reads
//! queries line by line and prints the matches for each, like a search bar.
//! `--history` keeps the interactive query history in a file across runs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use campus::{Campus, CampusConfig, FieldSet, StyledCourse};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "campus", version, about = "Search a course catalog")]
struct Cli {
    /// Catalog JSON file (array of course records)
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,

    /// Configuration TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated searchable fields, overriding the configuration
    #[arg(long, value_name = "FIELDS", value_parser = parse_fields)]
    fields: Option<FieldSet>,

    /// File to load and save interactive query history
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Query text; omit to read queries interactively
    query: Option<String>,
}

fn parse_fields(list: &str) -> std::result::Result<FieldSet, String> {
    FieldSet::parse_list(list).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CampusConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CampusConfig::default(),
    };
    if let Some(fields) = cli.fields {
        config.search.fields = fields;
    }

    let campus = Campus::open(&cli.catalog, &config)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    match cli.query {
        Some(query) => print_hits(&mut io::stdout().lock(), &campus.search(query)),
        None => interactive(&campus, cli.history.as_deref()),
    }
}

fn interactive(campus: &Campus, history: Option<&Path>) -> Result<()> {
    let mut editor = open_editor(history)?;
    loop {
        match editor.readline("search> ") {
            Ok(line) => {
                editor.add_history_entry(line.as_str())?;
                let hits = campus.search(line);
                print_hits(&mut io::stdout().lock(), &hits)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = history {
        editor
            .save_history(path)
            .with_context(|| format!("saving history {}", path.display()))?;
    }
    Ok(())
}

/// Line editor with `history` loaded, if given; a missing file starts empty
fn open_editor(history: Option<&Path>) -> Result<DefaultEditor> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = history {
        match editor.load_history(path) {
            Ok(()) => {}
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no history file yet");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("loading history {}", path.display()))
            }
        }
    }
    Ok(editor)
}

fn print_hits(out: &mut impl Write, hits: &[StyledCourse<'_>]) -> Result<()> {
    if hits.is_empty() {
        writeln!(out, "(no matching courses)")?;
        return Ok(());
    }
    for hit in hits {
        writeln!(out, "{}", format_hit(hit))?;
    }
    Ok(())
}

fn format_hit(hit: &StyledCourse<'_>) -> String {
    fn or_dash(s: &str) -> &str {
        if s.is_empty() {
            "-"
        } else {
            s
        }
    }
    format!(
        "{:<10}  {:<12}  {}  [{} {} {}]",
        or_dash(hit.course.code()),
        or_dash(hit.course.semester()),
        hit.course.name(),
        hit.course.category(),
        hit.style.color,
        hit.style.icon
    )
}
