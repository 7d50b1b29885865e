//! # sdlint CLI Entry Point
//!
//! Loads the vocabulary snapshot and the document, runs validation, prints
//! the report. The document must already be in expanded JSON-LD form —
//! expansion itself is not this tool's job.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use sdlint_cli::report;
use sdlint_graph::SchemaGraph;
use sdlint_validate::validate_document;

/// Structured-data linter — validates expanded JSON-LD against schema.org.
///
/// Reports every object property that is not valid for the schema.org
/// type(s) its node declares, accounting for type inheritance. A non-zero
/// exit status means findings were reported, not that the linter failed.
#[derive(Parser, Debug)]
#[command(name = "sdlint", version, about)]
struct Cli {
    /// Path to the expanded JSON-LD document to validate.
    document: PathBuf,

    /// Path to the schema.org vocabulary snapshot.
    #[arg(long, default_value = "data/schemaorg.json")]
    graph: PathBuf,

    /// Emit findings as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("sdlint: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one validation pass; `Ok(true)` means no findings.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let graph = SchemaGraph::from_path(&cli.graph)
        .with_context(|| format!("loading vocabulary snapshot {}", cli.graph.display()))?;
    tracing::debug!(
        types = graph.type_count(),
        properties = graph.property_count(),
        "vocabulary snapshot loaded"
    );

    let text = std::fs::read_to_string(&cli.document)
        .with_context(|| format!("reading document {}", cli.document.display()))?;
    let document: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing document {}", cli.document.display()))?;

    let errors = validate_document(&graph, Some(&document));
    tracing::debug!(findings = errors.len(), "validation finished");

    if cli.json {
        println!("{}", report::render_json(&errors)?);
    } else {
        println!("{}", report::render_text(&errors));
    }
    Ok(errors.is_empty())
}
