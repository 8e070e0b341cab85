use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crab_nebula_lib::corpus::{read_corpus, read_stdin, write_report};
use crab_nebula_lib::output::{serialize_signatures, to_report};
use crab_nebula_lib::{induce_signatures, CrabConfig, Induction, Vocabulary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crab-nebula",
    about = "Induce morphological signatures from a text corpus"
)]
struct Cli {
    /// Corpus file (UTF-8). If omitted, reads from stdin.
    input: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shortest protostem to consider, in characters [default: 3].
    #[arg(long)]
    min_stem_length: Option<usize>,

    /// Report width in columns [default: 80].
    #[arg(long)]
    width: Option<usize>,

    /// Output stage counts and signatures as JSON.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// JSON configuration file. Command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log pipeline stages.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let start = Instant::now();
    let config = load_config(&cli)?;

    // Nothing is induced or written unless the whole input was read.
    let text = match cli.input {
        Some(ref path) => read_corpus(path)?,
        None => read_stdin()?,
    };
    let vocabulary = Vocabulary::from_text(&text);
    let induction = induce_signatures(&vocabulary, &config.induction);
    let rendered = render(&induction, &vocabulary, &config, &cli)?;

    match cli.output {
        Some(ref path) => write_report(path, &rendered)?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("failed to write report to stdout")?,
    }

    info!(
        "{} words processed in {:.2} secs",
        vocabulary.token_count(),
        start.elapsed().as_secs_f64()
    );
    info!(
        "{} word types, {} signatures",
        vocabulary.len(),
        induction.signatures.len()
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// File settings first, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<CrabConfig> {
    let mut config = match cli.config {
        Some(ref path) => CrabConfig::from_file(path)?,
        None => CrabConfig::default(),
    };
    if let Some(min) = cli.min_stem_length {
        config.induction.min_stem_length = min;
    }
    if let Some(width) = cli.width {
        config.report.width = width;
    }
    config.validate()?;
    Ok(config)
}

fn render(
    induction: &Induction,
    vocabulary: &Vocabulary,
    config: &CrabConfig,
    cli: &Cli,
) -> anyhow::Result<String> {
    if !cli.json {
        return Ok(serialize_signatures(&induction.signatures, &config.report));
    }

    let report = to_report(induction, vocabulary);
    let mut json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("JSON serialization failed")?;
    json.push('\n');
    Ok(json)
}
