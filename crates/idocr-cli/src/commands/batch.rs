//! Batch command - process many captures, summarize to CSV or JSON.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::warn;

use idocr_core::quality::CaptureDecision;
use idocr_core::{DocumentFields, FieldParser, QualityVerdict};

use super::{build_pipeline, load_config, read_recognition, verdict_label};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input files (e.g. "captures/*.json")
    #[arg(required = true)]
    pattern: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Legibility threshold override (0.0 - 1.0)
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Reject CPF candidates with a bad check digit
    #[arg(long)]
    validate_cpf: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV summary, one row per capture
    Csv,
    /// JSON array
    Json,
}

/// One row of the batch summary.
#[derive(Serialize)]
struct BatchRow {
    file: String,
    name: Option<String>,
    cpf: Option<String>,
    affiliation: Option<String>,
    verdict: &'static str,
    mean_confidence: Option<f32>,
    decision: CaptureDecision,
}

impl BatchRow {
    fn new(file: String, fields: DocumentFields, verdict: QualityVerdict) -> Self {
        Self {
            file,
            name: fields.name,
            cpf: fields.cpf,
            affiliation: fields.affiliation,
            verdict: verdict_label(&verdict),
            mean_confidence: verdict.mean_confidence(),
            decision: verdict.decision(),
        }
    }
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let (parser, evaluator) = build_pipeline(&config, args.threshold, args.validate_cpf);

    let files: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut rows = Vec::with_capacity(files.len());
    let mut failures = 0usize;

    for file in &files {
        pb.set_message(file.display().to_string());

        match read_recognition(file) {
            Ok(result) => {
                let fields = parser.parse_result(&result);
                let verdict = evaluator.evaluate(&result);
                rows.push(BatchRow::new(file.display().to_string(), fields, verdict));
            }
            Err(err) => {
                warn!("skipping {}: {err:#}", file.display());
                failures += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let output = match args.format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in &rows {
                writer.serialize(row)?;
            }
            String::from_utf8(writer.into_inner()?)?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => print!("{output}"),
    }

    let accepted = rows
        .iter()
        .filter(|r| r.decision == CaptureDecision::Accept)
        .count();
    eprintln!(
        "{} {} processed, {} accepted, {} retake, {} unreadable",
        style("Done:").green().bold(),
        rows.len(),
        accepted,
        rows.len() - accepted,
        failures
    );

    Ok(())
}
