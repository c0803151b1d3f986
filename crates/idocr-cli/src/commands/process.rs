//! Process command - extract fields and judge one capture.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use idocr_core::quality::CaptureDecision;
use idocr_core::report;
use idocr_core::{DocumentFields, FieldParser, QualityVerdict};

use super::{build_pipeline, load_config, read_recognition, verdict_label};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (recognition result JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
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
    /// JSON output
    Json,
    /// Plain text summary
    Text,
    /// Full report (field summary + recognition dump)
    Report,
}

/// One processed capture, as serialized to JSON.
#[derive(Serialize)]
struct ScanRecord<'a> {
    fields: &'a DocumentFields,
    verdict: &'a QualityVerdict,
    decision: CaptureDecision,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let result = read_recognition(&args.input)?;
    let (parser, evaluator) = build_pipeline(&config, args.threshold, args.validate_cpf);

    let fields = parser.parse_result(&result);
    let verdict = evaluator.evaluate(&result);

    let output = match args.format {
        OutputFormat::Json => {
            let record = ScanRecord {
                fields: &fields,
                verdict: &verdict,
                decision: verdict.decision(),
            };
            serde_json::to_string_pretty(&record)?
        }
        OutputFormat::Text => render_text(&fields, &verdict),
        OutputFormat::Report => {
            let mut out = report::render(&fields, &result);
            out.push('\n');
            out.push_str(&render_verdict(&verdict));
            out
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn render_text(fields: &DocumentFields, verdict: &QualityVerdict) -> String {
    let field = |value: &Option<String>| -> String {
        match value {
            Some(v) => v.clone(),
            None => style("not found").dim().to_string(),
        }
    };

    format!(
        "name:        {}\ncpf:         {}\naffiliation: {}\n{}",
        field(&fields.name),
        field(&fields.cpf),
        field(&fields.affiliation),
        render_verdict(verdict),
    )
}

fn render_verdict(verdict: &QualityVerdict) -> String {
    let mean = match verdict.mean_confidence() {
        Some(mean) => format!(" (mean confidence {mean:.2})"),
        None => String::new(),
    };

    let decision = match verdict.decision() {
        CaptureDecision::Accept => style("accept").green(),
        CaptureDecision::Retake => style("retake").red(),
    };

    format!(
        "verdict:     {}{}\ndecision:    {}",
        verdict_label(verdict),
        mean,
        decision
    )
}
