use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wirefix::{
    ExportFormat, PipelineError, WirefixConfig, export, fallback_wireframe_with, flatten_with,
    process_raw_with_configs,
};

#[derive(Parser)]
#[command(
    name = "wirefix",
    about = "Recover, validate and normalize wireframe JSON produced by a language model",
    version
)]
struct Cli {
    /// File holding the raw model output (reads stdin when omitted)
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Emit the flattened design-tool form (same as `--format design`)
    #[arg(long)]
    flat: bool,

    /// Print only the validation result of the recovered payload
    #[arg(long)]
    validate_only: bool,

    /// Serve a fallback wireframe built from this description when nothing
    /// can be recovered
    #[arg(long)]
    fallback: Option<String>,

    /// Log as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
    React,
    Design,
}

impl From<Format> for ExportFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Json => ExportFormat::Json,
            Format::Html => ExportFormat::Html,
            Format::React => ExportFormat::React,
            Format::Design => ExportFormat::DesignTool,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "wirefix_failed");
            eprintln!("wirefix: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => WirefixConfig::from_file(path)?,
        None => WirefixConfig::default(),
    };
    let raw = read_input(cli.input.as_ref())?;

    let processed = match process_raw_with_configs(
        &raw,
        &config.recover,
        &config.validate,
        &config.normalize,
    ) {
        Ok(processed) => processed,
        Err(err) => match (&cli.fallback, err.wants_fallback()) {
            (Some(description), true) => {
                info!(error = %err, "serving_fallback");
                fallback_wireframe_with(description, &config.validate, &config.normalize)
            }
            _ => return Err(err.into()),
        },
    };

    if cli.validate_only {
        println!("{}", serde_json::to_string_pretty(&processed.validation)?);
        return Ok(());
    }

    let format = if cli.flat {
        ExportFormat::DesignTool
    } else {
        ExportFormat::from(cli.format)
    };
    let rendered = match format {
        ExportFormat::DesignTool => {
            let flat = flatten_with(&processed.document, &config.normalize);
            serde_json::to_string_pretty(&flat).map_err(|e| PipelineError::Export(e.to_string()))?
        }
        other => export(&processed.document, other)?.body,
    };
    println!("{rendered}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
