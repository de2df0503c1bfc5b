use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use escdecode_core::{
    ConfigOverrides, DecodeError, DecodedPacket, DecoderConfig, Segment, decode_csv_file,
};
use glob::glob;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Aggregation threshold used when neither a flag nor a config file sets one.
const CLI_DEFAULT_THRESHOLD_US: i64 = 10;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("ESCDECODE_BUILD_COMMIT"),
    "\nbuilt: ",
    env!("ESCDECODE_BUILD_DATE")
);

#[derive(Parser, Debug)]
#[command(name = "escdecode")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for EtherCAT slave controller SPI captures.",
    long_about = None,
    after_help = "Examples:\n  escdecode capture.csv\n  escdecode capture.csv -t 4 -i 0x0220 0x0000\n  escdecode 'captures/run*.csv' --format json"
)]
struct Cli {
    /// Path (or glob matching one file) to a logic-analyzer .csv export
    input: PathBuf,

    /// Maximum gap between samples of one packet, in microseconds
    #[arg(short = 't', long, value_parser = clap::value_parser!(i64).range(1..))]
    threshold: Option<i64>,

    /// Register addresses to suppress (0x/0o/0b prefixes or decimal)
    #[arg(short = 'i', long, num_args = 1.., value_parser = parse_address)]
    ignore_addrs: Option<Vec<u16>>,

    /// JSON decoder configuration; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors in text output
    #[arg(long)]
    no_color: bool,

    /// Exit with a non-zero code if any packet failed to decode
    #[arg(long)]
    strict: bool,

    /// Log verbosity on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cmd_decode(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Debug, Default)]
struct Summary {
    packets: u64,
    decoded: u64,
    failed: u64,
    suppressed: u64,
}

fn cmd_decode(cli: Cli) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&cli.input)?;
    validate_input_file(&resolved_input)?;
    let config = build_config(cli.config.as_ref(), cli.threshold, cli.ignore_addrs)?;

    let pipeline = decode_csv_file(&resolved_input, &config).map_err(|err| {
        CliError::new(
            format!("failed to open capture {}: {}", resolved_input.display(), err),
            Some("expected columns 'Time[ns]', '0:SPI: MISO data', '0:SPI: MOSI data'".to_string()),
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut summary = Summary::default();
    for outcome in pipeline {
        let outcome =
            outcome.with_context(|| format!("CSV decoding failed: {}", resolved_input.display()))?;
        summary.packets += 1;
        match &outcome {
            Ok(_) => summary.decoded += 1,
            Err(err) if err.is_silent() => summary.suppressed += 1,
            Err(_) => summary.failed += 1,
        }
        let written = match cli.format {
            OutputFormat::Text => write_text(&mut out, &outcome),
            OutputFormat::Json => write_json(&mut out, &outcome),
        };
        written.context("failed to write output")?;
    }
    out.flush().context("failed to write output")?;

    info!(
        packets = summary.packets,
        decoded = summary.decoded,
        failed = summary.failed,
        suppressed = summary.suppressed,
        "decode finished"
    );

    if cli.strict && summary.failed > 0 {
        return Err(CliError::new(
            format!("decode failures detected ({} packets)", summary.failed),
            Some("inspect the 'Failed to decode packet' lines above".to_string()),
        ));
    }
    Ok(())
}

fn build_config(
    path: Option<&PathBuf>,
    threshold: Option<i64>,
    ignore_addrs: Option<Vec<u16>>,
) -> Result<DecoderConfig, CliError> {
    let defaults = DecoderConfig {
        threshold_us: CLI_DEFAULT_THRESHOLD_US,
        ignore_addrs: BTreeSet::new(),
    };
    let file = match path {
        Some(path) => ConfigOverrides::from_json_file(path).map_err(|err| {
            CliError::new(
                format!("failed to load config {}: {}", path.display(), err),
                Some("expected JSON like {\"threshold_us\": 4, \"ignore_addrs\": [544]}".to_string()),
            )
        })?,
        None => ConfigOverrides::default(),
    };
    let flags = ConfigOverrides {
        threshold_us: threshold,
        ignore_addrs: ignore_addrs.map(|addrs| addrs.into_iter().collect()),
    };
    let config = flags.apply(file.apply(defaults));
    if config.threshold_us < 1 {
        return Err(CliError::new(
            format!("invalid threshold {} us", config.threshold_us),
            Some("threshold must be at least 1".to_string()),
        ));
    }
    Ok(config)
}

fn write_text(
    out: &mut impl Write,
    outcome: &Result<DecodedPacket, DecodeError>,
) -> io::Result<()> {
    match outcome {
        Ok(decoded) => {
            for segment in decoded.description.segments() {
                match segment {
                    Segment::Plain(text) => write!(out, "{}", text)?,
                    Segment::Flagged(text) => write!(out, "{}", text.red())?,
                }
            }
            writeln!(out)
        }
        Err(err) if err.is_silent() => Ok(()),
        Err(err) => writeln!(
            out,
            "{}",
            format!("Failed to decode packet. Reason: {}", err).red()
        ),
    }
}

fn write_json(
    out: &mut impl Write,
    outcome: &Result<DecodedPacket, DecodeError>,
) -> io::Result<()> {
    let value = match outcome {
        Ok(decoded) => serde_json::to_value(decoded)?,
        Err(err) if err.is_silent() => return Ok(()),
        Err(err) => serde_json::json!({
            "error": err.kind(),
            "reason": err.to_string(),
        }),
    };
    writeln!(out, "{}", value)
}

fn parse_address(raw: &str) -> Result<u16, String> {
    let text = raw.trim();
    let lower = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };
    u16::from_str_radix(digits, radix)
        .map_err(|err| format!("invalid register address '{}': {}", raw, err))
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .csv export from the logic analyzer".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .csv export from the logic analyzer".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .csv file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .csv file".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
