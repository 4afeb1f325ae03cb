use clap::{Parser, Subcommand, ValueEnum};
use scte35_cue::{
    CueCommand, CueGenerator, CueType, EncodeOptions, EncodedSection, GeneratorConfig,
    OverflowBitMode, Scte35Message, SpliceInfoSection, encode_section_with,
};
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scte35-cue")]
#[command(about = "Generate and encode SCTE-35 splice info sections")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a CUE-OUT, CUE-IN or CRASH-OUT splice insert
    Cue {
        /// Cue type: CUE-OUT, CUE-IN or CRASH-OUT
        cue_type: String,
        /// Splice event id; taken from the configured sequence when omitted
        #[arg(long)]
        event_id: Option<u32>,
        /// Break duration in seconds (CUE-OUT)
        #[arg(long)]
        duration: Option<f64>,
        /// Pre-roll in seconds (0-10)
        #[arg(long)]
        pre_roll: Option<f64>,
        /// Operator time as RFC 3339; defaults to now
        #[arg(long)]
        timestamp: Option<String>,
        /// Generator configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Encode a splice info section described as JSON
    Encode {
        /// JSON file, or '-' for stdin
        input: String,
        /// Reject fields wider than their slot instead of truncating
        #[arg(long)]
        strict: bool,
        /// Never set the 33rd bit of PTS and duration fields
        #[arg(long)]
        legacy_overflow_bit: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Cue {
            cue_type,
            event_id,
            duration,
            pre_roll,
            timestamp,
            config,
        } => run_cue(&cue_type, event_id, duration, pre_roll, timestamp, config).map(Output::Cue),
        Command::Encode {
            input,
            strict,
            legacy_overflow_bit,
        } => {
            let options = EncodeOptions {
                strict,
                overflow_bit: if legacy_overflow_bit {
                    OverflowBitMode::AlwaysClear
                } else {
                    OverflowBitMode::Extract
                },
            };
            run_encode(&input, options).map(Output::Section)
        }
    };

    match result {
        Ok(output) => match cli.output {
            OutputFormat::Text => print_text(&output),
            OutputFormat::Json => print_json(&output),
        },
        Err(e) => {
            match cli.output {
                OutputFormat::Text => eprintln!("Error: {e}"),
                OutputFormat::Json => {
                    let error = serde_json::json!({
                        "status": "error",
                        "error": e,
                    });
                    println!("{error}");
                }
            }
            process::exit(1);
        }
    }
}

enum Output {
    Cue(Scte35Message),
    Section(EncodedSection),
}

fn run_cue(
    cue_type: &str,
    event_id: Option<u32>,
    duration: Option<f64>,
    pre_roll: Option<f64>,
    timestamp: Option<String>,
    config: Option<PathBuf>,
) -> Result<Scte35Message, String> {
    let cue_type: CueType = cue_type.parse().map_err(|e| format!("{e}"))?;

    let config = match config {
        Some(path) => GeneratorConfig::from_path(path).map_err(|e| e.to_string())?,
        None => GeneratorConfig::default(),
    };
    debug!(?config, "loaded generator configuration");

    let timestamp = timestamp
        .map(|ts| {
            chrono::DateTime::parse_from_rfc3339(&ts)
                .map(|t| t.with_timezone(&chrono::Utc))
                .map_err(|e| format!("Invalid timestamp {ts:?}: {e}"))
        })
        .transpose()?;

    let command = CueCommand {
        cue_type,
        event_id,
        ad_duration: duration,
        pre_roll_duration: pre_roll,
        timestamp,
    };

    CueGenerator::new(config)
        .generate(&command)
        .map_err(|e| e.to_string())
}

fn run_encode(input: &str, options: EncodeOptions) -> Result<EncodedSection, String> {
    let json = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        buffer
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("Error reading {input}: {e}"))?
    };

    let section: SpliceInfoSection =
        serde_json::from_str(&json).map_err(|e| format!("Error parsing section JSON: {e}"))?;

    encode_section_with(&section, options).map_err(|e| e.to_string())
}

fn print_text(output: &Output) {
    match output {
        Output::Cue(message) => {
            println!("Generated {} cue:", message.command.cue_type);
            println!("  Event ID: {}", message.event_id);
            println!("  Timestamp: {}", message.timestamp);
            if let Some(duration) = message.command.ad_duration {
                println!("  Ad Duration: {duration} seconds");
            }
            println!("  Length: {} bytes", message.bytes.len());
            println!("  Base64: {}", message.base64);
            println!("  Hex: {}", message.hex);
        }
        Output::Section(section) => {
            println!("Encoded SpliceInfoSection:");
            println!("  Length: {} bytes", section.bytes.len());
            println!("  Base64: {}", section.base64);
            println!("  Hex: {}", section.hex);
        }
    }
}

fn print_json(output: &Output) {
    let data = match output {
        Output::Cue(message) => serde_json::to_value(message),
        Output::Section(section) => serde_json::to_value(section),
    };

    match data {
        Ok(data) => {
            let response = serde_json::json!({
                "status": "success",
                "data": data,
            });
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing output: {e}");
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}
