//! TAS Script Formatter
//!
//! Reads a script from stdin or a file and writes it back with every action
//! line in canonical form, or as JSON for inspection.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use tas_script::app::Config;
use tas_script::script::{parse_script, ScriptLine};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<String> = None;
    let mut config_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut strict_floats = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--input" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            },
            "-s" | "--strict-floats" => {
                strict_floats = true;
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                } else {
                    tracing::warn!("Ignoring unknown argument: {}", args[i]);
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match &config_file {
        Some(path) => match Config::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default(),
    };
    if strict_floats {
        config.ignore_invalid_floats = false;
    }

    // Read input
    let text = match &input_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            text
        },
    };

    let lines = parse_script(&text, &config);
    let action_count = lines.iter().filter(|line| line.is_action()).count();
    let frame_total: u64 = lines
        .iter()
        .filter_map(|line| match line {
            ScriptLine::Action(action_line) => Some(u64::from(action_line.frames)),
            _ => None,
        })
        .sum();
    tracing::info!(
        "Parsed {} lines ({} action lines, {} frames)",
        lines.len(),
        action_count,
        frame_total
    );

    // Output result
    match output_format {
        OutputFormat::Text => {
            for line in &lines {
                println!("{}", line);
            }
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&lines) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing script: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("TAS Script Formatter");
    println!();
    println!("Usage: tas-fmt [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -i, --input <PATH>   Read script from file");
    println!("  -c, --config <PATH>  Load parse settings from a JSON file");
    println!("  -s, --strict-floats  Reject lines with malformed feather values");
    println!("  -j, --json           Output parsed lines as JSON");
    println!("  -h, --help           Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  echo '15rj' | tas-fmt");
    println!("  tas-fmt --json level1.tas > level1.json");
}
