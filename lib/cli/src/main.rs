use std::{fmt::Display, fs, time::Instant};

use clap::{Parser, Subcommand};
use log::debug;

mod config;
mod value_notation;

use config::{OutputConfig, Radix};
use value_notation::NotationError;

#[derive(Debug, Parser)]
#[command(name = "vlq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Encode and decode variable-length quantities", long_about = None)]
struct Cli {
    /// Path to the output config JSON file
    #[arg(long, short = 'c', global = true)]
    config: Option<String>,
    /// Prevents information like time elapsed from being printed.
    #[arg(long, short = 's', global = true)]
    silent: bool,
    /// The radix decoded values are printed in, overriding the config file
    #[arg(long, global = true)]
    radix: Option<Radix>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode integers (decimal, 0x hex or 0b binary) into VLQ bytes
    Encode {
        #[arg(num_args = 0..)]
        values: Vec<String>,
    },
    /// Decode hex-encoded VLQ bytes into integers
    Decode {
        #[arg(num_args = 0..)]
        hex: Vec<String>,
    },
}

#[derive(Debug)]
enum CommandError {
    Notation(NotationError),
    Decode(vlq::DecodeError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notation(err) => f.write_fmt(format_args!("invalid input: {}", err)),
            Self::Decode(err) => f.write_fmt(format_args!("failed to decode: {}", err)),
        }
    }
}

fn exit_with_error(args: std::fmt::Arguments) -> ! {
    eprintln!("{}", args);
    std::process::exit(1);
}

fn elapsed_to_string(start: &Instant) -> String {
    let elapsed = start.elapsed();
    let ms = elapsed.as_millis();
    let us = elapsed.as_micros();
    if ms == 0 {
        format!("{}us", us)
    } else {
        let s = elapsed.as_secs();
        if s == 0 {
            format!("{}.{:03}ms", ms, us % 1000)
        } else {
            format!("{}.{:03}s", s, ms % 1000)
        }
    }
}

fn run_encode(tokens: &[String], config: &OutputConfig) -> Result<String, CommandError> {
    let values = value_notation::parse_values(tokens).map_err(CommandError::Notation)?;
    debug!("encoding {} values", values.len());
    let buf = vlq::encode(&values);
    Ok(value_notation::format_bytes(&buf, config))
}

fn run_decode(tokens: &[String], config: &OutputConfig) -> Result<String, CommandError> {
    let bytes = value_notation::parse_hex(tokens).map_err(CommandError::Notation)?;
    debug!("decoding {} bytes", bytes.len());
    let values = vlq::decode(&bytes).map_err(CommandError::Decode)?;
    Ok(value_notation::format_values(&values, config))
}

fn main() {
    pretty_env_logger::init();

    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => match OutputConfig::from_json(&json) {
                Ok(config) => config,
                Err(err) => exit_with_error(format_args!("failed to parse config JSON: {}", err)),
            },
            Err(err) => exit_with_error(format_args!(
                "failed to read config JSON file at '{}': {}",
                path, err
            )),
        },
        None => OutputConfig::default(),
    };
    if let Some(radix) = args.radix {
        config.radix = radix;
    }
    debug!("output config: {:?}", config);

    let start = Instant::now();
    let (verb, result) = match &args.command {
        Command::Encode { values } => ("encoded", run_encode(values, &config)),
        Command::Decode { hex } => ("decoded", run_decode(hex, &config)),
    };

    match result {
        Ok(output) => {
            if !args.silent {
                println!("{} in {}\n", verb, elapsed_to_string(&start));
            }
            println!("{}", output);
        }
        Err(err) => exit_with_error(format_args!("{}", err)),
    }
}
