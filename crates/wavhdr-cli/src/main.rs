//! wavhdr CLI - Command-line interface for canonical WAV headers
//!
//! This binary inspects, checks, and writes the 44-byte RIFF/WAVE PCM header.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavhdr_cli::commands;
use wavhdr_cli::commands::check::ProfileArgs;
use wavhdr_cli::commands::write::WriteParams;
use wavhdr_cli::logging;

/// wavhdr - Canonical RIFF/WAVE header tool
#[derive(Parser)]
#[command(name = "wavhdr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug diagnostics to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every header field, derived values, and consistency warnings
    Inspect {
        /// Path to the WAV file
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check a WAV header against a compatibility profile (exit 1 if incompatible)
    Check {
        /// Path to the WAV file
        file: String,

        /// JSON profile file (default: 16 kHz, 16-bit, mono/stereo PCM)
        #[arg(short, long)]
        profile: Option<String>,

        /// Override the required sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Override the required bits per sample
        #[arg(long)]
        bits: Option<u16>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write a canonical PCM WAV file containing silence
    Write {
        /// Output file path
        out: String,

        /// Number of channels
        #[arg(short, long, default_value_t = 1)]
        channels: u16,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = 16_000)]
        sample_rate: u32,

        /// Bits per sample (multiple of 8)
        #[arg(short, long, default_value_t = 16)]
        bits: u16,

        /// Number of sample frames
        #[arg(short, long, default_value_t = 0)]
        frames: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    let result = match cli.command {
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
        Commands::Check {
            file,
            profile,
            sample_rate,
            bits,
            json,
        } => commands::check::run(
            &file,
            &ProfileArgs {
                profile_path: profile.as_deref(),
                sample_rate,
                bits_per_sample: bits,
            },
            json,
        ),
        Commands::Write {
            out,
            channels,
            sample_rate,
            bits,
            frames,
            json,
        } => commands::write::run(
            &out,
            WriteParams {
                channels,
                sample_rate,
                bits_per_sample: bits,
                frames,
            },
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["wavhdr", "inspect", "a.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { file, json } => {
                assert_eq!(file, "a.wav");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_check_overrides() {
        let cli = Cli::try_parse_from([
            "wavhdr",
            "check",
            "a.wav",
            "--profile",
            "p.json",
            "--sample-rate",
            "48000",
            "--bits",
            "24",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                profile,
                sample_rate,
                bits,
                json,
                ..
            } => {
                assert_eq!(profile.as_deref(), Some("p.json"));
                assert_eq!(sample_rate, Some(48_000));
                assert_eq!(bits, Some(24));
                assert!(!json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_write_defaults() {
        let cli = Cli::try_parse_from(["wavhdr", "write", "out.wav"]).unwrap();
        match cli.command {
            Commands::Write {
                channels,
                sample_rate,
                bits,
                frames,
                ..
            } => {
                assert_eq!(channels, 1);
                assert_eq!(sample_rate, 16_000);
                assert_eq!(bits, 16);
                assert_eq!(frames, 0);
            }
            _ => panic!("expected write command"),
        }
    }

    #[test]
    fn test_cli_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["wavhdr", "inspect", "a.wav", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.debug);
    }
}
