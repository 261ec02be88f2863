//! Inspect command implementation
//!
//! Decodes the header of a WAV file and prints every field, the derived
//! values, consistency warnings, and the default compatibility verdict.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavhdr::WavHeader;

use super::json_output::{warning_codes, HeaderReport, InspectOutput, JsonError, JsonWarning};
use crate::input::{load_header, LoadedHeader};

/// Run the inspect command
///
/// # Arguments
/// * `path` - WAV file to inspect
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 when the header decodes, 1 otherwise
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(path)
    } else {
        run_human(path)
    }
}

/// Collects header consistency warnings plus the payload-size check.
pub fn collect_warnings(loaded: &LoadedHeader) -> Vec<JsonWarning> {
    let mut warnings: Vec<JsonWarning> = loaded
        .header
        .consistency_warnings()
        .iter()
        .map(JsonWarning::from)
        .collect();
    if loaded.payload_truncated() {
        warnings.push(JsonWarning::new(
            warning_codes::PAYLOAD_TRUNCATED,
            format!(
                "Header declares {} data bytes but only {} follow the header",
                loaded.header.wav_length(),
                loaded.available_payload()
            ),
        ));
    }
    warnings
}

fn run_human(path: &str) -> Result<ExitCode> {
    let loaded = load_header(Path::new(path))
        .with_context(|| format!("Failed to read WAV header: {}", path))?;
    let header = &loaded.header;

    println!("{} {}", "Inspecting:".cyan().bold(), path);
    print_fields(header);

    println!("\n{}", "Derived:".cyan().bold());
    println!("  {} {}", "Payload bytes:".dimmed(), header.wav_length());
    match header.wav_sample_count() {
        Ok(frames) => println!("  {} {}", "Sample frames:".dimmed(), frames),
        Err(e) => println!("  {} {}", "Sample frames:".dimmed(), e.to_string().red()),
    }
    if let Some(seconds) = header.duration_seconds() {
        println!("  {} {:.3} s", "Duration:".dimmed(), seconds);
    }

    let warnings = collect_warnings(&loaded);
    if !warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for w in &warnings {
            println!("  {} {}", format!("[{}]", w.code).yellow(), w.message);
        }
    }

    println!();
    if header.is_compatible() {
        println!("{}", "Compatible (16 kHz, 16-bit PCM)".green().bold());
    } else {
        println!("{}", "Not compatible (16 kHz, 16-bit PCM)".red().bold());
    }
    if header.has_weak_data_tag() && !header.has_data_tag() {
        println!(
            "{} data tag '{}' only matches on bytes 0 and 3",
            "note:".yellow(),
            header.subchunk2_id
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(path: &str) -> Result<ExitCode> {
    let loaded = match load_header(Path::new(path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = InspectOutput::failure(vec![JsonError::from(&e).with_file(path)]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let warnings = collect_warnings(&loaded);
    let output = InspectOutput::success(HeaderReport::new(loaded.header), warnings);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

/// Prints each header field at its byte offset.
fn print_fields(header: &WavHeader) {
    let rows: [(&str, &str, String); 13] = [
        ("0", "RIFF", header.riff.to_string()),
        ("4", "ChunkSize", header.chunk_size.to_string()),
        ("8", "WAVE", header.wave.to_string()),
        ("12", "fmt", header.fmt.to_string()),
        ("16", "Subchunk1Size", header.subchunk1_size.to_string()),
        ("20", "AudioFormat", header.format().to_string()),
        ("22", "NumOfChan", header.num_channels.to_string()),
        ("24", "SamplesPerSec", header.sample_rate.to_string()),
        ("28", "bytesPerSec", header.byte_rate.to_string()),
        ("32", "blockAlign", header.block_align.to_string()),
        ("34", "bitsPerSample", header.bits_per_sample.to_string()),
        ("36", "Subchunk2ID", header.subchunk2_id.to_string()),
        ("40", "Subchunk2Size", header.subchunk2_size.to_string()),
    ];
    for (offset, name, value) in rows {
        println!("  {:>2}  {:<14} {}", offset, name, value);
    }
}
