//! Check command implementation
//!
//! Tests a WAV header against a compatibility profile and exits non-zero
//! when any criterion fails.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use wavhdr::{CompatProfile, HeaderError};

use super::json_output::{error_codes, CheckOutput, CheckResult, JsonError};
use crate::input::load_header;

/// Profile overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ProfileArgs<'a> {
    /// JSON profile file; defaults apply when absent
    pub profile_path: Option<&'a str>,
    pub sample_rate: Option<u32>,
    pub bits_per_sample: Option<u16>,
}

/// Builds the effective profile: file (or defaults), then flag overrides.
pub fn resolve_profile(args: &ProfileArgs<'_>) -> Result<CompatProfile> {
    let mut profile = match args.profile_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile: {}", path))?;
            CompatProfile::from_json(&text)
                .with_context(|| format!("Failed to load profile: {}", path))?
        }
        None => CompatProfile::default(),
    };
    if let Some(rate) = args.sample_rate {
        profile.sample_rate = rate;
    }
    if let Some(bits) = args.bits_per_sample {
        profile.bits_per_sample = bits;
    }
    profile.validate()?;
    tracing::debug!(?profile, "resolved compatibility profile");
    Ok(profile)
}

/// Run the check command
///
/// # Arguments
/// * `path` - WAV file to check
/// * `profile_args` - Profile file and overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 when compatible, 1 when incompatible or unreadable
pub fn run(path: &str, profile_args: &ProfileArgs<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(path, profile_args)
    } else {
        run_human(path, profile_args)
    }
}

fn run_human(path: &str, profile_args: &ProfileArgs<'_>) -> Result<ExitCode> {
    let profile = resolve_profile(profile_args)?;
    let loaded = load_header(Path::new(path))
        .with_context(|| format!("Failed to read WAV header: {}", path))?;

    let failures = loaded.header.incompatibilities(&profile);
    if failures.is_empty() {
        println!("{} {}", "compatible:".green().bold(), path);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "incompatible:".red().bold(), path);
    for failure in &failures {
        println!("  {} {}", "-".red(), failure);
    }
    Ok(ExitCode::from(1))
}

fn run_json(path: &str, profile_args: &ProfileArgs<'_>) -> Result<ExitCode> {
    let output = check_output(path, profile_args);
    println!("{}", serde_json::to_string_pretty(&output)?);

    let compatible = output.result.as_ref().is_some_and(|r| r.compatible);
    Ok(if compatible {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Builds the `--json` record for a check, failures included.
pub fn check_output(path: &str, profile_args: &ProfileArgs<'_>) -> CheckOutput {
    let profile = match resolve_profile(profile_args) {
        Ok(profile) => profile,
        Err(e) => return CheckOutput::failure(vec![profile_error(&e, profile_args)]),
    };

    let loaded = match load_header(Path::new(path)) {
        Ok(loaded) => loaded,
        Err(e) => return CheckOutput::failure(vec![JsonError::from(&e).with_file(path)]),
    };

    let failures = loaded.header.incompatibilities(&profile);
    CheckOutput::success(CheckResult {
        compatible: failures.is_empty(),
        profile,
        failures,
    })
}

/// Header errors keep their `WH` code; anything else failed to read the file.
fn profile_error(e: &anyhow::Error, profile_args: &ProfileArgs<'_>) -> JsonError {
    let code = match e.downcast_ref::<HeaderError>() {
        Some(err) => err.code(),
        None => error_codes::PROFILE_READ,
    };
    let error = JsonError::new(code, format!("{:#}", e));
    match profile_args.profile_path {
        Some(p) => error.with_file(p),
        None => error,
    }
}
