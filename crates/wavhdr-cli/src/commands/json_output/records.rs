//! Output record types for the inspect, check, and write commands.

use serde::Serialize;
use wavhdr::{CompatProfile, Incompatibility, WavHeader};

use super::{JsonError, JsonWarning};

/// Decoded header plus every derived value the CLI reports.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    /// Raw header fields
    pub header: WavHeader,
    /// Human-readable name of the format code
    pub format_name: &'static str,
    /// Sample frames, absent when the frame size is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u32>,
    /// Duration in seconds, absent when undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Result of the default compatibility check
    pub compatible: bool,
    /// Whether the data tag is exactly "data"
    pub exact_data_tag: bool,
}

impl HeaderReport {
    pub fn new(header: WavHeader) -> Self {
        Self {
            header,
            format_name: header.format().name(),
            sample_count: header.wav_sample_count().ok(),
            duration_seconds: header.duration_seconds(),
            compatible: header.is_compatible(),
            exact_data_tag: header.has_data_tag(),
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Whether the header was decoded
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<HeaderReport>,
}

impl InspectOutput {
    pub fn success(report: HeaderReport, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(report),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Compatibility verdict for the `check` command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub compatible: bool,
    /// Profile the header was checked against
    pub profile: CompatProfile,
    /// Failed criteria, empty when compatible
    pub failures: Vec<Incompatibility>,
}

/// JSON output for the `check` command.
///
/// `success` reports whether the check ran; the verdict lives in `result`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CheckResult>,
}

impl CheckOutput {
    pub fn success(result: CheckResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `write` command.
#[derive(Debug, Clone, Serialize)]
pub struct WriteOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    /// Path that was written
    pub path: String,
    /// Bytes written, header included
    pub bytes_written: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<HeaderReport>,
}

impl WriteOutput {
    pub fn failure(path: impl Into<String>, error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            path: path.into(),
            bytes_written: 0,
            result: None,
        }
    }
}
