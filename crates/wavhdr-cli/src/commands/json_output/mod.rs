//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints one of the `*Output` records in
//! [`records`], all sharing the `success` / `errors` / `warnings` / `result`
//! shape.

mod records;

pub use records::{CheckOutput, CheckResult, HeaderReport, InspectOutput, WriteOutput};

use serde::{Deserialize, Serialize};
use wavhdr::{HeaderError, HeaderWarning};

/// Error codes for CLI operations.
///
/// Header errors pass through their own `WH` codes, including profile
/// validation failures.
pub mod error_codes {
    /// Profile file could not be opened or read from disk
    pub const PROFILE_READ: &str = "CLI_001";
    /// Write parameters describe no valid stream
    pub const INVALID_PARAMS: &str = "CLI_002";
    /// Output file could not be created or written
    pub const WRITE_FAILED: &str = "CLI_003";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// File holds fewer payload bytes than the header declares
    pub const PAYLOAD_TRUNCATED: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WH002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&HeaderError> for JsonError {
    fn from(err: &HeaderError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "WH-W001", "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&HeaderWarning> for JsonWarning {
    fn from(warning: &HeaderWarning) -> Self {
        JsonWarning::new(warning.code(), warning.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("WH001", "truncated").with_file("a.wav");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"WH001\""));
        assert!(json.contains("\"message\":\"truncated\""));
        assert!(json.contains("\"file\":\"a.wav\""));
    }

    #[test]
    fn test_json_error_optional_fields_skipped() {
        let error = JsonError::new("WH001", "truncated");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("\"file\""));
    }

    #[test]
    fn test_header_error_conversion_keeps_code() {
        let err = HeaderError::DivisionByZero {
            bits_per_sample: 0,
            channels: 1,
        };
        let json = JsonError::from(&err);
        assert_eq!(json.code, "WH003");
        assert!(json.message.contains("zero frame size"));
    }
}
