//! Error and warning types for header decoding and derived-field checks.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::tag::FourCC;

/// Errors produced while decoding a header or computing derived fields.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Fewer bytes were available than the operation needs.
    #[error("truncated input: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// A container tag did not hold its required ASCII value.
    #[error("invalid {field} tag: expected '{expected}', found '{found}'")]
    InvalidMagic {
        field: &'static str,
        expected: FourCC,
        found: FourCC,
    },

    /// `(bits_per_sample / 8) * channels` is zero, so no frame size exists.
    #[error(
        "cannot derive sample count: bits_per_sample={bits_per_sample}, channels={channels} gives a zero frame size"
    )]
    DivisionByZero { bits_per_sample: u16, channels: u16 },

    /// A compatibility profile that can never accept a header.
    #[error("invalid compatibility profile: {0}")]
    InvalidProfile(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HeaderError {
    /// Returns the stable error code string (e.g., "WH001").
    pub fn code(&self) -> &'static str {
        match self {
            HeaderError::TruncatedInput { .. } => "WH001",
            HeaderError::InvalidMagic { .. } => "WH002",
            HeaderError::DivisionByZero { .. } => "WH003",
            HeaderError::InvalidProfile(_) => "WH004",
            HeaderError::Io(_) => "WH005",
        }
    }
}

/// Non-fatal inconsistencies between header fields.
///
/// None of these affect the compatibility predicate; they are reported so a
/// caller can decide whether to trust derived values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderWarning {
    /// `blockAlign` disagrees with `channels * bits_per_sample / 8`.
    BlockAlignMismatch { found: u16, expected: u32 },
    /// `bytesPerSec` disagrees with `sample_rate * blockAlign`.
    ByteRateMismatch { found: u32, expected: u64 },
    /// `ChunkSize` disagrees with `36 + Subchunk2Size`.
    ChunkSizeMismatch { found: u32, expected: u64 },
    /// Format sub-chunk size other than the PCM value of 16.
    NonPcmFmtSize { found: u32 },
    /// Bit depth not a multiple of 8.
    UnalignedBitDepth { bits_per_sample: u16 },
    /// Payload length not a whole number of frames.
    PartialFrame { data_len: u32, frame_size: u32 },
}

impl HeaderWarning {
    /// Returns the warning code string (e.g., "WH-W001").
    pub fn code(&self) -> &'static str {
        match self {
            HeaderWarning::BlockAlignMismatch { .. } => "WH-W001",
            HeaderWarning::ByteRateMismatch { .. } => "WH-W002",
            HeaderWarning::ChunkSizeMismatch { .. } => "WH-W003",
            HeaderWarning::NonPcmFmtSize { .. } => "WH-W004",
            HeaderWarning::UnalignedBitDepth { .. } => "WH-W005",
            HeaderWarning::PartialFrame { .. } => "WH-W006",
        }
    }
}

impl fmt::Display for HeaderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderWarning::BlockAlignMismatch { found, expected } => {
                write!(f, "Block align {} does not match expected {}", found, expected)
            }
            HeaderWarning::ByteRateMismatch { found, expected } => {
                write!(f, "Byte rate {} does not match expected {}", found, expected)
            }
            HeaderWarning::ChunkSizeMismatch { found, expected } => {
                write!(
                    f,
                    "RIFF chunk size {} does not match expected {} (36 + data length)",
                    found, expected
                )
            }
            HeaderWarning::NonPcmFmtSize { found } => {
                write!(f, "Format chunk size {} (PCM uses 16)", found)
            }
            HeaderWarning::UnalignedBitDepth { bits_per_sample } => {
                write!(f, "Bits per sample {} is not byte-aligned", bits_per_sample)
            }
            HeaderWarning::PartialFrame {
                data_len,
                frame_size,
            } => {
                write!(
                    f,
                    "Data length {} is not a multiple of the {}-byte frame size",
                    data_len, frame_size
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            HeaderError::TruncatedInput {
                expected: 44,
                actual: 3,
            },
            HeaderError::InvalidMagic {
                field: "RIFF",
                expected: FourCC::RIFF,
                found: FourCC::new(*b"RIFX"),
            },
            HeaderError::DivisionByZero {
                bits_per_sample: 0,
                channels: 2,
            },
            HeaderError::InvalidProfile("empty".to_string()),
            HeaderError::Io(io::Error::other("boom")),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_invalid_magic_message() {
        let err = HeaderError::InvalidMagic {
            field: "RIFF",
            expected: FourCC::RIFF,
            found: FourCC::new(*b"RIFX"),
        };
        assert_eq!(
            err.to_string(),
            "invalid RIFF tag: expected 'RIFF', found 'RIFX'"
        );
    }

    #[test]
    fn test_warning_display() {
        let w = HeaderWarning::BlockAlignMismatch {
            found: 2,
            expected: 4,
        };
        assert_eq!(w.to_string(), "Block align 2 does not match expected 4");
        assert_eq!(w.code(), "WH-W001");
    }
}
