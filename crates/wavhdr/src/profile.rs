//! Compatibility profiles.
//!
//! A profile names the stream shape a consumer accepts. The default profile is
//! 16 kHz, 16-bit, mono or stereo linear PCM; every profile also applies the
//! same two-byte `data` tag check.

use serde::{Deserialize, Serialize};

use crate::error::HeaderError;
use crate::format::AudioFormat;
use crate::tag::FourCC;

/// Accepted stream parameters for [`WavHeader::is_compatible_with`].
///
/// [`WavHeader::is_compatible_with`]: crate::WavHeader::is_compatible_with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompatProfile {
    /// Required `AudioFormat` code.
    pub audio_format: u16,
    /// Accepted channel counts.
    pub channels: Vec<u16>,
    /// Required sample rate in Hz.
    pub sample_rate: u32,
    /// Required bit depth.
    pub bits_per_sample: u16,
}

impl Default for CompatProfile {
    fn default() -> Self {
        Self {
            audio_format: AudioFormat::Pcm.code(),
            channels: vec![1, 2],
            sample_rate: 16_000,
            bits_per_sample: 16,
        }
    }
}

impl CompatProfile {
    /// Rejects profiles that no header could satisfy in a meaningful way.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.channels.is_empty() {
            return Err(HeaderError::InvalidProfile(
                "channel list cannot be empty".to_string(),
            ));
        }
        if self.channels.contains(&0) {
            return Err(HeaderError::InvalidProfile(
                "channel count 0 is not a valid choice".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(HeaderError::InvalidProfile(
                "sample rate cannot be zero".to_string(),
            ));
        }
        if self.bits_per_sample == 0 {
            return Err(HeaderError::InvalidProfile(
                "bits per sample cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a profile from JSON. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, HeaderError> {
        let profile: CompatProfile = serde_json::from_str(text)
            .map_err(|e| HeaderError::InvalidProfile(format!("malformed profile JSON: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }
}

/// One reason a header failed a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum Incompatibility {
    AudioFormat { found: u16, expected: u16 },
    Channels { found: u16, accepted: Vec<u16> },
    SampleRate { found: u32, expected: u32 },
    BitsPerSample { found: u16, expected: u16 },
    /// Byte 0 is not `d` or byte 3 is not `a`.
    DataTag { found: FourCC },
}

impl std::fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Incompatibility::AudioFormat { found, expected } => write!(
                f,
                "audio format {} (expected {})",
                AudioFormat::from(*found),
                AudioFormat::from(*expected)
            ),
            Incompatibility::Channels { found, accepted } => {
                write!(f, "{} channels (accepted: {:?})", found, accepted)
            }
            Incompatibility::SampleRate { found, expected } => {
                write!(f, "sample rate {} Hz (expected {} Hz)", found, expected)
            }
            Incompatibility::BitsPerSample { found, expected } => {
                write!(f, "{} bits per sample (expected {})", found, expected)
            }
            Incompatibility::DataTag { found } => {
                write!(f, "data sub-chunk tag '{}' (expected 'd??a')", found)
            }
        }
    }
}
