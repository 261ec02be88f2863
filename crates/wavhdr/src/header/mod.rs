//! The canonical 44-byte RIFF/WAVE PCM header.
//!
//! Layout (all integers little-endian, tags are raw bytes):
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0      | 4    | "RIFF"         |
//! | 4      | 4    | chunk size     |
//! | 8      | 4    | "WAVE"         |
//! | 12     | 4    | "fmt "         |
//! | 16     | 4    | fmt chunk size |
//! | 20     | 2    | audio format   |
//! | 22     | 2    | channels       |
//! | 24     | 4    | sample rate    |
//! | 28     | 4    | byte rate      |
//! | 32     | 2    | block align    |
//! | 34     | 2    | bits/sample    |
//! | 36     | 4    | "data"         |
//! | 40     | 4    | data length    |

mod codec;
mod consistency;


use std::fmt;

use serde::Serialize;

use crate::error::HeaderError;
use crate::format::AudioFormat;
use crate::profile::{CompatProfile, Incompatibility};
use crate::tag::FourCC;

/// Size of the canonical header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Size of the PCM format sub-chunk body.
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// Bytes counted by the RIFF chunk size ahead of the payload (44 - 8).
pub const RIFF_OVERHEAD: u32 = 36;

/// First 44 bytes of a canonical PCM WAVE file.
///
/// Fields are kept exactly as stored, including values the helpers consider
/// invalid, so that decoding then encoding is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WavHeader {
    pub riff: FourCC,
    /// Total file size minus 8.
    pub chunk_size: u32,
    pub wave: FourCC,
    pub fmt: FourCC,
    /// Size of the format sub-chunk (16 for PCM).
    pub subchunk1_size: u32,
    /// Raw format code; see [`WavHeader::format`].
    pub audio_format: u16,
    pub num_channels: u16,
    /// Sampling rate in Hz.
    pub sample_rate: u32,
    /// Average bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame across all channels.
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub subchunk2_id: FourCC,
    /// Length of the sample payload in bytes.
    pub subchunk2_size: u32,
}

impl Default for WavHeader {
    fn default() -> Self {
        Self::pcm(1, 16_000, 16, 0)
    }
}

impl WavHeader {
    /// Builds a canonical PCM header with all derived fields filled in.
    ///
    /// Arithmetic wraps at the field widths rather than panicking; callers
    /// writing payloads near 4 GiB should check `data_len` themselves.
    pub fn pcm(num_channels: u16, sample_rate: u32, bits_per_sample: u16, data_len: u32) -> Self {
        let block_align = num_channels.wrapping_mul(bits_per_sample / 8);
        Self {
            riff: FourCC::RIFF,
            chunk_size: RIFF_OVERHEAD.wrapping_add(data_len),
            wave: FourCC::WAVE,
            fmt: FourCC::FMT,
            subchunk1_size: PCM_FMT_CHUNK_SIZE,
            audio_format: AudioFormat::Pcm.code(),
            num_channels,
            sample_rate,
            byte_rate: sample_rate.wrapping_mul(block_align as u32),
            block_align,
            bits_per_sample,
            subchunk2_id: FourCC::DATA,
            subchunk2_size: data_len,
        }
    }

    /// Returns a copy with the payload length (and RIFF chunk size) updated.
    pub fn with_data_len(mut self, data_len: u32) -> Self {
        self.subchunk2_size = data_len;
        self.chunk_size = RIFF_OVERHEAD.wrapping_add(data_len);
        self
    }

    /// Typed view of the `AudioFormat` field.
    pub fn format(&self) -> AudioFormat {
        AudioFormat::from(self.audio_format)
    }

    /// Checks the header against the default profile: 16 kHz, 16-bit, mono
    /// or stereo linear PCM with a `d??a` data tag.
    ///
    /// The data tag check inspects only bytes 0 and 3, so `dXXa` passes.
    /// Use [`WavHeader::has_data_tag`] for an exact comparison.
    pub fn is_compatible(&self) -> bool {
        self.is_compatible_with(&CompatProfile::default())
    }

    /// Checks the header against `profile`. See [`WavHeader::is_compatible`].
    pub fn is_compatible_with(&self, profile: &CompatProfile) -> bool {
        self.audio_format == profile.audio_format
            && profile.channels.contains(&self.num_channels)
            && self.sample_rate == profile.sample_rate
            && self.bits_per_sample == profile.bits_per_sample
            && self.has_weak_data_tag()
    }

    /// Lists every criterion of `profile` this header fails, in field order.
    pub fn incompatibilities(&self, profile: &CompatProfile) -> Vec<Incompatibility> {
        let mut out = Vec::new();
        if self.audio_format != profile.audio_format {
            out.push(Incompatibility::AudioFormat {
                found: self.audio_format,
                expected: profile.audio_format,
            });
        }
        if !profile.channels.contains(&self.num_channels) {
            out.push(Incompatibility::Channels {
                found: self.num_channels,
                accepted: profile.channels.clone(),
            });
        }
        if self.sample_rate != profile.sample_rate {
            out.push(Incompatibility::SampleRate {
                found: self.sample_rate,
                expected: profile.sample_rate,
            });
        }
        if self.bits_per_sample != profile.bits_per_sample {
            out.push(Incompatibility::BitsPerSample {
                found: self.bits_per_sample,
                expected: profile.bits_per_sample,
            });
        }
        if !self.has_weak_data_tag() {
            out.push(Incompatibility::DataTag {
                found: self.subchunk2_id,
            });
        }
        out
    }

    /// Byte 0 is `d` and byte 3 is `a`. Bytes 1 and 2 are not examined.
    pub fn has_weak_data_tag(&self) -> bool {
        let id = self.subchunk2_id.as_bytes();
        id[0] == b'd' && id[3] == b'a'
    }

    /// Exact four-byte comparison against `data`.
    pub fn has_data_tag(&self) -> bool {
        self.subchunk2_id == FourCC::DATA
    }

    /// Declared payload length in bytes, unverified against any file size.
    pub fn wav_length(&self) -> u32 {
        self.subchunk2_size
    }

    /// Number of sample frames: `data_len / ((bits / 8) * channels)`.
    ///
    /// Both divisions truncate. Fails when the frame size is zero, which
    /// happens for `bits_per_sample < 8` or zero channels.
    pub fn wav_sample_count(&self) -> Result<u32, HeaderError> {
        let frame_size = self.frame_size();
        if frame_size == 0 {
            tracing::debug!(
                bits_per_sample = self.bits_per_sample,
                channels = self.num_channels,
                "zero frame size, sample count undefined"
            );
            return Err(HeaderError::DivisionByZero {
                bits_per_sample: self.bits_per_sample,
                channels: self.num_channels,
            });
        }
        Ok(self.wav_length() / frame_size)
    }

    /// `(bits_per_sample / 8) * num_channels`, computed without overflow.
    pub fn frame_size(&self) -> u32 {
        (self.bits_per_sample / 8) as u32 * self.num_channels as u32
    }

    /// Playback length in seconds, or `None` when the sample count or rate
    /// is degenerate.
    pub fn duration_seconds(&self) -> Option<f64> {
        if self.sample_rate == 0 {
            return None;
        }
        let frames = self.wav_sample_count().ok()?;
        Some(frames as f64 / self.sample_rate as f64)
    }

    /// Slices the declared payload out of a complete file buffer.
    ///
    /// Assumes the canonical layout, with the payload starting at offset 44.
    pub fn payload<'a>(&self, file: &'a [u8]) -> Result<&'a [u8], HeaderError> {
        let truncated = |expected| HeaderError::TruncatedInput {
            expected,
            actual: file.len(),
        };
        // Saturates on 32-bit targets, where no slice can hold that much.
        let end = HEADER_SIZE
            .checked_add(self.subchunk2_size as usize)
            .ok_or_else(|| truncated(usize::MAX))?;
        if file.len() < end {
            return Err(truncated(end));
        }
        Ok(&file[HEADER_SIZE..end])
    }
}

impl fmt::Display for WavHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-bit {} ch @ {} Hz, {} data bytes",
            self.format(),
            self.bits_per_sample,
            self.num_channels,
            self.sample_rate,
            self.subchunk2_size
        )
    }
}
